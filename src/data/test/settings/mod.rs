use crate::{
    data::{settings::SettingsRepository, store::ConfigStore},
    error::{store::StoreError, AppError},
    model::settings::{GuildSettings, DEFAULT_DM_MESSAGE, DEFAULT_KICK_MESSAGE},
};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory::settings::SettingsDocumentFactory};

mod load;
mod save;
mod update;
