use crate::{
    data::{store::ConfigStore, whitelist::WhitelistRepository},
    error::{store::StoreError, AppError},
    model::whitelist::Whitelist,
};
use serde_json::json;
use test_utils::builder::TestBuilder;

mod load;
mod update;
