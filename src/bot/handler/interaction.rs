use serenity::all::{Context, Interaction};

use crate::bot::{command, component, handler::Handler};

/// Routes an interaction to the command, component or modal handlers
pub async fn handle_interaction(handler: &Handler, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => {
            command::handle_command(&handler.store, &ctx, &command).await
        }
        Interaction::Component(interaction) => {
            component::handle_component(&handler.store, &handler.prompts, &ctx, &interaction)
                .await
        }
        Interaction::Modal(interaction) => {
            component::modal::handle_modal(&handler.store, &ctx, &interaction).await
        }
        _ => {}
    }
}
