pub mod definitions;
pub mod game;
pub mod utility;

use tracing::{debug, warn};
use twilight_model::application::interaction::{
    Interaction, InteractionData, InteractionType, application_command::CommandData,
    message_component::MessageComponentInteractionData,
};

use ember_core::Context;
use ember_utils::interaction::Responder;
use ember_utils::pagination::{ComponentAction, parse_custom_id};

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::test::META,
    utility::ask::META,
    game::challenge::META,
    // Add new commands here
];

/// Route one interaction to its handler.
///
/// Unknown commands, unknown component prefixes and stale keys are ignored
/// without answering.
pub async fn handle_interaction(
    ctx: &Context,
    interaction: &Interaction,
    responder: &dyn Responder,
) -> anyhow::Result<()> {
    if interaction.kind == InteractionType::Ping {
        return responder.pong().await;
    }

    match interaction.data.as_ref() {
        Some(InteractionData::ApplicationCommand(data)) => {
            handle_command(ctx, interaction, data, responder).await
        }
        Some(InteractionData::MessageComponent(data)) => {
            handle_component(ctx, interaction, data, responder).await
        }
        _ => {
            debug!(kind = ?interaction.kind, "ignoring unsupported interaction");
            Ok(())
        }
    }
}

async fn handle_command(
    ctx: &Context,
    interaction: &Interaction,
    data: &CommandData,
    responder: &dyn Responder,
) -> anyhow::Result<()> {
    debug!(command = %data.name, "command invoked");

    match data.name.as_str() {
        "test" => utility::test::run(responder).await,
        "ask" => utility::ask::run(ctx, interaction, data, responder).await,
        "challenge" => game::challenge::run(ctx, interaction, data, responder).await,
        // Add new commands here
        unknown => {
            warn!(command = unknown, "unknown command");
            Ok(())
        }
    }
}

async fn handle_component(
    ctx: &Context,
    interaction: &Interaction,
    data: &MessageComponentInteractionData,
    responder: &dyn Responder,
) -> anyhow::Result<()> {
    let Some(token) = parse_custom_id(&data.custom_id) else {
        debug!(custom_id = %data.custom_id, "ignoring unknown component");
        return Ok(());
    };

    match token.action {
        ComponentAction::Accept => {
            game::challenge::handle_accept(ctx, interaction, &token.key, responder).await
        }
        ComponentAction::SelectChoice => {
            game::challenge::handle_select(ctx, interaction, data, &token.key, responder).await
        }
        ComponentAction::PreviousPage | ComponentAction::NextPage => {
            utility::ask::handle_pagination_interaction(ctx, &token, responder).await
        }
    }
}
