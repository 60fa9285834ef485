use tracing::{debug, warn};
use twilight_model::{
    application::interaction::{
        Interaction, application_command::CommandData,
        message_component::MessageComponentInteractionData,
    },
    channel::message::component::{
        ActionRow, Button, ButtonStyle, Component, SelectMenu, SelectMenuOption, SelectMenuType,
    },
};

use ember_core::Context;
use ember_store::Challenge;
use ember_utils::emoji::random_emoji;
use ember_utils::interaction::{Reply, Responder, command_string_option};
use ember_utils::pagination::{ComponentAction, build_custom_id};

use super::rps::{Choice, Player, result_text, shuffled_choices};
use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "challenge",
    desc: "Challenge someone to rock paper scissors",
};

/// Name of the option carrying the challenger's pick.
pub const OBJECT_OPTION: &str = "object";

const CHOICE_PROMPT: &str = "What is your object of choice?";

/// Open a challenge and post it with an accept button.
pub async fn run(
    ctx: &Context,
    interaction: &Interaction,
    data: &CommandData,
    responder: &dyn Responder,
) -> anyhow::Result<()> {
    let Some(challenger_id) = interaction.author_id() else {
        warn!("challenge invoked without a user");
        return Ok(());
    };

    let choice = match command_string_option(data, OBJECT_OPTION).map(str::parse::<Choice>) {
        Some(Ok(choice)) => choice,
        Some(Err(unknown)) => {
            return responder
                .reply(Reply::text(format!("Cannot challenge with {unknown}.")).ephemeral())
                .await;
        }
        None => {
            return responder
                .reply(Reply::text("Pick an object to challenge with.").ephemeral())
                .await;
        }
    };

    let key = interaction.id.to_string();
    ctx.challenges
        .create(
            key.clone(),
            Challenge {
                challenger_id: challenger_id.get(),
                choice: choice.name().to_owned(),
            },
        )
        .await;
    debug!(%key, "challenge opened");

    let content = format!("Rock paper scissors challenge from <@{challenger_id}>");
    responder
        .reply(Reply::text(content).with_components(accept_components(&key)))
        .await
}

/// Show the opponent a private selection menu and drop the challenge post.
pub async fn handle_accept(
    ctx: &Context,
    interaction: &Interaction,
    key: &str,
    responder: &dyn Responder,
) -> anyhow::Result<()> {
    if !ctx.challenges.contains(key).await {
        debug!(%key, "challenge not found");
        return Ok(());
    }

    responder
        .reply(
            Reply::text(CHOICE_PROMPT)
                .with_components(choice_components(key))
                .ephemeral(),
        )
        .await?;

    if let Some(message) = interaction.message.as_ref()
        && let Err(source) = responder.delete_message(message.id).await
    {
        warn!(?source, %key, "failed to delete challenge message");
    }

    Ok(())
}

/// Settle the challenge with the opponent's pick and announce the result.
pub async fn handle_select(
    ctx: &Context,
    interaction: &Interaction,
    data: &MessageComponentInteractionData,
    key: &str,
    responder: &dyn Responder,
) -> anyhow::Result<()> {
    let Some(opponent_choice) = data
        .values
        .first()
        .and_then(|value| value.parse::<Choice>().ok())
    else {
        debug!(%key, values = ?data.values, "ignoring unknown selection");
        return Ok(());
    };

    let Some(opponent_id) = interaction.author_id() else {
        warn!(%key, "selection without a user");
        return Ok(());
    };

    let Some(challenge) = ctx.challenges.take(key).await else {
        debug!(%key, "challenge not found");
        return Ok(());
    };

    let Ok(challenger_choice) = challenge.choice.parse::<Choice>() else {
        warn!(%key, choice = %challenge.choice, "stored challenge has an unknown object");
        return Ok(());
    };

    let content = result_text(
        Player {
            id: challenge.challenger_id,
            choice: challenger_choice,
        },
        Player {
            id: opponent_id.get(),
            choice: opponent_choice,
        },
    );
    responder.reply(Reply::text(content)).await?;

    if let Some(message) = interaction.message.as_ref() {
        let acknowledgement = Reply::text(format!("Nice choice {}", random_emoji()));
        if let Err(source) = responder.edit_message(message.id, acknowledgement).await {
            warn!(?source, %key, "failed to update selection message");
        }
    }

    Ok(())
}

fn accept_components(key: &str) -> Vec<Component> {
    let accept_button = Button {
        id: None,
        custom_id: Some(build_custom_id(ComponentAction::Accept, key)),
        disabled: false,
        emoji: None,
        label: Some("Accept".to_owned()),
        style: ButtonStyle::Primary,
        url: None,
        sku_id: None,
    };

    vec![Component::ActionRow(ActionRow {
        id: None,
        components: vec![Component::Button(accept_button)],
    })]
}

fn choice_components(key: &str) -> Vec<Component> {
    let options = shuffled_choices()
        .into_iter()
        .map(|choice| SelectMenuOption {
            default: false,
            description: Some(choice.description().to_owned()),
            emoji: None,
            label: choice.label().to_owned(),
            value: choice.name().to_owned(),
        })
        .collect();

    let menu = SelectMenu {
        channel_types: None,
        custom_id: build_custom_id(ComponentAction::SelectChoice, key),
        default_values: None,
        disabled: false,
        id: None,
        kind: SelectMenuType::Text,
        max_values: None,
        min_values: None,
        options: Some(options),
        placeholder: Some("Choose your object".to_owned()),
        required: None,
    };

    vec![Component::ActionRow(ActionRow {
        id: None,
        components: vec![Component::SelectMenu(menu)],
    })]
}
