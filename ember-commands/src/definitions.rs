//! Slash command definitions installed by the `register-commands` binary.

use twilight_model::{
    application::{
        command::{Command, CommandOption, CommandType},
        interaction::InteractionContextType,
    },
    oauth::ApplicationIntegrationType,
};
use twilight_util::builder::command::{CommandBuilder, StringBuilder};

use crate::game::{challenge, rps::Choice};
use crate::utility::ask;
use crate::{COMMANDS, CommandMeta};

const INTEGRATION_TYPES: [ApplicationIntegrationType; 2] = [
    ApplicationIntegrationType::GuildInstall,
    ApplicationIntegrationType::UserInstall,
];

const CONTEXTS: [InteractionContextType; 3] = [
    InteractionContextType::Guild,
    InteractionContextType::BotDm,
    InteractionContextType::PrivateChannel,
];

fn options_for(meta: &CommandMeta) -> Vec<CommandOption> {
    match meta.name {
        "ask" => vec![
            StringBuilder::new(
                ask::MESSAGE_OPTION,
                "Your request (must include a number between 1-50)",
            )
            .required(true)
            .build(),
        ],
        "challenge" => vec![
            StringBuilder::new(challenge::OBJECT_OPTION, "Pick your object")
                .required(true)
                .choices(Choice::ALL.map(|choice| (choice.label(), choice.name())))
                .build(),
        ],
        _ => Vec::new(),
    }
}

fn chat_input(meta: &CommandMeta) -> anyhow::Result<Command> {
    let builder = CommandBuilder::new(meta.name, meta.desc, CommandType::ChatInput)
        .integration_types(INTEGRATION_TYPES)
        .contexts(CONTEXTS);

    let command = options_for(meta)
        .into_iter()
        .fold(builder, |builder, option| builder.option(option))
        .validate()?
        .build();

    Ok(command)
}

/// Every command in [`COMMANDS`], ready for a bulk overwrite.
pub fn command_definitions() -> anyhow::Result<Vec<Command>> {
    COMMANDS.iter().map(chat_input).collect()
}
