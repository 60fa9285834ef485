//! Component custom-id encoding: `<action-prefix>_<key>`.

use super::page::Direction;

/// Action encoded in the prefix of a component custom id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentAction {
    /// Opponent accepts a rock-paper-scissors challenge.
    Accept,
    /// Opponent picks an object from the selection menu.
    SelectChoice,
    PreviousPage,
    NextPage,
}

impl ComponentAction {
    const ALL: [ComponentAction; 4] = [
        ComponentAction::Accept,
        ComponentAction::SelectChoice,
        ComponentAction::PreviousPage,
        ComponentAction::NextPage,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            ComponentAction::Accept => "accept_button",
            ComponentAction::SelectChoice => "select_choice",
            ComponentAction::PreviousPage => "prev_page",
            ComponentAction::NextPage => "next_page",
        }
    }

    /// Navigation direction for page buttons.
    pub fn direction(self) -> Option<Direction> {
        match self {
            ComponentAction::PreviousPage => Some(Direction::Previous),
            ComponentAction::NextPage => Some(Direction::Next),
            _ => None,
        }
    }
}

/// Parsed component custom id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentToken {
    pub action: ComponentAction,
    /// Session or challenge key the component belongs to.
    pub key: String,
}

pub fn build_custom_id(action: ComponentAction, key: &str) -> String {
    format!("{}_{key}", action.prefix())
}

/// Parse a component custom id. Unknown prefixes and empty keys yield `None`.
pub fn parse_custom_id(custom_id: &str) -> Option<ComponentToken> {
    ComponentAction::ALL.into_iter().find_map(|action| {
        let key = custom_id.strip_prefix(action.prefix())?.strip_prefix('_')?;
        (!key.is_empty()).then(|| ComponentToken {
            action,
            key: key.to_owned(),
        })
    })
}
