//! Pagination UI component builders (previous/next buttons).

use twilight_model::channel::message::component::{ActionRow, Button, ButtonStyle, Component};

use super::token::{ComponentAction, build_custom_id};
use super::view::PageView;

/// Build previous/next button components for a rendered page of session `key`.
///
/// Single-page views get no controls.
pub fn build_nav_components(key: &str, view: &PageView) -> Vec<Component> {
    if view.total_pages <= 1 {
        return vec![];
    }

    let prev_button = Button {
        id: None,
        custom_id: Some(build_custom_id(ComponentAction::PreviousPage, key)),
        disabled: !view.has_prev,
        emoji: None,
        label: Some("◀ Previous".to_owned()),
        style: ButtonStyle::Secondary,
        url: None,
        sku_id: None,
    };

    let next_button = Button {
        id: None,
        custom_id: Some(build_custom_id(ComponentAction::NextPage, key)),
        disabled: !view.has_next,
        emoji: None,
        label: Some("Next ▶".to_owned()),
        style: ButtonStyle::Secondary,
        url: None,
        sku_id: None,
    };

    vec![Component::ActionRow(ActionRow {
        id: None,
        components: vec![Component::Button(prev_button), Component::Button(next_button)],
    })]
}
