//! Stable facade for pagination helpers used by command handlers.

mod components;
mod page;
pub mod token;
mod view;

pub use components::build_nav_components;
pub use page::{Direction, advance, clamp_page, page_window, total_pages};
pub use token::{ComponentAction, ComponentToken, build_custom_id, parse_custom_id};
pub use view::{PAGE_TITLE, PageView, render};
