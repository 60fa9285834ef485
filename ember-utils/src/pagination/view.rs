//! Text rendering of a session's current page.

use std::fmt::Write as _;

use ember_store::Session;

use super::page::{clamp_page, page_window, total_pages};

/// Heading shown above every rendered page.
pub const PAGE_TITLE: &str = "Random People Data";

const ITEM_DIVIDER: &str = "─────────────────────────────";

/// A rendered page plus the state of its navigation controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    pub text: String,
    /// Zero-based page that was rendered.
    pub page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Render the session's current page. Pure: the session is left untouched.
pub fn render(session: &Session) -> PageView {
    let total = total_pages(session.items.len(), session.page_size).max(1);
    let page = clamp_page(session.current_page, total);
    let (start, end) = page_window(session.items.len(), session.page_size, page);

    let mut text = format!(
        "## 📋 **{PAGE_TITLE} - Page {} of {total}**\n\n",
        page + 1
    );

    for (offset, person) in session.items[start..end].iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = write!(
            text,
            "### **{}.** {} {}\n> 📅 **Birthday:** {}\n> 🆔 **UUID:** `{}`\n> {ITEM_DIVIDER}\n\n",
            start + offset + 1,
            person.first_name,
            person.last_name,
            person.birthday,
            person.uuid,
        );
    }

    PageView {
        text,
        page,
        total_pages: total,
        has_prev: page > 0,
        has_next: page + 1 < total,
    }
}
