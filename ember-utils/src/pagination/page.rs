//! Pure pagination math. Pages are zero-based.

use ember_store::Session;

/// Navigation request carried by a pagination button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Compute the number of pages for a paginated list.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Clamp a requested page into `0..total_pages`, treating an empty list as one page.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages.max(1) - 1)
}

/// Return start/end indices for a page window.
pub fn page_window(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = page.saturating_mul(safe_per_page).min(total_items);
    let end = start.saturating_add(safe_per_page).min(total_items);
    (start, end)
}

/// Move the session cursor one page, stopping at either end.
///
/// Returns whether the cursor moved.
pub fn advance(session: &mut Session, direction: Direction) -> bool {
    let last_page = total_pages(session.items.len(), session.page_size).max(1) - 1;
    let current = session.current_page.min(last_page);

    let target = match direction {
        Direction::Previous => current.saturating_sub(1),
        Direction::Next => (current + 1).min(last_page),
    };

    let moved = target != session.current_page;
    session.current_page = target;
    moved
}

#[cfg(test)]
mod tests {
    use ember_store::Person;

    use super::*;

    fn session(items: usize, page_size: usize) -> Session {
        let items = (0..items)
            .map(|index| Person {
                uuid: index.to_string(),
                first_name: "F".to_owned(),
                last_name: "L".to_owned(),
                birthday: "2000-01-01".to_owned(),
            })
            .collect();
        Session::new(items, page_size)
    }

    #[test]
    fn total_pages_is_ceiling() {
        for count in 0..40 {
            for per_page in 1..7 {
                let expected = (count + per_page - 1) / per_page;
                assert_eq!(total_pages(count, per_page), expected);
            }
        }
    }

    #[test]
    fn windows_cover_ten_items_in_threes() {
        let sizes: Vec<usize> = (0..4)
            .map(|page| {
                let (start, end) = page_window(10, 3, page);
                end - start
            })
            .collect();
        assert_eq!(sizes, vec![3, 3, 3, 1]);
        assert_eq!(page_window(10, 3, 9), (10, 10));
    }

    #[test]
    fn next_stops_on_last_page() {
        let mut session = session(10, 3);
        for _ in 0..3 {
            assert!(advance(&mut session, Direction::Next));
        }
        assert_eq!(session.current_page, 3);
        assert!(!advance(&mut session, Direction::Next));
        assert_eq!(session.current_page, 3);
    }

    #[test]
    fn previous_stops_on_first_page() {
        let mut session = session(10, 3);
        assert!(!advance(&mut session, Direction::Previous));
        assert_eq!(session.current_page, 0);
    }

    #[test]
    fn single_page_never_moves() {
        let mut short = session(2, 3);
        assert!(!advance(&mut short, Direction::Next));
        assert!(!advance(&mut short, Direction::Previous));

        let mut empty = session(0, 3);
        assert!(!advance(&mut empty, Direction::Next));
        assert_eq!(empty.current_page, 0);
    }

    #[test]
    fn clamp_keeps_page_in_range() {
        assert_eq!(clamp_page(7, 4), 3);
        assert_eq!(clamp_page(2, 4), 2);
        assert_eq!(clamp_page(5, 0), 0);
    }
}
