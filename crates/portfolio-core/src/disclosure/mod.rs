//! Card disclosure state.
//!
//! Two variants drive the card pages:
//!
//! - [`GridState`]: inline morph. At most one card is expanded; activating
//!   the expanded card collapses it, Escape collapses whatever is open.
//! - [`PopupState`]: full-viewport overlay. At most one popup; opening
//!   another entry replaces the current one.
//!
//! Both are plain synchronous values owned by the page component. Filtering
//! is a pure function over the static entry list.

mod grid;
mod latch;
mod popup;

pub use grid::GridState;
pub use latch::{TransitionLatch, MORPH_TRANSITION};
pub use popup::PopupState;

/// Filter value that matches every entry.
pub const FILTER_ALL: &str = "all";

/// Anything that can sit on a disclosure grid.
pub trait Categorized {
    fn id(&self) -> &str;
    fn category(&self) -> &str;
}

/// Whether an entry of `category` is shown under `filter`.
pub fn matches_filter(category: &str, filter: &str) -> bool {
    filter == FILTER_ALL || category == filter
}

/// Entries shown under `filter`, in source order.
pub fn visible<'a, T: Categorized>(entries: &'a [T], filter: &str) -> Vec<&'a T> {
    entries
        .iter()
        .filter(|entry| matches_filter(entry.category(), filter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    #[test]
    fn all_returns_every_entry_in_order() {
        let ids: Vec<_> = visible(PROJECTS.entries, FILTER_ALL)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["agrosense", "emergigo", "streamflix", "grievance"]);
    }

    #[test]
    fn category_filter_keeps_only_matching_entries() {
        let iot = visible(PROJECTS.entries, "iot");
        assert_eq!(iot.len(), 1);
        assert_eq!(iot[0].id, "agrosense");
    }

    #[test]
    fn unknown_category_yields_nothing() {
        assert!(visible(PROJECTS.entries, "quantum").is_empty());
    }
}
