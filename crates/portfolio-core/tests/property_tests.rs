//! Property-based tests for card disclosure state
//!
//! Uses proptest to verify the expand/collapse, popup and filter invariants
//! over arbitrary interaction sequences.

use portfolio_core::disclosure::{self, Categorized};
use portfolio_core::{GridState, PopupState, FILTER_ALL};
use proptest::prelude::*;

// ============================================================================
// Test Entries
// ============================================================================

#[derive(Debug, Clone)]
struct Card {
    id: String,
    category: String,
}

impl Categorized for Card {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> &str {
        &self.category
    }
}

const CATEGORIES: &[&str] = &["iot", "web", "mobile", "fullstack"];

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate card ids from a small alphabet so collisions with activations happen
fn card_id_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,2}").expect("valid regex")
}

fn category_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(CATEGORIES).prop_map(str::to_string)
}

/// Generate a grid with unique ids, in arbitrary category order
fn cards_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec((card_id_strategy(), category_strategy()), 0..12).prop_map(|pairs| {
        let mut seen = std::collections::HashSet::new();
        pairs
            .into_iter()
            .filter(|(id, _)| seen.insert(id.clone()))
            .map(|(id, category)| Card { id, category })
            .collect()
    })
}

/// Interactions a visitor can perform on an inline grid
#[derive(Debug, Clone)]
enum GridOp {
    Activate(String),
    Escape,
    Filter(String),
}

fn grid_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<GridOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => card_id_strategy().prop_map(GridOp::Activate),
            1 => Just(GridOp::Escape),
            2 => prop_oneof![Just(FILTER_ALL.to_string()), category_strategy()]
                .prop_map(GridOp::Filter),
        ],
        0..max_ops,
    )
}

#[derive(Debug, Clone)]
enum PopupOp {
    Open(String),
    Close,
}

fn popup_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<PopupOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => card_id_strategy().prop_map(PopupOp::Open),
            1 => Just(PopupOp::Close),
        ],
        0..max_ops,
    )
}

fn apply_grid(grid: &mut GridState, op: &GridOp) {
    match op {
        GridOp::Activate(id) => grid.activate(id),
        GridOp::Escape => {
            grid.escape();
        }
        GridOp::Filter(category) => grid.set_filter(category),
    }
}

// ============================================================================
// Inline Grid Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Activating the same card twice from any state restores that state
    #[test]
    fn double_activate_is_identity(
        ops in grid_ops_strategy(20),
        id in card_id_strategy(),
    ) {
        let mut grid = GridState::new();
        for op in &ops {
            apply_grid(&mut grid, op);
        }
        let before = grid.clone();

        grid.activate(&id);
        grid.activate(&id);

        prop_assert_eq!(grid, before);
    }

    /// The expanded card is always the most recently activated one, or none
    #[test]
    fn expanded_tracks_last_activation(ops in grid_ops_strategy(30)) {
        let mut grid = GridState::new();
        let mut expected: Option<String> = None;

        for op in &ops {
            apply_grid(&mut grid, op);
            match op {
                GridOp::Activate(id) if expected.as_deref() == Some(id.as_str()) => {
                    expected = None;
                }
                GridOp::Activate(id) => expected = Some(id.clone()),
                GridOp::Escape => expected = None,
                GridOp::Filter(_) => {}
            }
            prop_assert_eq!(grid.expanded_id(), expected.as_deref());
        }
    }

    /// Changing the filter never changes which card is expanded
    #[test]
    fn filter_change_preserves_expansion(
        ops in grid_ops_strategy(20),
        filter in category_strategy(),
    ) {
        let mut grid = GridState::new();
        for op in &ops {
            apply_grid(&mut grid, op);
        }
        let expanded = grid.expanded_id().map(str::to_string);

        grid.set_filter(&filter);

        prop_assert_eq!(grid.expanded_id(), expanded.as_deref());
        prop_assert_eq!(grid.active_filter(), filter.as_str());
    }
}

// ============================================================================
// Filter Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A category filter yields exactly that category's entries, in source order
    #[test]
    fn filter_is_ordered_subset(cards in cards_strategy(), filter in category_strategy()) {
        let shown: Vec<&str> = disclosure::visible(&cards, &filter)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        let expected: Vec<&str> = cards
            .iter()
            .filter(|c| c.category == filter)
            .map(|c| c.id.as_str())
            .collect();

        prop_assert_eq!(shown, expected);
    }

    /// The "all" filter shows every entry unchanged
    #[test]
    fn all_filter_is_identity(cards in cards_strategy()) {
        let shown: Vec<&str> = disclosure::visible(&cards, FILTER_ALL)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        let all: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();

        prop_assert_eq!(shown, all);
    }

    /// Per-category subsets partition the grid
    #[test]
    fn categories_partition_entries(cards in cards_strategy()) {
        let total: usize = CATEGORIES
            .iter()
            .map(|category| disclosure::visible(&cards, category).len())
            .sum();

        prop_assert_eq!(total, cards.len());
    }
}

// ============================================================================
// Popup Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// At most one popup is open, and it is the last one opened
    #[test]
    fn popup_never_stacks(ops in popup_ops_strategy(30)) {
        let mut popup = PopupState::new();
        let mut last_open: Option<String> = None;

        for op in &ops {
            match op {
                PopupOp::Open(id) => {
                    popup.open(id);
                    last_open = Some(id.clone());
                }
                PopupOp::Close => {
                    popup.close();
                    last_open = None;
                }
            }
            prop_assert_eq!(popup.current(), last_open.as_deref());
        }
    }

    /// Opening B while A is open leaves only B
    #[test]
    fn opening_replaces_current(a in card_id_strategy(), b in card_id_strategy()) {
        let mut popup = PopupState::new();
        popup.open(&a);
        popup.open(&b);

        prop_assert_eq!(popup.current(), Some(b.as_str()));
        prop_assert!(a == b || !popup.is_open(&a));
    }
}
