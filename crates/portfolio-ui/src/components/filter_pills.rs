//! Filter Pills Component
//!
//! Horizontal row of category filter pills above a card grid. The selected
//! pill is filled with the category's accent color.

use dioxus::prelude::*;
use portfolio_core::content::CategoryChoice;

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    /// Choices in display order; the first is normally "all"
    pub categories: &'static [CategoryChoice],
    /// Currently active filter id
    pub selected: String,
    /// Called with the chosen category id
    pub on_select: EventHandler<String>,
}

/// Displays a horizontal row of selectable filter pills
///
/// # Example
///
/// ```rust,ignore
/// let mut grid = use_signal(GridState::new);
///
/// rsx! {
///     FilterPills {
///         categories: PROJECTS.categories,
///         selected: grid.read().active_filter().to_string(),
///         on_select: move |cat: String| grid.write().set_filter(&cat)
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    rsx! {
        div {
            class: "filter-pills",
            role: "radiogroup",
            "aria-label": "Filter by category",
            for choice in props.categories.iter() {
                {
                    let is_selected = props.selected == choice.id;
                    let style = pill_style(choice.color, is_selected);
                    let id = choice.id.to_string();
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{choice.id}",
                            class: if is_selected { "pill selected" } else { "pill" },
                            style: "{style}",
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| {
                                tracing::debug!(filter = %id, "filter selected");
                                on_select.call(id.clone());
                            },
                            "{choice.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Inline style for a pill: accent border always, accent fill when selected.
pub fn pill_style(color: &str, selected: bool) -> String {
    if selected {
        format!("border-color: {color}; background: {color}; color: #0b0f19;")
    } else {
        format!("border-color: {color}; color: {color};")
    }
}
