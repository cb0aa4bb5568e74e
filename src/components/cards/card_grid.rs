//! Inline morph grid.
//!
//! Owns the page's `GridState`. Escape anywhere on the page collapses the
//! expanded card; the listener lives exactly as long as the grid.

use dioxus::prelude::*;
use portfolio_core::content::{CardEntry, CardGridPage};
use portfolio_core::disclosure::{GridState, TransitionLatch, MORPH_TRANSITION};
use portfolio_ui::FilterPills;

use super::{use_escape_key, MorphCard};

#[derive(Props, Clone, PartialEq)]
pub struct CardGridProps {
    pub page: &'static CardGridPage,
    /// Drop activations while a morph transition is still running
    #[props(default = false)]
    pub latch_transitions: bool,
}

#[component]
pub fn CardGrid(props: CardGridProps) -> Element {
    let page = props.page;
    let latch_transitions = props.latch_transitions;
    let mut grid = use_signal(GridState::new);
    let mut latch = use_signal(TransitionLatch::new);

    let on_activate = move |id: String| {
        if latch_transitions {
            if !latch.write().try_arm() {
                tracing::debug!(card = %id, "activation dropped during transition");
                return;
            }
            spawn(async move {
                tokio::time::sleep(MORPH_TRANSITION).await;
                latch.write().release();
            });
        }
        grid.write().activate(&id);
    };

    use_escape_key(move || {
        if grid.write().escape() {
            tracing::debug!("collapsed on escape");
        }
    });

    let visible: Vec<&'static CardEntry> = grid.read().visible(page.entries);
    let expanded = grid.read().expanded_id().map(str::to_string);
    let filter = grid.read().active_filter().to_string();

    rsx! {
        section { class: "card-page",
            header { class: "page-header",
                h1 { class: "page-title", "{page.title}" }
                p { class: "page-subtitle", "{page.subtitle}" }
            }

            if page.has_filter() {
                FilterPills {
                    categories: page.categories,
                    selected: filter,
                    on_select: move |category: String| grid.write().set_filter(&category),
                }
            }

            if visible.is_empty() {
                p { class: "empty-state", "Nothing in this category yet." }
            } else {
                div { class: "card-grid",
                    for entry in visible {
                        MorphCard {
                            key: "{entry.id}",
                            entry,
                            expanded: expanded.as_deref() == Some(entry.id),
                            on_activate,
                        }
                    }
                }
            }

            p { class: "page-hint", "Select a card to expand it. Press Esc to collapse." }
        }
    }
}
