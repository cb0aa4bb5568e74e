use dioxus::prelude::*;
use portfolio_core::content::PROJECTS;

use crate::components::cards::DisclosureGrid;
use crate::components::{NavHeader, NavLocation};

/// Projects page. Clicks during a card's morph animation are ignored.
#[component]
pub fn Projects() -> Element {
    rsx! {
        NavHeader { current: NavLocation::Projects }
        main { class: "page",
            DisclosureGrid { page: &PROJECTS, latch_transitions: true }
        }
    }
}
