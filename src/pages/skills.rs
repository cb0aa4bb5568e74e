use dioxus::prelude::*;
use portfolio_core::content::SKILLS;

use crate::components::cards::DisclosureGrid;
use crate::components::{NavHeader, NavLocation};

#[component]
pub fn Skills() -> Element {
    rsx! {
        NavHeader { current: NavLocation::Skills }
        main { class: "page",
            DisclosureGrid { page: &SKILLS }
        }
    }
}
