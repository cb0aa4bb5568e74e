use dioxus::prelude::*;
use portfolio_core::content::EXPERIENCE;

use crate::components::cards::DisclosureGrid;
use crate::components::{NavHeader, NavLocation};

#[component]
pub fn Experience() -> Element {
    rsx! {
        NavHeader { current: NavLocation::Experience }
        main { class: "page",
            DisclosureGrid { page: &EXPERIENCE }
        }
    }
}
