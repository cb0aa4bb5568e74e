//! About pages: inline morph grid with category filter, and the classic
//! popup variant.

use dioxus::prelude::*;
use portfolio_core::content::{ABOUT, ABOUT_CLASSIC};

use crate::app::Route;
use crate::components::cards::DisclosureGrid;
use crate::components::{NavHeader, NavLocation};

#[component]
pub fn About() -> Element {
    rsx! {
        NavHeader { current: NavLocation::About }
        main { class: "page",
            DisclosureGrid { page: &ABOUT }
            Link { class: "page-alt-link", to: Route::AboutClassic {}, "Classic view" }
        }
    }
}

#[component]
pub fn AboutClassic() -> Element {
    rsx! {
        NavHeader { current: NavLocation::About }
        main { class: "page",
            DisclosureGrid { page: &ABOUT_CLASSIC }
            Link { class: "page-alt-link", to: Route::About {}, "Interactive view" }
        }
    }
}
