//! Home page - navigation hub.

use dioxus::prelude::*;
use portfolio_core::content::{OWNER_HEADLINE, OWNER_NAME};

use crate::components::{NavHeader, NavLocation};

#[component]
pub fn Home() -> Element {
    rsx! {
        NavHeader { current: NavLocation::Home }

        main { class: "page home",
            header { class: "hero",
                h1 { class: "hero-name", "{OWNER_NAME}" }
                p { class: "hero-headline", "{OWNER_HEADLINE}" }
            }

            nav { class: "hub-grid",
                for location in NavLocation::SECTIONS.into_iter().skip(1) {
                    {
                        let name = location.display_name();
                        let blurb = location.blurb();
                        rsx! {
                            Link { key: "{name}", class: "hub-tile", to: location.route(),
                                h2 { class: "hub-title", "{name}" }
                                p { class: "hub-blurb", "{blurb}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
