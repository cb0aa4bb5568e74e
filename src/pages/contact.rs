//! Contact page - channels and social links.

use dioxus::prelude::*;
use portfolio_core::content::{CONTACT_CHANNELS, SOCIAL_LINKS};

use crate::components::{NavHeader, NavLocation};

#[component]
pub fn Contact() -> Element {
    rsx! {
        NavHeader { current: NavLocation::Contact }

        main { class: "page contact",
            header { class: "page-header",
                h1 { class: "page-title", "Contact" }
                p { class: "page-subtitle", "Open to internships, collaborations and interesting problems." }
            }

            section { class: "channel-list",
                for channel in CONTACT_CHANNELS.iter() {
                    div { key: "{channel.label}", class: "channel",
                        span { class: "channel-icon", "{channel.icon}" }
                        span { class: "channel-label", "{channel.label}" }
                        if let Some(href) = channel.href {
                            a { class: "channel-value", href: "{href}", "{channel.value}" }
                        } else {
                            span { class: "channel-value", "{channel.value}" }
                        }
                    }
                }
            }

            section { class: "social-links",
                h2 { class: "section-header", "Elsewhere" }
                for link in SOCIAL_LINKS.iter() {
                    a {
                        key: "{link.label}",
                        class: "social-link",
                        href: "{link.href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        span { class: "social-icon", "{link.icon}" }
                        "{link.label}"
                    }
                }
            }
        }
    }
}
