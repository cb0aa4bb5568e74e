//! Expanded card content, shared by inline cards and popups.

use dioxus::prelude::*;
use portfolio_core::content::{CardBody, CardEntry};
use portfolio_ui::TagList;

fn render_body(body: CardBody) -> Element {
    match body {
        CardBody::Text(text) => rsx! {
            p { class: "card-body-text", "{text}" }
        },
        CardBody::List(items) => rsx! {
            ul { class: "card-body-list",
                for item in items.iter() {
                    li { key: "{item}", "{item}" }
                }
            }
        },
    }
}

#[component]
pub fn CardDetail(entry: &'static CardEntry) -> Element {
    rsx! {
        div { class: "card-detail",
            if let Some(subtitle) = entry.subtitle {
                p { class: "card-subtitle", "{subtitle}" }
            }

            {render_body(entry.body)}

            if !entry.tags.is_empty() {
                TagList { tags: entry.tags, accent: entry.accent_color.to_string() }
            }

            if !entry.links.is_empty() {
                div { class: "card-links",
                    for link in entry.links.iter() {
                        a {
                            key: "{link.label}",
                            class: "card-link",
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            // Following a link must not toggle the card
                            onclick: move |evt| evt.stop_propagation(),
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
