//! Morph Card
//!
//! A grid card that grows in place to show its details. The card only
//! reports activation; the owning grid decides what is expanded.

use dioxus::prelude::*;
use portfolio_core::content::CardEntry;

use super::CardDetail;

#[derive(Props, Clone, PartialEq)]
pub struct MorphCardProps {
    pub entry: &'static CardEntry,
    /// Whether this card is the grid's expanded card
    pub expanded: bool,
    /// Called with the card id on click or Enter/Space
    pub on_activate: EventHandler<String>,
}

#[component]
pub fn MorphCard(props: MorphCardProps) -> Element {
    let entry = props.entry;
    let class = if props.expanded {
        "morph-card expanded"
    } else {
        "morph-card"
    };
    let on_activate = props.on_activate;

    rsx! {
        article {
            class: "{class}",
            style: "--accent: {entry.accent_color};",
            role: "button",
            tabindex: "0",
            "aria-expanded": if props.expanded { "true" } else { "false" },
            onclick: move |_| on_activate.call(entry.id.to_string()),
            onkeydown: move |evt: KeyboardEvent| {
                if matches!(evt.key(), Key::Enter) || evt.key() == Key::Character(" ".into()) {
                    evt.prevent_default();
                    on_activate.call(entry.id.to_string());
                }
            },

            header { class: "morph-card-header",
                span { class: "card-icon", "{entry.icon}" }
                h3 { class: "card-title", "{entry.title}" }
                span { class: "card-toggle", if props.expanded { "\u{2212}" } else { "+" } }
            }

            p { class: "card-summary", "{entry.summary}" }

            if props.expanded {
                CardDetail { entry }
            }
        }
    }
}
