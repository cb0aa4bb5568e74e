//! Popup grid.
//!
//! Cards stay compact; activating one opens a full-viewport overlay. Opening
//! another card replaces the overlay. Backdrop clicks and the close button
//! dismiss it, clicks inside the panel do not.

use dioxus::prelude::*;
use portfolio_core::content::CardGridPage;
use portfolio_core::disclosure::PopupState;
use portfolio_ui::CloseButton;

use super::CardDetail;

#[component]
pub fn PopupGrid(page: &'static CardGridPage) -> Element {
    let mut popup = use_signal(PopupState::new);
    let open_entry = popup.read().current().and_then(|id| page.entry(id));

    rsx! {
        section { class: "card-page",
            header { class: "page-header",
                h1 { class: "page-title", "{page.title}" }
                p { class: "page-subtitle", "{page.subtitle}" }
            }

            div { class: "card-grid",
                for entry in page.entries.iter() {
                    article {
                        key: "{entry.id}",
                        class: "popup-card",
                        style: "--accent: {entry.accent_color};",
                        role: "button",
                        tabindex: "0",
                        onclick: move |_| popup.write().open(entry.id),
                        span { class: "card-icon", "{entry.icon}" }
                        h3 { class: "card-title", "{entry.title}" }
                        p { class: "card-summary", "{entry.summary}" }
                    }
                }
            }
        }

        if let Some(entry) = open_entry {
            div {
                class: "modal-overlay",
                onclick: move |_| popup.write().close(),

                div {
                    class: "popup-panel",
                    style: "--accent: {entry.accent_color};",
                    role: "dialog",
                    "aria-modal": "true",
                    onclick: move |evt| evt.stop_propagation(),

                    header { class: "popup-header",
                        span { class: "card-icon", "{entry.icon}" }
                        h2 { class: "card-title", "{entry.title}" }
                        CloseButton { onclick: move |_| popup.write().close() }
                    }
                    p { class: "card-summary", "{entry.summary}" }
                    CardDetail { entry }
                }
            }
        }
    }
}
