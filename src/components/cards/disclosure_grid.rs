//! Picks the grid component from the page's disclosure style.

use dioxus::prelude::*;
use portfolio_core::content::{CardGridPage, DisclosureStyle};

use super::{CardGrid, PopupGrid};

#[derive(Props, Clone, PartialEq)]
pub struct DisclosureGridProps {
    pub page: &'static CardGridPage,
    /// Inline pages only: drop activations during a morph transition
    #[props(default = false)]
    pub latch_transitions: bool,
}

#[component]
pub fn DisclosureGrid(props: DisclosureGridProps) -> Element {
    match props.page.style {
        DisclosureStyle::Inline => rsx! {
            CardGrid { page: props.page, latch_transitions: props.latch_transitions }
        },
        DisclosureStyle::Popup => rsx! {
            PopupGrid { page: props.page }
        },
    }
}
