use dioxus::prelude::*;

use crate::app::Route;

/// Unknown paths go back to the home page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        tracing::debug!(path = %segments.join("/"), "Unknown route, redirecting home");
        navigator.replace(Route::Home {});
    });

    rsx! {}
}
