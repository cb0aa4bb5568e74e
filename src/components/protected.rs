//! Route guard wrapper for admin pages.

use dioxus::prelude::*;
use portfolio_core::guard::{AuthState, GuardDecision, RouteGuard};

use crate::app::Route;
use crate::context::use_session;

/// Renders `children` only with a stored session token.
///
/// The session is read once after mount. Until then a verifying indicator
/// shows; without a token the visitor is sent to the login page and the
/// children never render.
#[component]
pub fn Protected(children: Element) -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let mut guard = use_signal(RouteGuard::new);

    use_effect(move || {
        let state = guard.with_mut(|g| g.check(session.as_ref()));
        if state == AuthState::Unauthenticated {
            navigator.replace(Route::Login {});
        }
    });

    let decision = guard.read().decision();
    match decision {
        GuardDecision::Wait => rsx! {
            div { class: "verifying",
                div { class: "spinner" }
                p { "Verifying session..." }
            }
        },
        GuardDecision::Redirect(_) => rsx! {},
        GuardDecision::Render => rsx! { {children} },
    }
}
