//! Admin login page.

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::console::login_error_text;
use portfolio_core::{Credentials, LoginController, PortfolioError};
use portfolio_ui::{Button, Input};

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};
use crate::context::{use_api, use_session};

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let session = use_session();
    let navigator = use_navigator();
    let controller = use_hook(|| Rc::new(LoginController::new(api, session)));

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let credentials = Credentials::new(username(), password());
        if !credentials.is_complete() {
            error.set(Some("Please enter both username and password".to_string()));
            return;
        }

        error.set(None);
        submitting.set(true);
        let controller = controller.clone();
        spawn(async move {
            let result = controller.submit(&credentials).await;
            submitting.set(false);
            match result {
                Ok(()) => {
                    navigator.push(Route::Admin {});
                }
                // Already submitting; the pending request reports its own result
                Err(PortfolioError::Busy(_)) => {}
                Err(e) => error.set(Some(login_error_text(&e))),
            }
        });
    };

    rsx! {
        NavHeader { current: NavLocation::Admin }

        main { class: "page login",
            form { class: "login-form", onsubmit: on_submit,
                h1 { class: "page-title", "Admin Login" }

                Input {
                    value: username(),
                    oninput: move |s| username.set(s),
                    label: "Username".to_string(),
                    autocomplete: "username".to_string(),
                    required: true,
                    disabled: submitting(),
                }
                Input {
                    value: password(),
                    oninput: move |s| password.set(s),
                    label: "Password".to_string(),
                    input_type: "password".to_string(),
                    autocomplete: "current-password".to_string(),
                    required: true,
                    disabled: submitting(),
                }

                if let Some(err) = error() {
                    p { class: "error-text", role: "alert", "{err}" }
                }

                Button {
                    button_type: "submit".to_string(),
                    disabled: submitting(),
                    class: "wide".to_string(),
                    if submitting() { "Signing in..." } else { "Sign In" }
                }
            }
        }
    }
}
