//! Admin dashboard - contact messages.
//!
//! The page owns one `Dashboard` controller and mirrors its snapshot into a
//! signal after every state change. Mutations claim the message id before
//! spawning so the card shows as busy right away.

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::Dashboard;
use portfolio_ui::{Button, ButtonVariant, StatusBanner};

use crate::app::Route;
use crate::components::{MessageCard, NavHeader, NavLocation, Protected};
use crate::context::{use_api, use_config, use_session};

#[component]
pub fn Admin() -> Element {
    rsx! {
        NavHeader { current: NavLocation::Admin }
        Protected {
            AdminDashboard {}
        }
    }
}

#[component]
fn AdminDashboard() -> Element {
    let api = use_api();
    let session = use_session();
    let config = use_config();
    let navigator = use_navigator();
    let dashboard = use_hook(|| Rc::new(Dashboard::new(api, session)));
    let mut view = use_signal(|| dashboard.snapshot());

    // Initial load
    let loader = dashboard.clone();
    use_effect(move || {
        let dashboard = loader.clone();
        spawn(async move {
            let _ = dashboard.fetch_messages().await;
            view.set(dashboard.snapshot());
        });
    });

    let marker = dashboard.clone();
    let on_mark_read = use_callback(move |id: String| {
        let Some(guard) = marker.busy().try_begin(&id) else {
            return;
        };
        view.set(marker.snapshot());
        let dashboard = marker.clone();
        spawn(async move {
            let _ = dashboard.mark_read_with(guard).await;
            view.set(dashboard.snapshot());
        });
    });

    let remover = dashboard.clone();
    let on_delete = use_callback(move |id: String| {
        let Some(guard) = remover.busy().try_begin(&id) else {
            return;
        };
        view.set(remover.snapshot());
        let dashboard = remover.clone();
        spawn(async move {
            let _ = dashboard.remove_with(guard).await;
            view.set(dashboard.snapshot());
        });
    });

    let refresher = dashboard.clone();
    let on_refresh = move |_| {
        let dashboard = refresher.clone();
        spawn(async move {
            view.set(dashboard.snapshot());
            let _ = dashboard.fetch_messages().await;
            view.set(dashboard.snapshot());
        });
    };

    let on_logout = move |_| {
        if let Err(e) = dashboard.logout() {
            tracing::error!("Failed to clear session: {}", e);
        }
        navigator.push(Route::Login {});
    };

    let snapshot = view();
    let unread = snapshot.unread_count();
    let total = snapshot.messages.len();

    rsx! {
        main { class: "page admin",
            header { class: "admin-header",
                div {
                    h1 { class: "page-title", "Messages" }
                    p { class: "page-subtitle", "{unread} unread of {total}" }
                }
                div { class: "admin-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        disabled: snapshot.loading,
                        onclick: on_refresh,
                        "Refresh"
                    }
                    Button { variant: ButtonVariant::Ghost, onclick: on_logout, "Logout" }
                }
            }

            StatusBanner { banner: snapshot.banner.clone() }

            if snapshot.loading && snapshot.messages.is_empty() {
                div { class: "verifying",
                    div { class: "spinner" }
                    p { "Loading messages..." }
                }
            } else if snapshot.messages.is_empty() {
                p { class: "empty-state", "No messages yet." }
            } else {
                div { class: "message-list",
                    for message in snapshot.messages.iter() {
                        MessageCard {
                            key: "{message.id}",
                            message: message.clone(),
                            busy: snapshot.is_busy(&message.id),
                            on_mark_read,
                            on_delete,
                        }
                    }
                }
            }

            footer { class: "admin-footer", "Backend: {config.api_base_url}" }
        }
    }
}
