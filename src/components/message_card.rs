//! Message Card Component
//!
//! One contact message on the admin dashboard.

use dioxus::prelude::*;
use portfolio_core::Message;
use portfolio_ui::{Button, ButtonVariant};

#[derive(Props, Clone, PartialEq)]
pub struct MessageCardProps {
    pub message: Message,
    /// A mutation for this message is in flight
    #[props(default = false)]
    pub busy: bool,
    pub on_mark_read: EventHandler<String>,
    pub on_delete: EventHandler<String>,
}

#[component]
pub fn MessageCard(props: MessageCardProps) -> Element {
    let message = &props.message;
    let class = if message.read {
        "message-card read"
    } else {
        "message-card unread"
    };
    let received = message.display_time();
    let mailto = format!("mailto:{}", message.email);

    let read_id = message.id.clone();
    let delete_id = message.id.clone();
    let on_mark_read = props.on_mark_read;
    let on_delete = props.on_delete;

    rsx! {
        article { class: "{class}",
            header { class: "message-header",
                h3 { class: "message-subject", "{message.subject}" }
                if message.read {
                    span { class: "badge badge-read", "Contacted" }
                } else {
                    span { class: "badge badge-new", "New" }
                }
            }

            div { class: "message-meta",
                span { class: "message-name", "{message.name}" }
                a { class: "message-email", href: "{mailto}", "{message.email}" }
                time { class: "message-time", "{received}" }
            }

            p { class: "message-body", "{message.body}" }

            div { class: "message-actions",
                if !message.read {
                    Button {
                        variant: ButtonVariant::Success,
                        disabled: props.busy,
                        onclick: move |_| on_mark_read.call(read_id.clone()),
                        if props.busy { "Working..." } else { "Mark Contacted" }
                    }
                }
                Button {
                    variant: ButtonVariant::Danger,
                    disabled: props.busy,
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}
