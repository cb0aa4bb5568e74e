//! Portfolio UI Components
//!
//! Small Dioxus widgets shared by the portfolio pages: buttons, filter
//! pills, form inputs, status banners and tag rows.
//!
//! Widgets only render and report events. State (which card is expanded,
//! which filter is active, what the dashboard holds) lives in
//! `portfolio-core` and is owned by the page that mounts the widget.

pub mod components;

pub use components::*;
