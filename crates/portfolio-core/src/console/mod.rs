//! Admin console controllers: login form and message dashboard.
//!
//! Both are UI-agnostic; the desktop pages and the CLI drive the same code.

mod busy;
mod dashboard;
mod login;

pub use busy::{BusyGuard, BusySet};
pub use dashboard::{Dashboard, DashboardSnapshot, MARKED_CONTACTED, MESSAGE_DELETED};
pub use login::{login_error_text, LoginController, LOGIN_RETRY};
