//! Service context for the portfolio app.
//!
//! `main` builds the session store and API client once and installs them
//! here; the root component provides them to the tree.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let session = use_session();
//! let api = use_api();
//! ```

use std::sync::OnceLock;

use dioxus::prelude::*;
use portfolio_core::{AppConfig, SharedApi, SharedSession};

/// Process-wide services, set once before launch.
#[derive(Clone)]
pub struct Services {
    pub config: AppConfig,
    pub session: SharedSession,
    pub api: SharedApi,
}

static SERVICES: OnceLock<Services> = OnceLock::new();

/// Install services. Only the first call has an effect.
pub fn install(services: Services) {
    if SERVICES.set(services).is_err() {
        tracing::warn!("Services already installed, ignoring");
    }
}

/// The installed services, if `install` ran.
pub fn services() -> Option<Services> {
    SERVICES.get().cloned()
}

/// Hook to access the session store from context.
pub fn use_session() -> SharedSession {
    use_context::<SharedSession>()
}

/// Hook to access the admin API client from context.
pub fn use_api() -> SharedApi {
    use_context::<SharedApi>()
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}
