//! Admin backend API.
//!
//! | Method | Path | Auth |
//! |---|---|---|
//! | POST | `/api/admin/login` | none |
//! | GET | `/api/admin/messages` | Bearer |
//! | PUT | `/api/admin/messages/{id}/read` | Bearer |
//! | DELETE | `/api/admin/messages/{id}` | Bearer |
//!
//! Controllers talk to [`AdminApi`]; [`HttpAdminApi`] is the reqwest
//! implementation.

mod client;
pub mod wire;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::PortfolioResult;
use crate::types::{Credentials, Message};

pub use client::HttpAdminApi;

/// Fallback text per operation when the backend gives no usable message.
pub const LOGIN_FAILED: &str = "Login failed";
pub const FETCH_FAILED: &str = "Failed to fetch";
pub const MARK_READ_FAILED: &str = "Failed to mark contacted";
pub const DELETE_FAILED: &str = "Failed to delete";

/// The remote admin backend.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Exchange credentials for a bearer token.
    async fn login(&self, credentials: &Credentials) -> PortfolioResult<String>;

    /// Fetch every contact message.
    async fn list_messages(&self, token: &str) -> PortfolioResult<Vec<Message>>;

    /// Mark one message as contacted.
    async fn mark_read(&self, token: &str, id: &str) -> PortfolioResult<()>;

    async fn delete_message(&self, token: &str, id: &str) -> PortfolioResult<()>;
}

/// Shared API handle passed to controllers.
pub type SharedApi = Arc<dyn AdminApi>;
