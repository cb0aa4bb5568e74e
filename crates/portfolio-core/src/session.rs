//! Admin session: the bearer token and where it lives.
//!
//! Components never reach for storage directly; they get a [`SharedSession`]
//! from context, which is either the durable [`Storage`](crate::Storage) or
//! a [`MemorySessionStore`] in tests.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::PortfolioResult;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "adminToken";

/// Persistent holder of the admin bearer token.
pub trait SessionStore: Send + Sync {
    /// The stored token, if any.
    fn token(&self) -> PortfolioResult<Option<String>>;

    /// Persist `token`, replacing any previous one.
    fn set_token(&self, token: &str) -> PortfolioResult<()>;

    /// Forget the token (logout).
    fn clear(&self) -> PortfolioResult<()>;

    /// A non-empty token is present. Read failures count as logged out.
    fn is_authenticated(&self) -> bool {
        match self.token() {
            Ok(Some(token)) => !token.is_empty(),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("Failed to read session token: {}", e);
                false
            }
        }
    }
}

/// Shared session handle passed through the component tree.
pub type SharedSession = Arc<dyn SessionStore>;

/// In-memory session, lost on drop.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> PortfolioResult<Option<String>> {
        Ok(self.token.read().clone())
    }

    fn set_token(&self, token: &str) -> PortfolioResult<()> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> PortfolioResult<()> {
        *self.token.write() = None;
        Ok(())
    }
}
