use parking_lot::Mutex;

use super::busy::{BusyGuard, BusySet};
use crate::api::SharedApi;
use crate::error::{PortfolioError, PortfolioResult};
use crate::session::SharedSession;
use crate::types::{Banner, Message};

pub const MARKED_CONTACTED: &str = "Marked as contacted";
pub const MESSAGE_DELETED: &str = "Message deleted";

/// Point-in-time copy of the dashboard for rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub messages: Vec<Message>,
    /// True until the first fetch resolves, and while a refresh runs
    pub loading: bool,
    pub banner: Option<Banner>,
    /// Ids with a mutation in flight, sorted
    pub busy: Vec<String>,
}

impl DashboardSnapshot {
    pub fn is_busy(&self, id: &str) -> bool {
        self.busy.iter().any(|b| b == id)
    }

    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|m| !m.read).count()
    }
}

#[derive(Debug)]
struct State {
    messages: Vec<Message>,
    loading: bool,
    banner: Option<Banner>,
}

/// The admin message console.
///
/// Holds a read-through copy of the backend's messages. Mutations reach the
/// cache only after the backend answers 2xx; failures leave it untouched and
/// replace the banner with an error. The state lock is never held across an
/// `.await`, so operations on different ids can run concurrently and apply
/// in the order their responses arrive.
pub struct Dashboard {
    api: SharedApi,
    session: SharedSession,
    state: Mutex<State>,
    busy: BusySet,
}

impl Dashboard {
    pub fn new(api: SharedApi, session: SharedSession) -> Self {
        Self {
            api,
            session,
            state: Mutex::new(State {
                messages: Vec::new(),
                loading: true,
                banner: None,
            }),
            busy: BusySet::new(),
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let state = self.state.lock();
        DashboardSnapshot {
            messages: state.messages.clone(),
            loading: state.loading,
            banner: state.banner.clone(),
            busy: self.busy.snapshot(),
        }
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state.lock().messages.clone()
    }

    pub fn banner(&self) -> Option<Banner> {
        self.state.lock().banner.clone()
    }

    pub fn busy(&self) -> &BusySet {
        &self.busy
    }

    fn token(&self) -> PortfolioResult<String> {
        match self.session.token()? {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(PortfolioError::Unauthenticated),
        }
    }

    fn fail(&self, err: PortfolioError) -> PortfolioError {
        self.state.lock().banner = Some(Banner::error(err.to_string()));
        err
    }

    /// Replace the cache with the backend's current list.
    pub async fn fetch_messages(&self) -> PortfolioResult<()> {
        self.state.lock().loading = true;

        let result = match self.token() {
            Ok(token) => self.api.list_messages(&token).await,
            Err(e) => Err(e),
        };

        let mut state = self.state.lock();
        state.loading = false;
        match result {
            Ok(messages) => {
                tracing::debug!(count = messages.len(), "Fetched messages");
                state.messages = messages;
                Ok(())
            }
            Err(e) => {
                state.banner = Some(Banner::error(e.to_string()));
                Err(e)
            }
        }
    }

    /// Mark `id` as contacted.
    pub async fn mark_read(&self, id: &str) -> PortfolioResult<()> {
        let guard = self
            .busy
            .try_begin(id)
            .ok_or_else(|| PortfolioError::Busy(id.to_string()))?;
        self.mark_read_with(guard).await
    }

    /// [`mark_read`](Self::mark_read) for a caller that already claimed the id.
    pub async fn mark_read_with(&self, guard: BusyGuard) -> PortfolioResult<()> {
        let id = guard.id();
        let token = self.token().map_err(|e| self.fail(e))?;

        if let Err(e) = self.api.mark_read(&token, id).await {
            return Err(self.fail(e));
        }

        let mut state = self.state.lock();
        if let Some(message) = state.messages.iter_mut().find(|m| m.id == id) {
            message.read = true;
        }
        state.banner = Some(Banner::success(MARKED_CONTACTED));
        tracing::info!(id, "Message marked as contacted");
        Ok(())
    }

    /// Delete `id` on the backend and drop it from the cache.
    pub async fn remove(&self, id: &str) -> PortfolioResult<()> {
        let guard = self
            .busy
            .try_begin(id)
            .ok_or_else(|| PortfolioError::Busy(id.to_string()))?;
        self.remove_with(guard).await
    }

    /// [`remove`](Self::remove) for a caller that already claimed the id.
    pub async fn remove_with(&self, guard: BusyGuard) -> PortfolioResult<()> {
        let id = guard.id();
        let token = self.token().map_err(|e| self.fail(e))?;

        if let Err(e) = self.api.delete_message(&token, id).await {
            return Err(self.fail(e));
        }

        let mut state = self.state.lock();
        state.messages.retain(|m| m.id != id);
        state.banner = Some(Banner::success(MESSAGE_DELETED));
        tracing::info!(id, "Message deleted");
        Ok(())
    }

    /// Forget the token. The caller navigates to the login page.
    pub fn logout(&self) -> PortfolioResult<()> {
        self.session.clear()?;
        tracing::info!("Admin logged out");
        Ok(())
    }
}
