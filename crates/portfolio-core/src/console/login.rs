use std::sync::atomic::{AtomicBool, Ordering};

use crate::api::SharedApi;
use crate::error::{PortfolioError, PortfolioResult};
use crate::session::SharedSession;
use crate::types::Credentials;

/// Shown when the backend could not be reached at all.
pub const LOGIN_RETRY: &str = "Login failed. Please try again.";

/// Exchanges credentials for a token and stores it.
///
/// One submission at a time: a second `submit` while the first is pending
/// fails with [`PortfolioError::Busy`] without sending anything.
pub struct LoginController {
    api: SharedApi,
    session: SharedSession,
    in_flight: AtomicBool,
}

impl LoginController {
    pub fn new(api: SharedApi, session: SharedSession) -> Self {
        Self {
            api,
            session,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit the form. On success the token is persisted and the caller
    /// should navigate to the dashboard.
    pub async fn submit(&self, credentials: &Credentials) -> PortfolioResult<()> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(PortfolioError::Busy("login".to_string()));
        }
        let _release = InFlight(&self.in_flight);

        let token = self.api.login(credentials).await?;
        self.session.set_token(&token)?;
        tracing::info!(user = %credentials.username, "Admin logged in");
        Ok(())
    }
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Text to show under the login form for a failed submit.
pub fn login_error_text(err: &PortfolioError) -> String {
    match err {
        PortfolioError::Network(_) => LOGIN_RETRY.to_string(),
        other => other.to_string(),
    }
}
