//! Route guard for protected pages.
//!
//! A guard instance starts in [`AuthState::Unknown`] and settles exactly once,
//! synchronously, from the session store. There is no re-validation: a token
//! the server no longer accepts is only noticed when a protected request
//! fails, and that failure is reported as an error banner, not a redirect.

use crate::session::SessionStore;

/// Path unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthState {
    /// Before the storage check; renders a verifying indicator
    #[default]
    Unknown,
    Unauthenticated,
    Authenticated,
}

/// What the guarded route should do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Still checking
    Wait,
    /// Go to the login page; protected content must not render
    Redirect(&'static str),
    Render,
}

/// Per-mount guard state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteGuard {
    state: AuthState,
}

impl RouteGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// Resolve from the session store. Only the first call reads storage;
    /// later calls return the settled state.
    pub fn check(&mut self, session: &dyn SessionStore) -> AuthState {
        if self.state == AuthState::Unknown {
            self.state = if session.is_authenticated() {
                AuthState::Authenticated
            } else {
                tracing::info!("No admin session, redirecting to {}", LOGIN_PATH);
                AuthState::Unauthenticated
            };
        }
        self.state
    }

    pub fn decision(&self) -> GuardDecision {
        match self.state {
            AuthState::Unknown => GuardDecision::Wait,
            AuthState::Unauthenticated => GuardDecision::Redirect(LOGIN_PATH),
            AuthState::Authenticated => GuardDecision::Render,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    #[test]
    fn unknown_waits() {
        let guard = RouteGuard::new();
        assert_eq!(guard.state(), AuthState::Unknown);
        assert_eq!(guard.decision(), GuardDecision::Wait);
    }

    #[test]
    fn no_token_redirects_to_login() {
        let mut guard = RouteGuard::new();
        let session = MemorySessionStore::new();
        assert_eq!(guard.check(&session), AuthState::Unauthenticated);
        assert_eq!(guard.decision(), GuardDecision::Redirect("/login"));
    }

    #[test]
    fn token_renders() {
        let mut guard = RouteGuard::new();
        let session = MemorySessionStore::with_token("abc");
        assert_eq!(guard.check(&session), AuthState::Authenticated);
        assert_eq!(guard.decision(), GuardDecision::Render);
    }

    #[test]
    fn settled_state_is_never_revisited() {
        let mut guard = RouteGuard::new();
        let session = MemorySessionStore::with_token("abc");
        guard.check(&session);

        session.clear().unwrap();
        assert_eq!(guard.check(&session), AuthState::Authenticated);
    }
}
