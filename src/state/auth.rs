//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reactive mirror of the [`SessionStore`](super::session_store::SessionStore)
//! consumed by route guards and identity-aware components.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::Session;

/// Where the gate currently stands for the browser user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    /// The store has not been attached yet; neither render nor redirect.
    /// `App` binds the store before the first render, so only the window
    /// before `bind_auth_signal` runs is ever `Pending`.
    Pending,
    Unauthenticated,
    Authenticated,
}

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub loading: bool,
}

impl AuthState {
    /// State before the session store has been attached.
    pub fn pending() -> Self {
        Self { session: Session::Anonymous, loading: true }
    }

    pub fn from_session(session: Session) -> Self {
        Self { session, loading: false }
    }

    pub fn gate_state(&self) -> GateState {
        if self.loading {
            GateState::Pending
        } else if self.session.is_authenticated() {
            GateState::Authenticated
        } else {
            GateState::Unauthenticated
        }
    }

    /// Display name for the signed-in user, if the server supplied one.
    pub fn identity(&self) -> Option<&str> {
        self.session.identity()
    }
}
