//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior,
//! and the reactive `AuthState` must track the session store exactly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::{AppRoute, GateDecision};
use crate::state::auth::AuthState;
use crate::state::session_store::{SessionStore, SubscriptionId};

/// Route for a location pathname. Unknown paths are treated as protected.
pub fn current_route(pathname: &str) -> AppRoute {
    AppRoute::parse(pathname).unwrap_or(AppRoute::Home)
}

/// Options for gate redirects: replace history so Back does not return to a
/// page the user cannot see.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Navigate whenever the gate decides on a redirect.
pub fn install_gate_redirect<F>(decision: Memo<GateDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GateDecision::Redirect(path) = decision.get() {
            log::debug!("gate redirect to {path}");
            navigate(path, redirect_options());
        }
    });
}

/// Mirror `store` into `auth`: seed it with the current session, then follow
/// every change.
pub fn bind_auth_signal(store: &SessionStore, auth: RwSignal<AuthState>) -> SubscriptionId {
    let id = store.subscribe(move |session| auth.set(AuthState::from_session(session.clone())));
    auth.set(AuthState::from_session(store.get_session()));
    id
}
