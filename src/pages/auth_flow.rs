//! Submit flows behind the login and register forms.
//!
//! Each flow runs the remote call, applies its effect on the session store and
//! returns what the page should show and where it should go. The store update
//! of a login always completes before the outcome is returned, so the gate on
//! the home route already sees the new session when navigation happens.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use leptos_router::NavigateOptions;

use crate::net::auth_client::AuthClient;
use crate::net::error::ApiError;
use crate::net::transport::HttpTransport;
use crate::net::types::Credentials;
use crate::routes::{HOME_PATH, LOGIN_PATH};
use crate::state::session_store::SessionStore;

pub const REGISTER_SUCCESS_NOTICE: &str = "Registration successful";

/// Notice to show and route to visit after a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub notice: Option<String>,
    pub navigate_to: Option<&'static str>,
}

pub fn register_failure_notice(err: &ApiError) -> String {
    format!("Registration failed: {err}")
}

pub fn login_failure_notice(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { status: 400 | 401 | 403, message: None } => {
            "Login failed: invalid username or password".to_owned()
        }
        other => format!("Login failed: {other}"),
    }
}

/// Register, then send the user to `/login`. No session is created.
pub async fn submit_register<T: HttpTransport>(client: &AuthClient<T>, credentials: Credentials) -> SubmitOutcome {
    match client.register(&credentials).await {
        Ok(()) => SubmitOutcome {
            notice: Some(REGISTER_SUCCESS_NOTICE.to_owned()),
            navigate_to: Some(LOGIN_PATH),
        },
        Err(err) => {
            log::warn!("registration failed (transient={}): {err}", err.is_transient());
            SubmitOutcome { notice: Some(register_failure_notice(&err)), navigate_to: None }
        }
    }
}

/// Log in, install the session, then send the user to `/`.
pub async fn submit_login<T: HttpTransport>(
    client: &AuthClient<T>,
    store: &SessionStore,
    credentials: Credentials,
) -> SubmitOutcome {
    match client.login(&credentials).await {
        Ok(success) => {
            store.set_session(success.token, success.identity);
            SubmitOutcome { notice: None, navigate_to: Some(HOME_PATH) }
        }
        Err(err) => {
            log::warn!("login failed (transient={}): {err}", err.is_transient());
            SubmitOutcome { notice: Some(login_failure_notice(&err)), navigate_to: None }
        }
    }
}

/// Alert first, then navigate, matching the order the user expects.
///
/// Pages pass [`alert::show`](crate::util::alert::show) and the router's
/// navigate function.
pub fn apply_outcome<A, F>(outcome: &SubmitOutcome, alert: &A, navigate: &F)
where
    A: Fn(&str),
    F: Fn(&str, NavigateOptions),
{
    if let Some(notice) = &outcome.notice {
        alert(notice);
    }
    if let Some(path) = outcome.navigate_to {
        navigate(path, NavigateOptions::default());
    }
}
