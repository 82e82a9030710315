//! Client route table and the auth-gate decision over it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::auth::{AuthState, GateState};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const HOME_PATH: &str = "/";
pub const NEW_TASK_PATH: &str = "/tasks/new";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Register,
    Home,
    NewTask,
    EditTask(String),
}

impl AppRoute {
    /// Match a location pathname; query strings and a trailing slash are ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Self::Home),
            ["login"] => Some(Self::Login),
            ["register"] => Some(Self::Register),
            ["tasks", "new"] => Some(Self::NewTask),
            ["tasks", id] => Some(Self::EditTask((*id).to_owned())),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Login => LOGIN_PATH.to_owned(),
            Self::Register => REGISTER_PATH.to_owned(),
            Self::Home => HOME_PATH.to_owned(),
            Self::NewTask => NEW_TASK_PATH.to_owned(),
            Self::EditTask(id) => task_path(id),
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Home | Self::NewTask | Self::EditTask(_))
    }
}

pub fn task_path(id: &str) -> String {
    format!("/tasks/{id}")
}

/// What the gate does for a route given the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    Redirect(&'static str),
    /// Session not attached yet; show nothing and decide later.
    Wait,
}

/// Public routes always render. Protected routes render only with a token;
/// without one they redirect to `/login` and the requested destination is
/// dropped.
pub fn gate(route: &AppRoute, auth: &AuthState) -> GateDecision {
    if !route.requires_auth() {
        return GateDecision::Render;
    }
    match auth.gate_state() {
        GateState::Authenticated => GateDecision::Render,
        GateState::Unauthenticated => GateDecision::Redirect(LOGIN_PATH),
        GateState::Pending => GateDecision::Wait,
    }
}
