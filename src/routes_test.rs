use super::*;
use crate::state::session::Session;

fn signed_in() -> AuthState {
    AuthState::from_session(Session::from_token("tok".to_owned(), Some("alice".to_owned())))
}

fn signed_out() -> AuthState {
    AuthState::from_session(Session::Anonymous)
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_known_paths() {
    assert_eq!(AppRoute::parse("/"), Some(AppRoute::Home));
    assert_eq!(AppRoute::parse("/login"), Some(AppRoute::Login));
    assert_eq!(AppRoute::parse("/register/"), Some(AppRoute::Register));
    assert_eq!(AppRoute::parse("/tasks/new"), Some(AppRoute::NewTask));
    assert_eq!(AppRoute::parse("/tasks/42?tab=notes"), Some(AppRoute::EditTask("42".to_owned())));
}

#[test]
fn parse_unknown_paths() {
    assert_eq!(AppRoute::parse("/tasks"), None);
    assert_eq!(AppRoute::parse("/tasks/1/extra"), None);
    assert_eq!(AppRoute::parse("/settings"), None);
}

#[test]
fn path_is_inverse_of_parse() {
    for route in [AppRoute::Home, AppRoute::Login, AppRoute::Register, AppRoute::NewTask, AppRoute::EditTask("9".to_owned())] {
        assert_eq!(AppRoute::parse(&route.path()), Some(route));
    }
}

#[test]
fn only_task_views_and_home_are_protected() {
    assert!(AppRoute::Home.requires_auth());
    assert!(AppRoute::NewTask.requires_auth());
    assert!(AppRoute::EditTask("1".to_owned()).requires_auth());
    assert!(!AppRoute::Login.requires_auth());
    assert!(!AppRoute::Register.requires_auth());
}

// =============================================================
// Gate
// =============================================================

#[test]
fn protected_route_renders_with_token() {
    assert_eq!(gate(&AppRoute::NewTask, &signed_in()), GateDecision::Render);
}

#[test]
fn protected_routes_never_render_without_token() {
    for route in [AppRoute::Home, AppRoute::NewTask, AppRoute::EditTask("3".to_owned())] {
        assert_eq!(gate(&route, &signed_out()), GateDecision::Redirect("/login"));
    }
}

#[test]
fn public_routes_render_without_token() {
    assert_eq!(gate(&AppRoute::Login, &signed_out()), GateDecision::Render);
    assert_eq!(gate(&AppRoute::Register, &signed_out()), GateDecision::Render);
}

#[test]
fn pending_state_waits() {
    assert_eq!(gate(&AppRoute::Home, &AuthState::pending()), GateDecision::Wait);
}

#[test]
fn unauthenticated_visit_to_new_task_redirects_to_login() {
    let route = AppRoute::parse("/tasks/new").unwrap();
    assert_eq!(gate(&route, &signed_out()), GateDecision::Redirect(LOGIN_PATH));
}
