use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_session() {
    let state = AuthState::default();
    assert_eq!(state.session, Session::Anonymous);
    assert!(!state.loading);
}

#[test]
fn pending_state_is_loading() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert_eq!(state.gate_state(), GateState::Pending);
}

// =============================================================
// Gate state
// =============================================================

#[test]
fn anonymous_session_is_unauthenticated() {
    let state = AuthState::from_session(Session::Anonymous);
    assert_eq!(state.gate_state(), GateState::Unauthenticated);
}

#[test]
fn token_session_is_authenticated() {
    let state = AuthState::from_session(Session::from_token("tok".to_owned(), Some("alice".to_owned())));
    assert_eq!(state.gate_state(), GateState::Authenticated);
    assert_eq!(state.identity(), Some("alice"));
}
