use super::*;

#[test]
fn default_session_is_anonymous() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(session.identity(), None);
}

#[test]
fn empty_token_never_authenticates() {
    let session = Session::from_token(String::new(), Some("alice".to_owned()));
    assert_eq!(session, Session::Anonymous);
    assert_eq!(session.identity(), None);
}

#[test]
fn authenticated_exposes_token_and_identity() {
    let session = Session::from_token("tok".to_owned(), Some("alice".to_owned()));
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("tok"));
    assert_eq!(session.identity(), Some("alice"));
}

#[test]
fn stored_record_without_identity_parses() {
    let stored: StoredSession = serde_json::from_str(r#"{"token":"tok"}"#).unwrap();
    assert_eq!(Session::from(stored), Session::from_token("tok".to_owned(), None));
}

#[test]
fn stored_record_with_empty_token_restores_anonymous() {
    let stored = StoredSession { token: String::new(), identity: Some("ghost".to_owned()) };
    assert_eq!(Session::from(stored), Session::Anonymous);
}

#[test]
fn anonymous_has_no_stored_form() {
    assert_eq!(Session::Anonymous.to_stored(), None);
    let session = Session::from_token("tok".to_owned(), None);
    assert_eq!(session.to_stored(), Some(StoredSession { token: "tok".to_owned(), identity: None }));
}

#[test]
fn memory_persistence_saves_and_clears() {
    let persistence = MemoryPersistence::default();
    assert_eq!(persistence.load(), None);
    let stored = StoredSession { token: "tok".to_owned(), identity: None };
    persistence.save(&stored);
    assert_eq!(persistence.load(), Some(stored));
    persistence.clear();
    assert_eq!(persistence.load(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_persistence_is_inert_natively() {
    let persistence = LocalStoragePersistence;
    persistence.save(&StoredSession { token: "tok".to_owned(), identity: None });
    assert_eq!(persistence.load(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn default_persistence_keeps_session_in_memory_natively() {
    let persistence = default_persistence();
    let stored = StoredSession { token: "tok".to_owned(), identity: Some("alice".to_owned()) };
    persistence.save(&stored);
    assert_eq!(persistence.load(), Some(stored));
}
