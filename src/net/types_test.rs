use super::*;

// =============================================================
// Credentials
// =============================================================

fn alice() -> Credentials {
    Credentials { username: "alice".to_owned(), email: "alice@x.com".to_owned(), password: "p1".to_owned() }
}

#[test]
fn register_requires_every_field() {
    assert_eq!(alice().require_for_register(), Ok(()));
    let missing_email = Credentials { email: String::new(), ..alice() };
    assert_eq!(missing_email.require_for_register(), Err(ApiError::Validation { field: "email" }));
    let missing_username = Credentials { username: String::new(), ..alice() };
    assert_eq!(missing_username.require_for_register(), Err(ApiError::Validation { field: "username" }));
}

#[test]
fn login_does_not_require_email() {
    let creds = Credentials { email: String::new(), ..alice() };
    assert_eq!(creds.require_for_login(), Ok(()));
    let creds = Credentials { password: String::new(), ..alice() };
    assert_eq!(creds.require_for_login(), Err(ApiError::Validation { field: "password" }));
}

#[test]
fn debug_output_redacts_password() {
    let rendered = format!("{:?}", alice());
    assert!(rendered.contains("alice@x.com"));
    assert!(!rendered.contains("p1"));
}

// =============================================================
// Login response
// =============================================================

#[test]
fn login_response_accepts_access_token_alias() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"access_token":"abc","token_type":"bearer"}"#).unwrap();
    assert_eq!(resp.token(), Some("abc"));
    assert_eq!(resp.identity(), None);
}

#[test]
fn login_response_skips_empty_token() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"","access_token":"abc"}"#).unwrap();
    assert_eq!(resp.token(), Some("abc"));
    let resp: LoginResponse = serde_json::from_str(r#"{"token":""}"#).unwrap();
    assert_eq!(resp.token(), None);
}

#[test]
fn login_response_reads_identity() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"abc","username":"alice"}"#).unwrap();
    assert_eq!(resp.identity().as_deref(), Some("alice"));
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"abc","user":"bob"}"#).unwrap();
    assert_eq!(resp.identity().as_deref(), Some("bob"));
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"abc","user":{"id":1}}"#).unwrap();
    assert_eq!(resp.identity(), None);
}

// =============================================================
// Tasks
// =============================================================

#[test]
fn task_id_accepts_numbers_and_strings() {
    let task: Task = serde_json::from_str(r#"{"id":7,"title":"Ship"}"#).unwrap();
    assert_eq!(task.id, "7");
    assert_eq!(task.description, None);
    assert!(!task.completed);

    let task: Task =
        serde_json::from_str(r#"{"id":"t-1","title":"Ship","description":"soon","completed":true}"#).unwrap();
    assert_eq!(task.id, "t-1");
    assert!(task.completed);
}

#[test]
fn task_id_rejects_other_shapes() {
    assert!(serde_json::from_str::<Task>(r#"{"id":1.5,"title":"x"}"#).is_err());
    assert!(serde_json::from_str::<Task>(r#"{"id":"","title":"x"}"#).is_err());
    assert!(serde_json::from_str::<Task>(r#"{"id":null,"title":"x"}"#).is_err());
}

#[test]
fn draft_from_task_copies_editable_fields() {
    let task = Task { id: "3".to_owned(), title: "A".to_owned(), description: Some("b".to_owned()), completed: true };
    let draft = TaskDraft::from(&task);
    assert_eq!(draft, TaskDraft { title: "A".to_owned(), description: Some("b".to_owned()), completed: true });
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        serde_json::json!({ "title": "A", "description": "b", "completed": true })
    );
}
