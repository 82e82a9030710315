use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::net::test_support::RecordingTransport;
use crate::net::transport::Method;
use crate::state::session::MemoryPersistence;

fn signed_in_store() -> SessionStore {
    let store = SessionStore::restore(Arc::new(MemoryPersistence::default()));
    store.set_session("tok", Some("alice".to_owned()));
    store
}

#[test]
fn task_endpoint_formats_expected_path() {
    assert_eq!(task_endpoint("12"), "/tasks/12");
}

#[test]
fn list_sends_bearer_token() {
    let transport = RecordingTransport::replying(200, r#"[{"id":1,"title":"Write release notes"}]"#);
    let client = TasksClient::new(transport.clone(), signed_in_store());

    let tasks = block_on(client.list()).unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, "1");

    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].path, "/tasks");
    assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
}

#[test]
fn create_posts_draft() {
    let transport = RecordingTransport::replying(201, r#"{"id":5,"title":"New","completed":false}"#);
    let client = TasksClient::new(transport.clone(), signed_in_store());
    let draft = TaskDraft { title: "New".to_owned(), description: None, completed: false };

    let task = block_on(client.create(&draft)).unwrap();
    assert_eq!(task.id, "5");
    let sent = transport.requests();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].body, Some(serde_json::json!({ "title": "New", "description": null, "completed": false })));
}

#[test]
fn update_puts_to_task_path() {
    let transport = RecordingTransport::replying(200, r#"{"id":"5","title":"Done","completed":true}"#);
    let client = TasksClient::new(transport.clone(), signed_in_store());
    let draft = TaskDraft { title: "Done".to_owned(), description: None, completed: true };

    let task = block_on(client.update("5", &draft)).unwrap();
    assert!(task.completed);
    let sent = transport.requests();
    assert_eq!(sent[0].method, Method::Put);
    assert_eq!(sent[0].path, "/tasks/5");
}

#[test]
fn delete_accepts_empty_body() {
    let transport = RecordingTransport::replying(204, "");
    let client = TasksClient::new(transport.clone(), signed_in_store());
    assert_eq!(block_on(client.delete("5")), Ok(()));
    assert_eq!(transport.requests()[0].method, Method::Delete);
}

#[test]
fn anonymous_session_sends_nothing() {
    let transport = RecordingTransport::replying(200, "[]");
    let store = SessionStore::restore(Arc::new(MemoryPersistence::default()));
    let client = TasksClient::new(transport.clone(), store);

    assert_eq!(block_on(client.list()), Err(ApiError::Unauthorized));
    assert!(transport.requests().is_empty());
}

#[test]
fn unauthorized_response_clears_session() {
    let transport = RecordingTransport::replying(401, r#"{"detail":"Token expired"}"#);
    let store = signed_in_store();
    let client = TasksClient::new(transport, store.clone());

    assert_eq!(block_on(client.get("1")), Err(ApiError::Unauthorized));
    assert!(!store.get_session().is_authenticated());
}

#[test]
fn other_failures_keep_session() {
    let transport = RecordingTransport::replying(404, r#"{"detail":"Task not found"}"#);
    let store = signed_in_store();
    let client = TasksClient::new(transport, store.clone());

    assert_eq!(
        block_on(client.get("99")),
        Err(ApiError::Rejected { status: 404, message: Some("Task not found".to_owned()) })
    );
    assert!(store.get_session().is_authenticated());
}
