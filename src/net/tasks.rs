//! Task CRUD against `/tasks`, authorized with the stored session token.
//!
//! ERROR HANDLING
//! ==============
//! A missing token fails with [`ApiError::Unauthorized`] before any request is
//! sent. A 401 from the server means the token is no longer valid: the session
//! is cleared so every gate flips to unauthenticated on its next check.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, HttpTransport};
use super::types::{Task, TaskDraft};
use crate::state::session_store::SessionStore;

pub const TASKS_ENDPOINT: &str = "/tasks";

fn task_endpoint(id: &str) -> String {
    format!("{TASKS_ENDPOINT}/{id}")
}

pub struct TasksClient<T> {
    transport: T,
    store: SessionStore,
}

impl<T: HttpTransport> TasksClient<T> {
    pub fn new(transport: T, store: SessionStore) -> Self {
        Self { transport, store }
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on auth, transport, status or decode failure.
    pub async fn list(&self) -> Result<Vec<Task>, ApiError> {
        self.send(ApiRequest::get(TASKS_ENDPOINT)).await?.json()
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on auth, transport, status or decode failure.
    pub async fn get(&self, id: &str) -> Result<Task, ApiError> {
        self.send(ApiRequest::get(task_endpoint(id))).await?.json()
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on auth, transport, status or decode failure.
    pub async fn create(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        self.send(ApiRequest::post(TASKS_ENDPOINT, draft)?).await?.json()
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on auth, transport, status or decode failure.
    pub async fn update(&self, id: &str, draft: &TaskDraft) -> Result<Task, ApiError> {
        self.send(ApiRequest::put(task_endpoint(id), draft)?).await?.json()
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on auth, transport or status failure.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.send(ApiRequest::delete(task_endpoint(id))).await.map(|_| ())
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let Some(token) = self.store.get_session().token().map(ToOwned::to_owned) else {
            return Err(ApiError::Unauthorized);
        };
        let response = self.transport.send(request.with_bearer(&token)).await?;
        if response.status == 401 {
            log::warn!("task API refused the session token; signing out");
            self.store.clear_session();
            return Err(ApiError::Unauthorized);
        }
        response.error_for_status()
    }
}
