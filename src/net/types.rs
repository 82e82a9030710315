//! Wire DTOs for the task API plus the transient form credentials.
//!
//! DESIGN
//! ======
//! Request bodies are built from these types so the exact field values the
//! user typed are what goes over the wire. Response types accept the common
//! shape variations of token-issuing backends.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::ApiError;

/// User-submitted login/registration fields.
///
/// Owned by the form for a single submission attempt and moved into the
/// submit flow, which drops it once the request completes.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Presence check for the registration form.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] naming the first empty field.
    pub fn require_for_register(&self) -> Result<(), ApiError> {
        require("username", &self.username)?;
        require("email", &self.email)?;
        require("password", &self.password)
    }

    /// Presence check for the login form; email is not used there.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] naming the first empty field.
    pub fn require_for_login(&self) -> Result<(), ApiError> {
        require("username", &self.username)?;
        require("password", &self.password)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::Validation { field });
    }
    Ok(())
}

/// `POST /register` body.
#[derive(Debug, Serialize)]
pub struct RegisterBody<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /login` body.
#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Successful `POST /login` response.
///
/// Servers disagree on key names, so every field is optional and read
/// leniently. `user` may be a bare name or an object with a `username`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub username: Option<Value>,
    #[serde(default)]
    pub user: Option<Value>,
}

impl LoginResponse {
    /// First non-empty of `token` and `access_token`.
    pub fn token(&self) -> Option<&str> {
        [self.token.as_deref(), self.access_token.as_deref()]
            .into_iter()
            .flatten()
            .find(|token| !token.is_empty())
    }

    /// Identity named by the server, if any.
    pub fn identity(&self) -> Option<String> {
        self.username
            .as_ref()
            .and_then(Value::as_str)
            .or_else(|| self.user.as_ref().and_then(user_name))
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
    }
}

fn user_name(user: &Value) -> Option<&str> {
    match user {
        Value::Object(fields) => fields.get("username").and_then(Value::as_str),
        other => other.as_str(),
    }
}

/// Token and identity produced by a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSuccess {
    pub token: String,
    pub identity: Option<String>,
}

/// A task as returned by the `/tasks` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server identifier; numeric ids are normalized to strings.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Create/update body for `/tasks`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self { title: task.title.clone(), description: task.description.clone(), completed: task.completed }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) if !id.is_empty() => Ok(id),
        Value::Number(number) if number.is_u64() || number.is_i64() => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected non-empty string or integer id")),
    }
}
