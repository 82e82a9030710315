//! Typed failures for every REST call the client makes.
//!
//! ERROR HANDLING
//! ==============
//! Transport, timeout, server rejection and decode failures stay distinct all
//! the way to the page, which decides how each kind is shown to the user.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A required form field was empty; no request was issued.
    #[error("{field} is required")]
    Validation { field: &'static str },
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {after_ms} ms")]
    Timeout { after_ms: u32 },
    /// Non-2xx response, e.g. duplicate user or bad credentials.
    #[error("request rejected ({status}){}", detail_suffix(.message.as_deref()))]
    Rejected { status: u16, message: Option<String> },
    /// The session token was missing or refused by the server.
    #[error("session expired, please sign in again")]
    Unauthorized,
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a rejection from a response status and raw body.
    ///
    /// Picks up a human-readable `detail`, `message` or `error` string from a
    /// JSON body when the server sends one.
    pub fn rejected(status: u16, body: &str) -> Self {
        Self::Rejected { status, message: rejection_detail(body) }
    }

    /// Whether retrying the same request could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout { .. } => true,
            Self::Rejected { status, .. } => *status >= 500,
            Self::Validation { .. } | Self::Unauthorized | Self::Decode(_) => false,
        }
    }
}

fn detail_suffix(message: Option<&str>) -> String {
    message.map(|m| format!(": {m}")).unwrap_or_default()
}

fn rejection_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["detail", "message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .filter(|detail| !detail.is_empty())
        .map(ToOwned::to_owned)
}
