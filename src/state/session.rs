//! Session value and its persistence backends.
//!
//! DESIGN
//! ======
//! `Session` is an enum so that an identity can never exist without a token.
//! Persistence is a trait: the browser build writes `localStorage`, tests and
//! non-browser builds keep the record in memory.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// localStorage key holding the persisted session record.
pub const SESSION_STORAGE_KEY: &str = "tasks_client_session";

/// Client-held proof of authentication.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        token: String,
        identity: Option<String>,
    },
}

impl Session {
    /// Build a session from a token; an empty token yields `Anonymous`.
    pub fn from_token(token: String, identity: Option<String>) -> Self {
        if token.is_empty() {
            return Self::Anonymous;
        }
        Self::Authenticated { token, identity }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { token, .. } => Some(token),
        }
    }

    pub fn identity(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { identity, .. } => identity.as_deref(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub(crate) fn to_stored(&self) -> Option<StoredSession> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { token, identity } => {
                Some(StoredSession { token: token.clone(), identity: identity.clone() })
            }
        }
    }
}

/// Persisted form of an authenticated session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    #[serde(default)]
    pub identity: Option<String>,
}

impl From<StoredSession> for Session {
    fn from(stored: StoredSession) -> Self {
        Self::from_token(stored.token, stored.identity)
    }
}

/// Where the session survives page reloads.
pub trait SessionPersistence: Send + Sync {
    fn load(&self) -> Option<StoredSession>;
    fn save(&self, session: &StoredSession);
    fn clear(&self);
}

/// Browser `localStorage` backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStoragePersistence;

impl SessionPersistence for LocalStoragePersistence {
    fn load(&self) -> Option<StoredSession> {
        storage::load_json(SESSION_STORAGE_KEY)
    }

    fn save(&self, session: &StoredSession) {
        storage::save_json(SESSION_STORAGE_KEY, session);
    }

    fn clear(&self) {
        storage::remove(SESSION_STORAGE_KEY);
    }
}

/// Backend for this build: `localStorage` in the browser, memory elsewhere.
pub fn default_persistence() -> Arc<dyn SessionPersistence> {
    #[cfg(feature = "csr")]
    {
        Arc::new(LocalStoragePersistence)
    }
    #[cfg(not(feature = "csr"))]
    {
        Arc::new(MemoryPersistence::default())
    }
}

/// In-process backend; lives as long as the value.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    slot: Mutex<Option<StoredSession>>,
}

impl MemoryPersistence {
    #[cfg(test)]
    pub fn with(session: StoredSession) -> Self {
        Self { slot: Mutex::new(Some(session)) }
    }
}

impl SessionPersistence for MemoryPersistence {
    fn load(&self) -> Option<StoredSession> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, session: &StoredSession) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
