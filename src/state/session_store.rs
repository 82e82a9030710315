//! Single source of truth for "is the user authenticated".
//!
//! SYSTEM CONTEXT
//! ==============
//! One store is created when the app mounts and handed to components through
//! Leptos context. Clones share state, so every reader sees the same session.
//! Subscribers (the reactive `AuthState` mirror, mostly) are notified after
//! each replacement with the lock already released, so a callback may read
//! the store again.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::session::{Session, SessionPersistence};

type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Inner {
    session: Session,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<Inner>>,
    persistence: Arc<dyn SessionPersistence>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("authenticated", &self.get_session().is_authenticated()).finish()
    }
}

impl SessionStore {
    /// Create a store seeded from whatever `persistence` holds.
    pub fn restore(persistence: Arc<dyn SessionPersistence>) -> Self {
        let session = persistence.load().map(Session::from).unwrap_or_default();
        if session.is_authenticated() {
            log::debug!("restored persisted session for {:?}", session.identity());
        }
        Self {
            inner: Arc::new(Mutex::new(Inner { session, next_id: 0, listeners: Vec::new() })),
            persistence,
        }
    }

    pub fn get_session(&self) -> Session {
        self.lock().session.clone()
    }

    /// Install a new session, persist it and notify subscribers.
    ///
    /// An empty token is treated as a logout.
    pub fn set_session(&self, token: impl Into<String>, identity: Option<String>) {
        let session = Session::from_token(token.into(), identity);
        match session.to_stored() {
            Some(stored) => self.persistence.save(&stored),
            None => self.persistence.clear(),
        }
        self.replace(session);
    }

    /// Drop the current session, remove the persisted record and notify subscribers.
    pub fn clear_session(&self) {
        self.persistence.clear();
        self.replace(Session::Anonymous);
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|(existing, _)| *existing != id);
        inner.listeners.len() != before
    }

    fn replace(&self, session: Session) {
        let listeners: Vec<Listener> = {
            let mut inner = self.lock();
            inner.session = session.clone();
            inner.listeners.iter().map(|(_, listener)| Arc::clone(listener)).collect()
        };
        log::debug!("session changed: authenticated={}", session.is_authenticated());
        for listener in listeners {
            listener(&session);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
