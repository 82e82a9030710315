//! Per-form handle for the submission currently in flight.
//!
//! Starting a new submission aborts the previous one, so a slow response from
//! a superseded request can never update the session or trigger navigation.

#[cfg(test)]
#[path = "in_flight_test.rs"]
mod in_flight_test;

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::{AbortHandle, Abortable};

#[derive(Clone, Debug, Default)]
pub struct InFlight {
    current: Arc<Mutex<Option<AbortHandle>>>,
}

impl InFlight {
    /// Register `work` as the current submission and abort any earlier one.
    ///
    /// Registration happens when this is called, not when the returned future
    /// is first polled. Resolves to `None` if `work` was superseded or
    /// cancelled before it completed.
    pub fn run<F: Future>(&self, work: F) -> impl Future<Output = Option<F::Output>> + use<F> {
        let (handle, registration) = AbortHandle::new_pair();
        let previous = self.current.lock().unwrap_or_else(PoisonError::into_inner).replace(handle);
        if let Some(previous) = previous {
            log::debug!("superseding in-flight submission");
            previous.abort();
        }
        let work = Abortable::new(work, registration);
        async move { work.await.ok() }
    }

    /// Abort the current submission, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.current.lock().unwrap_or_else(PoisonError::into_inner).take() {
            handle.abort();
        }
    }
}
