//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds the value and its persistence, `session_store` owns the
//! single shared instance, and `auth` is the reactive view of it that route
//! guards read.

pub mod auth;
pub mod session;
pub mod session_store;
