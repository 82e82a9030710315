//! Networking modules for the task REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the HTTP seam, `auth_client` and `tasks` are the endpoint
//! clients built on it, `in_flight` guards form submissions, and `types` and
//! `error` define the shared wire schema and failure taxonomy.

pub mod auth_client;
pub mod error;
pub mod in_flight;
pub mod tasks;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
