//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Submit sequencing for the auth
//! forms lives in `auth_flow` so it can be exercised without a browser.

pub(crate) mod auth_flow;
pub mod home;
pub mod login;
pub mod register;
pub mod task_form;
