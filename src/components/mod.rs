//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared auth state from Leptos context providers set up in
//! `App`.

pub mod navbar;
pub mod protected_route;
