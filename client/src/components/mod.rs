//! Shared UI components.

pub mod layout;
pub mod session_guard;
pub mod sign_out;
