//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, build and
//! runtime config) and pure decision logic from page and component code.

pub mod config;
pub mod guard;
pub mod session_store;
