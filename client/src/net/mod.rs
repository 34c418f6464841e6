//! Networking modules for the quiz API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the bearer token and issues REST calls, `error` is the shared
//! failure type, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
