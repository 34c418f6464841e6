//! Client-side session state.
//!
//! DESIGN
//! ======
//! `auth` holds the pure store and transitions, `token_sync` and
//! `persistence` are its observers, and `session` wires them into Leptos
//! context.

pub mod auth;
pub mod persistence;
pub mod session;
pub mod token_sync;
