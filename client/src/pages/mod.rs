//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and API calls. Access control lives in the
//! route-group layouts, never in the pages themselves.

pub mod account;
pub mod change_password;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod quiz_redirect;
pub mod quizzes;
