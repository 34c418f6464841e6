//! Shared DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! The user record is parsed leniently: the same type is used for fresh API
//! responses and for copies read back out of `localStorage`, which may be
//! partial or written by an older build.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier as issued by the API (numeric or opaque string).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Numeric(i64),
    Text(String),
}

impl Default for RecordId {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// The signed-in user, as returned by the API and mirrored into storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// API user identifier.
    #[serde(default)]
    pub id: RecordId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Role name (e.g. `"student"`, `"admin"`), if the API sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Set by an administrator to force a password change on next visit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub must_change_password: Option<bool>,
}

impl UserRecord {
    /// Whether the password-change gate applies to this user.
    pub fn must_change_password(&self) -> bool {
        self.must_change_password.unwrap_or(false)
    }

    /// Name to show in headers; falls back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() { &self.email } else { &self.name }
    }
}

/// Successful `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// The authenticated user.
    pub user: UserRecord,
}

/// A quiz as listed by `GET /quizzes` and `GET /quizzes/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    /// Quiz identifier.
    pub id: RecordId,
    /// Display title.
    pub title: String,
    /// Optional long-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Number of questions in the quiz.
    #[serde(default)]
    pub question_count: u32,
}
