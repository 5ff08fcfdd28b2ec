use std::fmt;

use serde::Deserialize;

use crate::error::{FetchError, InvalidUserId};

/// Result of a single user lookup. There is no pending state to observe: a call
/// either settles with a record or with one of the [`FetchError`] kinds.
pub type RequestOutcome = Result<UserRecord, FetchError>;

/// A user profile as returned by the `/users/{id}` endpoint.
///
/// Only the fields the view needs are kept; anything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub name: Option<String>,
    pub login: String,
    pub avatar_url: String,
    pub location: Option<String>,
    pub public_repos: u64,
}

/// User-chosen identifier as typed by the user, surrounding whitespace removed.
///
/// `.` and `..` are refused: they survive percent-encoding unchanged and URL parsing
/// would resolve them as dot-segments, moving the request off `/users/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn parse(raw: &str) -> Result<Self, InvalidUserId> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidUserId::Empty);
        }
        if matches!(trimmed, "." | "..") {
            return Err(InvalidUserId::DotSegment(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
