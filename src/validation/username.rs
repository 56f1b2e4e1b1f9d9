use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::AppError;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 10;

/// Rejection of a username candidate.
///
/// There is only one kind of failure; the message exists for display and
/// should not be matched on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidUsername {
    message: &'static str,
}

impl InvalidUsername {
    const fn new(message: &'static str) -> Self {
        Self { message }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl From<InvalidUsername> for AppError {
    fn from(err: InvalidUsername) -> Self {
        AppError::validation(err.message)
    }
}

/// A username that passed [`validate_username`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = InvalidUsername;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check(&value)?;
        Ok(Self(value))
    }
}

impl FromStr for Username {
    type Err = InvalidUsername;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_username(s)
    }
}

fn is_username_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

fn check(candidate: &str) -> Result<(), InvalidUsername> {
    // Checked on the raw input, before any trimming.
    if candidate.starts_with(' ') || candidate.ends_with(' ') {
        return Err(InvalidUsername::new(
            "Username cannot start or end with a space",
        ));
    }

    let length = candidate.trim().chars().count();
    if length < USERNAME_MIN_LENGTH {
        return Err(InvalidUsername::new(
            "Username must be at least 3 characters",
        ));
    }
    if length > USERNAME_MAX_LENGTH {
        return Err(InvalidUsername::new(
            "Username must be at most 10 characters",
        ));
    }

    if candidate.is_empty() || !candidate.chars().all(is_username_char) {
        return Err(InvalidUsername::new(
            "Username can only contain lowercase letters, numbers, and underscores",
        ));
    }

    Ok(())
}

/// Validates a raw username candidate.
///
/// Rules are applied in order and the first failure wins:
/// - no leading or trailing space on the raw input
/// - 3 to 10 characters once surrounding whitespace is trimmed
/// - only `a-z`, `0-9` and `_`
///
/// Uppercase letters are rejected rather than lowercased.
pub fn validate_username(candidate: &str) -> Result<Username, InvalidUsername> {
    check(candidate)?;
    Ok(Username(candidate.to_string()))
}

pub fn is_valid_username(candidate: &str) -> bool {
    check(candidate).is_ok()
}
