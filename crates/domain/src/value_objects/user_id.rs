//! User identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A unique user identifier (Discord snowflake)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Create a user ID from a raw snowflake
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Parse a user ID from its decimal string form
    ///
    /// Discord transmits snowflakes as strings to avoid 53-bit integer
    /// truncation in JSON consumers.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidUserId(s.to_string()))
    }

    /// Get the underlying snowflake
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
