//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Location argument is empty or otherwise unusable
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// User identifier could not be parsed
    #[error("Invalid user id: {0}")]
    InvalidUserId(String),
}
