//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Invalid credentials provided.
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,

    /// Role name not recognised.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// Same username registered twice for one role.
    #[error("duplicate {role} account: {username}")]
    DuplicateAccount { role: String, username: String },

    /// Username or password left empty.
    #[error("account field must not be empty: {0}")]
    EmptyField(&'static str),
}

impl AuthError {
    /// Check if this is an authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AuthError::InvalidCredentials)
    }
}
