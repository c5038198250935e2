//! Client error hierarchy.
//!
//! Everything a gateway call can fail with collapses into `AppError`, whose
//! `Display` output is the single message shown to the user. Form validation
//! failures are kept apart in `service::validation::FieldErrors` and never
//! become an `AppError`.

use thiserror::Error;

/// Transport failure or non-2xx response from a remote API.
///
/// `status` is the HTTP status code, or `0` when no response was received.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum AuthError {
    /// Email and password did not match any account.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// An operation needed an identity but the session has none.
    #[error("You are not logged in")]
    NotLoggedIn,
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum StorageError {
    #[error("Failed to read `{key}` from storage: {reason}")]
    Read { key: String, reason: String },

    #[error("Failed to write `{key}` to storage: {reason}")]
    Write { key: String, reason: String },

    /// Stored value exists but no longer decodes into the expected type.
    #[error("Stored value for `{key}` is corrupt: {reason}")]
    Corrupt { key: String, reason: String },
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A configuration variable holds a value that cannot be used.
    #[error("Invalid value `{value}` for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Top-level client error.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Requested resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The simulated backend refused the request, the local equivalent of a 4xx.
    #[error("{0}")]
    Rejected(String),
}

impl AppError {
    /// HTTP-like status used by error pages.
    pub fn status(&self) -> u64 {
        match self {
            Self::Auth(AuthError::InvalidCredentials) | Self::Auth(AuthError::NotLoggedIn) => 401,
            Self::Api(err) => err.status,
            Self::NotFound(_) => 404,
            Self::Rejected(_) => 400,
            Self::Storage(_) | Self::Config(_) => 500,
        }
    }
}
