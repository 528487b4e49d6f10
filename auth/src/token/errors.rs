use thiserror::Error;

use crate::jwt::SigningKeyError;

/// Error type for token configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenConfigError {
    #[error("Invalid signing key: {0}")]
    SigningKey(#[from] SigningKeyError),

    #[error("Token lifetime too short: minimum {min} ms, got {actual}")]
    LifetimeTooShort { min: i64, actual: i64 },
}
