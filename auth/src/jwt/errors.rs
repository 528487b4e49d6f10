use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    MalformedToken(String),

    #[error("Token signature is invalid")]
    SignatureInvalid,

    #[error("Token is expired")]
    ExpiredToken,
}

/// Error type for signing key construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SigningKeyError {
    #[error("Signing secret is not valid base64: {0}")]
    InvalidEncoding(String),

    #[error("Signing secret too short: minimum {min} bytes, got {actual}")]
    TooShort { min: usize, actual: usize },
}
