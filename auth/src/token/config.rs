use chrono::Duration;

use super::errors::TokenConfigError;
use crate::jwt::SigningKey;

/// Immutable token settings, built once at process start.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    signing_key: SigningKey,
    lifetime: Duration,
}

impl TokenConfig {
    /// Shortest lifetime that still yields `exp > iat` at second granularity.
    pub const MIN_LIFETIME_MS: i64 = 1000;

    /// Create token settings from a signing key and a lifetime in milliseconds.
    ///
    /// # Errors
    /// * `LifetimeTooShort` - Lifetime below one second
    pub fn new(signing_key: SigningKey, lifetime_ms: i64) -> Result<Self, TokenConfigError> {
        if lifetime_ms < Self::MIN_LIFETIME_MS {
            return Err(TokenConfigError::LifetimeTooShort {
                min: Self::MIN_LIFETIME_MS,
                actual: lifetime_ms,
            });
        }

        Ok(Self {
            signing_key,
            lifetime: Duration::milliseconds(lifetime_ms),
        })
    }

    /// Create token settings from a base64 encoded secret.
    ///
    /// # Errors
    /// * `SigningKey` - Secret is not valid base64 or too short
    /// * `LifetimeTooShort` - Lifetime below one second
    pub fn from_base64(secret: &str, lifetime_ms: i64) -> Result<Self, TokenConfigError> {
        let signing_key = SigningKey::from_base64(secret)?;
        Self::new(signing_key, lifetime_ms)
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }
}
