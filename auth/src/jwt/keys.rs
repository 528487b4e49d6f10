use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;

use super::errors::SigningKeyError;

/// HMAC secret shared by token signing and verification.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct SigningKey {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SigningKey {
    /// Minimum secret size for HS256 (256 bits).
    pub const MIN_LENGTH: usize = 32;

    /// Build a signing key from a base64 encoded secret (standard alphabet).
    ///
    /// # Errors
    /// * `InvalidEncoding` - Secret is not valid base64
    /// * `TooShort` - Decoded secret is shorter than 32 bytes
    pub fn from_base64(secret: &str) -> Result<Self, SigningKeyError> {
        let bytes = STANDARD
            .decode(secret.trim())
            .map_err(|e| SigningKeyError::InvalidEncoding(e.to_string()))?;

        Self::from_bytes(&bytes)
    }

    /// Build a signing key from raw secret bytes.
    ///
    /// # Errors
    /// * `TooShort` - Secret is shorter than 32 bytes
    pub fn from_bytes(secret: &[u8]) -> Result<Self, SigningKeyError> {
        if secret.len() < Self::MIN_LENGTH {
            return Err(SigningKeyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: secret.len(),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        })
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(<redacted>)")
    }
}
