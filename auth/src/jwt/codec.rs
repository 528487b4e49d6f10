use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::ClaimSet;
use super::errors::JwtError;
use super::keys::SigningKey;

/// Compact token codec for [`ClaimSet`].
///
/// Signs with HS256 (HMAC with SHA-256). Decoding checks structure and
/// signature only; temporal validity is left to the caller.
#[derive(Debug, Clone)]
pub struct ClaimsCodec {
    signing_key: SigningKey,
    algorithm: Algorithm,
}

impl ClaimsCodec {
    /// Create a new codec bound to a signing key.
    pub fn new(signing_key: SigningKey) -> Self {
        Self {
            signing_key,
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a compact token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &ClaimSet) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, self.signing_key.encoding_key())
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode a compact token and verify its signature.
    ///
    /// # Errors
    /// * `MalformedToken` - Wrong number of segments, invalid base64url or JSON,
    ///   or missing registered claims
    /// * `SignatureInvalid` - Signature does not match, or header names another algorithm
    pub fn decode(&self, token: &str) -> Result<ClaimSet, JwtError> {
        let token_data =
            decode::<ClaimSet>(token, self.signing_key.decoding_key(), &self.validation())
                .map_err(|e| match e.kind() {
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        JwtError::SignatureInvalid
                    }
                    _ => JwtError::MalformedToken(e.to_string()),
                })?;

        Ok(token_data.claims)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked by TokenService against its own clock
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();
        validation
    }
}
