use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;

use super::config::TokenConfig;
use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::jwt::ClaimSet;
use crate::jwt::ClaimValue;
use crate::jwt::ClaimsCodec;
use crate::jwt::JwtError;

/// Stateless access token issuer and validator.
///
/// Holds only read-only configuration, so one instance is shared behind an
/// `Arc` by every request.
#[derive(Debug, Clone)]
pub struct TokenService {
    codec: ClaimsCodec,
    lifetime: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// Create a token service reading time from the UTC system clock.
    pub fn new(config: TokenConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a token service with an explicit clock.
    pub fn with_clock(config: TokenConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            codec: ClaimsCodec::new(config.signing_key().clone()),
            lifetime: config.lifetime(),
            clock,
        }
    }

    /// Configured token lifetime.
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Mint a token for `subject` without additional claims.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn mint(&self, subject: &str) -> Result<String, JwtError> {
        self.mint_with_claims(subject, HashMap::new())
    }

    /// Mint a token for `subject` carrying additional claims.
    ///
    /// `iat` is the current instant truncated to whole seconds and `exp` is
    /// rounded down so the token never outlives `iat + lifetime`.
    ///
    /// # Arguments
    /// * `subject` - Identity asserted by the token
    /// * `extra` - Additional claims (reserved names are ignored)
    ///
    /// # Returns
    /// Compact signed token
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn mint_with_claims(
        &self,
        subject: &str,
        extra: HashMap<String, ClaimValue>,
    ) -> Result<String, JwtError> {
        let issued_at = self.clock.now().timestamp();
        let expires_at = issued_at
            .saturating_mul(1000)
            .saturating_add(self.lifetime.num_milliseconds())
            .div_euclid(1000);

        let claims = ClaimSet::new(subject, issued_at, expires_at).with_claims(extra);

        self.codec.encode(&claims)
    }

    /// Check that `token` is authentic, unexpired and issued for `expected_subject`.
    ///
    /// # Returns
    /// `true` when the subject matches, `false` on a subject mismatch
    ///
    /// # Errors
    /// * `MalformedToken` - Token structure is invalid
    /// * `SignatureInvalid` - Signature does not match
    /// * `ExpiredToken` - Current instant is at or past `exp`
    pub fn validate(&self, token: &str, expected_subject: &str) -> Result<bool, JwtError> {
        let claims = self.codec.decode(token)?;

        if claims.is_expired_at(self.clock.now().timestamp_millis()) {
            return Err(JwtError::ExpiredToken);
        }

        Ok(claims.sub == expected_subject)
    }

    /// Decode `token` and return its subject.
    ///
    /// Does not check expiry.
    pub fn extract_subject(&self, token: &str) -> Result<String, JwtError> {
        self.codec.decode(token).map(|claims| claims.sub)
    }

    /// Decode `token` and return its full claim set.
    ///
    /// Does not check expiry.
    pub fn extract_claims(&self, token: &str) -> Result<ClaimSet, JwtError> {
        self.codec.decode(token)
    }
}
