use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

/// Claim names owned by [`ClaimSet`] itself.
pub const RESERVED_CLAIMS: [&str; 3] = ["sub", "iat", "exp"];

/// Primitive value carried by an additional claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClaimValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl ClaimValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ClaimValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for ClaimValue {
    fn from(value: &str) -> Self {
        ClaimValue::String(value.to_string())
    }
}

impl From<String> for ClaimValue {
    fn from(value: String) -> Self {
        ClaimValue::String(value)
    }
}

impl From<bool> for ClaimValue {
    fn from(value: bool) -> Self {
        ClaimValue::Bool(value)
    }
}

impl From<i64> for ClaimValue {
    fn from(value: i64) -> Self {
        ClaimValue::Integer(value)
    }
}

impl From<f64> for ClaimValue {
    fn from(value: f64) -> Self {
        ClaimValue::Float(value)
    }
}

/// Claims carried by an access token.
///
/// `iat` and `exp` are Unix timestamps in seconds (UTC). Additional claims
/// are flattened into the payload next to the registered ones and can never
/// shadow `sub`, `iat` or `exp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimSet {
    /// Subject (account email)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    #[serde(flatten)]
    extra: HashMap<String, ClaimValue>,
}

impl ClaimSet {
    /// Create a claim set without additional claims.
    pub fn new(sub: impl ToString, iat: i64, exp: i64) -> Self {
        Self {
            sub: sub.to_string(),
            iat,
            exp,
            extra: HashMap::new(),
        }
    }

    /// Add a custom claim.
    ///
    /// Reserved claim names are ignored; the registered value always wins.
    pub fn with_claim(mut self, key: impl Into<String>, value: impl Into<ClaimValue>) -> Self {
        self.insert_claim(key.into(), value.into());
        self
    }

    /// Add every claim of `claims`, skipping reserved names.
    pub fn with_claims(mut self, claims: HashMap<String, ClaimValue>) -> Self {
        for (key, value) in claims {
            self.insert_claim(key, value);
        }
        self
    }

    fn insert_claim(&mut self, key: String, value: ClaimValue) {
        if RESERVED_CLAIMS.contains(&key.as_str()) {
            tracing::debug!(claim = %key, "Ignoring additional claim with reserved name");
            return;
        }
        self.extra.insert(key, value);
    }

    /// Get an additional claim by name.
    pub fn claim(&self, key: &str) -> Option<&ClaimValue> {
        self.extra.get(key)
    }

    /// All additional claims.
    pub fn extra(&self) -> &HashMap<String, ClaimValue> {
        &self.extra
    }

    /// Check if the claim set is expired at `now_millis` (Unix milliseconds).
    ///
    /// A token stops being valid at the exact expiration instant.
    pub fn is_expired_at(&self, now_millis: i64) -> bool {
        now_millis >= self.exp.saturating_mul(1000)
    }
}
