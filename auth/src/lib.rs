//! Authentication utilities library
//!
//! Provides the token issuance and validation engine used by the library
//! service:
//! - Password hashing (Argon2id)
//! - Compact HS256 token encoding and decoding
//! - Token minting and validation against a clock
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{SigningKey, TokenConfig, TokenService};
//!
//! let key = SigningKey::from_bytes(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let tokens = TokenService::new(TokenConfig::new(key, 3_600_000).unwrap());
//!
//! let token = tokens.mint("alice@example.com").unwrap();
//! assert_eq!(tokens.validate(&token, "alice@example.com"), Ok(true));
//! assert_eq!(tokens.extract_subject(&token).unwrap(), "alice@example.com");
//! ```

pub mod clock;
pub mod jwt;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use clock::Clock;
pub use clock::FixedClock;
pub use clock::SystemClock;
pub use jwt::ClaimSet;
pub use jwt::ClaimValue;
pub use jwt::ClaimsCodec;
pub use jwt::JwtError;
pub use jwt::SigningKey;
pub use jwt::SigningKeyError;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenConfig;
pub use token::TokenConfigError;
pub use token::TokenService;
