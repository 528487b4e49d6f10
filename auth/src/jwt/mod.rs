pub mod claims;
pub mod codec;
pub mod errors;
pub mod keys;

pub use claims::ClaimSet;
pub use claims::ClaimValue;
pub use codec::ClaimsCodec;
pub use errors::JwtError;
pub use errors::SigningKeyError;
pub use keys::SigningKey;
