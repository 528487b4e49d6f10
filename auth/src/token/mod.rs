pub mod config;
pub mod errors;
pub mod service;

pub use config::TokenConfig;
pub use errors::TokenConfigError;
pub use service::TokenService;
