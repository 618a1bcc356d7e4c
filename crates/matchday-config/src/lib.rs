//! # Matchday Config
//!
//! Configuration types for the Matchday API, each loaded from environment
//! variables with sensible defaults:
//!
//! - [`jwt`]: bearer token verification settings
//! - [`cors`]: CORS allowed origins
//! - [`server`]: listen address
//! - [`store`]: document store backend selection
//!
//! # Example
//!
//! ```ignore
//! use matchday_config::{CorsConfig, JwtConfig, ServerConfig, StoreConfig};
//!
//! dotenvy::dotenv().ok();
//! let jwt_config = JwtConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;
pub mod store;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
pub use store::{StoreBackend, StoreConfig};

/// Reads an environment variable and parses it, falling back to `default`
/// when it is unset or unparsable.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Reads an optional environment variable, treating empty values as unset.
pub(crate) fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
