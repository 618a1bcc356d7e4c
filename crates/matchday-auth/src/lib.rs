//! # Matchday Auth
//!
//! Identity types and bearer token verification for the Matchday API.
//!
//! - [`claims`]: [`Claims`], [`Role`] and the resolved [`Identity`]
//! - [`provider`]: the [`IdentityProvider`] trait and the JWT-backed
//!   [`JwtIdentityProvider`]
//!
//! Token issuance is the identity provider's job; this crate only verifies.

pub mod claims;
pub mod provider;

// Re-export commonly used types at crate root
pub use claims::{Claims, Identity, Role, UnknownRole};
pub use provider::{IdentityError, IdentityFuture, IdentityProvider, JwtIdentityProvider};
