//! Bearer credential verification.
//!
//! The API never issues tokens itself. It hands the raw bearer token to an
//! [`IdentityProvider`], which either resolves it into an [`Identity`] or
//! rejects it. The shipped provider verifies HS256 JWTs signed with a
//! shared secret.
//!
//! # Example
//!
//! ```ignore
//! use matchday_auth::{IdentityProvider, JwtIdentityProvider};
//! use matchday_config::JwtConfig;
//!
//! let provider = JwtIdentityProvider::new(&JwtConfig::from_env());
//! let identity = provider.verify(token).await?;
//! println!("{} is a {}", identity.subject, identity.role);
//! ```

use std::future::Future;
use std::pin::Pin;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use matchday_config::JwtConfig;
use thiserror::Error;

use crate::claims::{Claims, Identity, UnknownRole};

/// Boxed future returned by [`IdentityProvider::verify`].
pub type IdentityFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Identity, IdentityError>> + Send + 'a>>;

/// Why a credential was rejected. Callers must not reveal the variant to
/// clients.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Signature, expiry, issuer, audience or format check failed.
    #[error("token rejected: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Token is valid but names a role outside the known set.
    #[error("token carries unrecognized role `{0}`")]
    UnknownRole(UnknownRole),
}

impl From<UnknownRole> for IdentityError {
    fn from(role: UnknownRole) -> Self {
        Self::UnknownRole(role)
    }
}

/// External service that turns bearer credentials into identities.
pub trait IdentityProvider: Send + Sync {
    fn verify<'a>(&'a self, token: &'a str) -> IdentityFuture<'a>;
}

/// Verifies HS256 JWTs against a shared secret.
#[derive(Clone)]
pub struct JwtIdentityProvider {
    key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityProvider {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_secs;

        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }

        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    /// Synchronous verification used by the [`IdentityProvider`] impl.
    pub fn verify_token(&self, token: &str) -> Result<Identity, IdentityError> {
        let claims = decode::<Claims>(token, &self.key, &self.validation)?.claims;
        Ok(Identity::try_from(claims)?)
    }
}

impl IdentityProvider for JwtIdentityProvider {
    fn verify<'a>(&'a self, token: &'a str) -> IdentityFuture<'a> {
        Box::pin(async move { self.verify_token(token) })
    }
}
