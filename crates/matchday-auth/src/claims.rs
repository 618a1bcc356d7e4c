//! Token claims, roles, and the resolved caller identity.
//!
//! - [`Claims`]: raw claims carried by a bearer token
//! - [`Role`]: the fixed set of coarse permission labels
//! - [`Identity`]: subject + role produced by authentication

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Coarse permission label attached to every identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::User];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known [`Role`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "user" => Ok(Role::User),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// JWT claims issued by the identity provider.
///
/// Only `sub` and `exp` are mandatory. A token without a `role` claim
/// belongs to a regular [`Role::User`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// User's email address, when the provider includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Custom role claim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Expiration timestamp (Unix seconds)
    pub exp: usize,
    /// Issued-at timestamp (Unix seconds)
    #[serde(default)]
    pub iat: usize,
}

/// Caller identity attached to a request after authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    /// Subject id of the caller
    #[serde(rename = "uid")]
    pub subject: String,
    /// Caller's role
    pub role: Role,
    /// Caller's email, when known
    pub email: Option<String>,
}

impl TryFrom<Claims> for Identity {
    type Error = UnknownRole;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let role = match claims.role.as_deref() {
            None => Role::User,
            Some(role) => role.parse()?,
        };

        Ok(Identity {
            subject: claims.sub,
            role,
            email: claims.email,
        })
    }
}
