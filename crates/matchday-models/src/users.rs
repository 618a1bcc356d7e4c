use chrono::{DateTime, Utc};
use matchday_auth::Role;
use matchday_core::FieldError;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::schema::{require, validate_not_blank};

pub const COLLECTION: &str = "users";

/// Stored role assignment. The document id is the user's subject id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserRoleDetails {
    pub role: Role,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserRoleRecord {
    pub uid: String,
    #[serde(flatten)]
    pub details: UserRoleDetails,
}

fn validate_role(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<Role>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("role"))
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct SetRoleDto {
    #[validate(
        required(message = "User ID is required"),
        length(min = 1, message = "User ID cannot be empty")
    )]
    #[schema(example = "k3Jd9aQ2")]
    pub uid: Option<String>,

    #[validate(
        required(message = "Role is required"),
        custom(function = "validate_role", message = "Role must be one of admin, manager, user")
    )]
    #[schema(example = "manager")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct UserIdParams {
    /// User ID
    #[validate(custom(function = "validate_not_blank", message = "User ID cannot be empty"))]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetRole {
    pub uid: String,
    pub role: Role,
}

impl TryFrom<SetRoleDto> for SetRole {
    type Error = FieldError;

    fn try_from(dto: SetRoleDto) -> Result<Self, Self::Error> {
        let role = require(dto.role, "role", "Role")?;
        Ok(Self {
            uid: require(dto.uid, "uid", "User ID")?,
            role: role
                .parse()
                .map_err(|_| FieldError::new("role", "Role must be one of admin, manager, user"))?,
        })
    }
}
