use chrono::{DateTime, Utc};
use matchday_core::FieldError;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::schema::{require, validate_not_blank};

pub const COLLECTION: &str = "players";

/// Stored player fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerDetails {
    pub name: String,
    pub position: String,
    #[serde(rename = "jerseyNumber")]
    pub jersey_number: String,
    /// Assigned by the server when the player is created
    #[serde(rename = "registrationId")]
    pub registration_id: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Player {
    pub id: String,
    #[serde(flatten)]
    pub details: PlayerDetails,
}

impl PlayerDetails {
    pub fn new(input: NewPlayer, registered_at: DateTime<Utc>) -> Self {
        Self {
            name: input.name,
            position: input.position,
            jersey_number: input.jersey_number,
            registration_id: registered_at,
        }
    }

    pub fn apply(&mut self, changes: PlayerChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(position) = changes.position {
            self.position = position;
        }
        if let Some(jersey_number) = changes.jersey_number {
            self.jersey_number = jersey_number;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreatePlayerDto {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name cannot be empty")
    )]
    #[schema(example = "Lionel Messi")]
    pub name: Option<String>,

    #[validate(
        required(message = "Position is required"),
        length(min = 1, message = "Position cannot be empty")
    )]
    #[schema(example = "Forward")]
    pub position: Option<String>,

    #[serde(rename = "jerseyNumber")]
    #[validate(
        required(message = "Jersey Number is required"),
        length(min = 1, message = "Jersey Number cannot be empty")
    )]
    #[schema(example = "10")]
    pub jersey_number: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePlayerDto {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Position cannot be empty"))]
    pub position: Option<String>,

    #[serde(rename = "jerseyNumber")]
    #[validate(length(min = 1, message = "Jersey Number cannot be empty"))]
    pub jersey_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct PlayerIdParams {
    /// Player ID
    #[validate(custom(function = "validate_not_blank", message = "Player ID cannot be empty"))]
    pub id: String,
}

/// Validated input for creating a player.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlayer {
    pub name: String,
    pub position: String,
    pub jersey_number: String,
}

impl TryFrom<CreatePlayerDto> for NewPlayer {
    type Error = FieldError;

    fn try_from(dto: CreatePlayerDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require(dto.name, "name", "Name")?,
            position: require(dto.position, "position", "Position")?,
            jersey_number: require(dto.jersey_number, "jerseyNumber", "Jersey Number")?,
        })
    }
}

/// Validated partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerChanges {
    pub name: Option<String>,
    pub position: Option<String>,
    pub jersey_number: Option<String>,
}

impl From<UpdatePlayerDto> for PlayerChanges {
    fn from(dto: UpdatePlayerDto) -> Self {
        Self {
            name: dto.name,
            position: dto.position,
            jersey_number: dto.jersey_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages(dto: &impl Validate) -> Vec<String> {
        let errors = dto.validate().unwrap_err();
        matchday_core::field_errors(&errors)
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn test_valid_create_passes_unchanged() {
        let dto: CreatePlayerDto = serde_json::from_value(json!({
            "name": "Messi",
            "position": "Forward",
            "jerseyNumber": "10"
        }))
        .unwrap();

        assert!(dto.validate().is_ok());
        let input = NewPlayer::try_from(dto).unwrap();
        assert_eq!(input.name, "Messi");
        assert_eq!(input.position, "Forward");
        assert_eq!(input.jersey_number, "10");
    }

    #[test]
    fn test_create_reports_every_missing_field() {
        let dto: CreatePlayerDto = serde_json::from_value(json!({"name": "Messi"})).unwrap();
        assert_eq!(
            messages(&dto),
            vec!["Jersey Number is required", "Position is required"]
        );
    }

    #[test]
    fn test_create_rejects_empty_strings() {
        let dto: CreatePlayerDto = serde_json::from_value(json!({
            "name": "",
            "position": "Forward",
            "jerseyNumber": "10"
        }))
        .unwrap();
        assert_eq!(messages(&dto), vec!["Name cannot be empty"]);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let dto: CreatePlayerDto = serde_json::from_value(json!({
            "name": "Messi",
            "position": "Forward",
            "jerseyNumber": "10",
            "nickname": "La Pulga"
        }))
        .unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_allows_partial_body() {
        let dto: UpdatePlayerDto = serde_json::from_value(json!({"position": "Winger"})).unwrap();
        assert!(dto.validate().is_ok());

        let mut details = PlayerDetails::new(
            NewPlayer {
                name: "Hazard".into(),
                position: "Midfielder".into(),
                jersey_number: "7".into(),
            },
            Utc::now(),
        );
        details.apply(dto.into());
        assert_eq!(details.name, "Hazard");
        assert_eq!(details.position, "Winger");
    }

    #[test]
    fn test_update_rejects_empty_strings() {
        let dto: UpdatePlayerDto = serde_json::from_value(json!({"jerseyNumber": ""})).unwrap();
        assert_eq!(messages(&dto), vec!["Jersey Number cannot be empty"]);
    }

    #[test]
    fn test_blank_id_rejected() {
        let params = PlayerIdParams { id: "  ".into() };
        assert_eq!(messages(&params), vec!["Player ID cannot be empty"]);
    }

    #[test]
    fn test_player_serializes_flat() {
        let player = Player {
            id: "p1".into(),
            details: PlayerDetails::new(
                NewPlayer {
                    name: "Messi".into(),
                    position: "Forward".into(),
                    jersey_number: "10".into(),
                },
                Utc::now(),
            ),
        };

        let value = serde_json::to_value(&player).unwrap();
        assert_eq!(value["id"], "p1");
        assert_eq!(value["jerseyNumber"], "10");
        assert!(value["registrationId"].is_string());
    }
}
