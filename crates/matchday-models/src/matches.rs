use chrono::{DateTime, Utc};
use matchday_core::FieldError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::schema::{optional_date, require, require_date, validate_date, validate_not_blank};

pub const COLLECTION: &str = "matches";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchDetails {
    #[serde(rename = "currentGame")]
    pub current_game: String,
    #[serde(rename = "upcomingMatch")]
    pub upcoming_match: String,
    pub location: String,
    pub formation: String,
    #[serde(rename = "matchDate")]
    pub match_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Match {
    pub id: String,
    #[serde(flatten)]
    pub details: MatchDetails,
}

impl From<NewMatch> for MatchDetails {
    fn from(input: NewMatch) -> Self {
        Self {
            current_game: input.current_game,
            upcoming_match: input.upcoming_match,
            location: input.location,
            formation: input.formation,
            match_date: input.match_date,
        }
    }
}

impl MatchDetails {
    pub fn apply(&mut self, changes: MatchChanges) {
        if let Some(current_game) = changes.current_game {
            self.current_game = current_game;
        }
        if let Some(upcoming_match) = changes.upcoming_match {
            self.upcoming_match = upcoming_match;
        }
        if let Some(location) = changes.location {
            self.location = location;
        }
        if let Some(formation) = changes.formation {
            self.formation = formation;
        }
        if let Some(match_date) = changes.match_date {
            self.match_date = match_date;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateMatchDto {
    #[serde(rename = "currentGame")]
    #[validate(
        required(message = "Current Game is required"),
        length(min = 1, message = "Current Game cannot be empty")
    )]
    #[schema(example = "Arsenal vs Chelsea")]
    pub current_game: Option<String>,

    #[serde(rename = "upcomingMatch")]
    #[validate(
        required(message = "Upcoming Match is required"),
        length(min = 1, message = "Upcoming Match cannot be empty")
    )]
    #[schema(example = "Liverpool vs Everton")]
    pub upcoming_match: Option<String>,

    #[validate(
        required(message = "Location is required"),
        length(min = 1, message = "Location cannot be empty")
    )]
    #[schema(example = "Emirates Stadium")]
    pub location: Option<String>,

    #[validate(
        required(message = "Formation is required"),
        length(min = 1, message = "Formation cannot be empty")
    )]
    #[schema(example = "4-3-3")]
    pub formation: Option<String>,

    /// RFC 3339 timestamp, `YYYY-MM-DD`, or epoch milliseconds
    #[serde(rename = "matchDate")]
    #[validate(
        required(message = "Match Date is required"),
        custom(function = "validate_date", message = "Match Date must be a valid date")
    )]
    #[schema(value_type = Option<String>, format = DateTime, example = "2025-06-01T18:00:00Z")]
    pub match_date: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateMatchDto {
    #[serde(rename = "currentGame")]
    #[validate(length(min = 1, message = "Current Game cannot be empty"))]
    pub current_game: Option<String>,

    #[serde(rename = "upcomingMatch")]
    #[validate(length(min = 1, message = "Upcoming Match cannot be empty"))]
    pub upcoming_match: Option<String>,

    #[validate(length(min = 1, message = "Location cannot be empty"))]
    pub location: Option<String>,

    #[validate(length(min = 1, message = "Formation cannot be empty"))]
    pub formation: Option<String>,

    #[serde(rename = "matchDate")]
    #[validate(custom(function = "validate_date", message = "Match Date must be a valid date"))]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub match_date: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct MatchIdParams {
    /// Match ID
    #[validate(custom(function = "validate_not_blank", message = "Match ID cannot be empty"))]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMatch {
    pub current_game: String,
    pub upcoming_match: String,
    pub location: String,
    pub formation: String,
    pub match_date: DateTime<Utc>,
}

impl TryFrom<CreateMatchDto> for NewMatch {
    type Error = FieldError;

    fn try_from(dto: CreateMatchDto) -> Result<Self, Self::Error> {
        Ok(Self {
            current_game: require(dto.current_game, "currentGame", "Current Game")?,
            upcoming_match: require(dto.upcoming_match, "upcomingMatch", "Upcoming Match")?,
            location: require(dto.location, "location", "Location")?,
            formation: require(dto.formation, "formation", "Formation")?,
            match_date: require_date(dto.match_date, "matchDate", "Match Date")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchChanges {
    pub current_game: Option<String>,
    pub upcoming_match: Option<String>,
    pub location: Option<String>,
    pub formation: Option<String>,
    pub match_date: Option<DateTime<Utc>>,
}

impl TryFrom<UpdateMatchDto> for MatchChanges {
    type Error = FieldError;

    fn try_from(dto: UpdateMatchDto) -> Result<Self, Self::Error> {
        Ok(Self {
            current_game: dto.current_game,
            upcoming_match: dto.upcoming_match,
            location: dto.location,
            formation: dto.formation,
            match_date: optional_date(dto.match_date, "matchDate", "Match Date")?,
        })
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

    fn valid_body() -> Value {
        json!({
            "currentGame": "Arsenal vs Chelsea",
            "upcomingMatch": "Liverpool vs Everton",
            "location": "Emirates Stadium",
            "formation": "4-3-3",
            "matchDate": "2025-06-01T18:00:00Z"
        })
    }

    #[test]
    fn test_valid_create() {
        let dto: CreateMatchDto = serde_json::from_value(valid_body()).unwrap();
        assert!(dto.validate().is_ok());

        let input = NewMatch::try_from(dto).unwrap();
        assert_eq!(input.formation, "4-3-3");
        assert_eq!(input.match_date.to_rfc3339(), "2025-06-01T18:00:00+00:00");
    }

    #[test]
    fn test_missing_date_is_required() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("matchDate");

        let dto: CreateMatchDto = serde_json::from_value(body).unwrap();
        assert_eq!(messages(&dto), vec!["Match Date is required"]);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let mut body = valid_body();
        body["matchDate"] = json!("not-a-date");

        let dto: CreateMatchDto = serde_json::from_value(body).unwrap();
        assert_eq!(messages(&dto), vec!["Match Date must be a valid date"]);
    }

    #[test]
    fn test_empty_body_lists_all_fields() {
        let dto: CreateMatchDto = serde_json::from_value(json!({})).unwrap();
        assert_eq!(messages(&dto).len(), 5);
    }

    #[test]
    fn test_update_date_only() {
        let dto: UpdateMatchDto =
            serde_json::from_value(json!({"matchDate": "2025-07-04"})).unwrap();
        assert!(dto.validate().is_ok());

        let changes = MatchChanges::try_from(dto).unwrap();
        assert!(changes.location.is_none());
        assert_eq!(
            changes.match_date.unwrap().to_rfc3339(),
            "2025-07-04T00:00:00+00:00"
        );
    }

    #[test]
    fn test_update_rejects_empty_location() {
        let dto: UpdateMatchDto = serde_json::from_value(json!({"location": ""})).unwrap();
        assert_eq!(messages(&dto), vec!["Location cannot be empty"]);
    }

    #[test]
    fn test_apply_changes() {
        let dto: CreateMatchDto = serde_json::from_value(valid_body()).unwrap();
        let mut details = MatchDetails::from(NewMatch::try_from(dto).unwrap());

        details.apply(MatchChanges {
            formation: Some("3-5-2".into()),
            ..Default::default()
        });
        assert_eq!(details.formation, "3-5-2");
        assert_eq!(details.location, "Emirates Stadium");
    }
}
