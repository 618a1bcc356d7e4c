use chrono::{DateTime, Utc};
use matchday_core::FieldError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::schema::{optional_date, require, require_date, validate_date, validate_not_blank};

pub const COLLECTION: &str = "tournaments";

/// Stored tournament fields. The `upcomingTournamnet` wire name is part of
/// the public contract and must not be corrected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TournamentDetails {
    #[serde(rename = "tournamentName")]
    pub tournament_name: String,
    #[serde(rename = "tournamentPosition")]
    pub tournament_position: String,
    #[serde(rename = "upcomingTournamnet")]
    pub upcoming_tournament: String,
    #[serde(rename = "tournamentStart")]
    pub tournament_start: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Tournament {
    pub id: String,
    #[serde(flatten)]
    pub details: TournamentDetails,
}

impl From<NewTournament> for TournamentDetails {
    fn from(input: NewTournament) -> Self {
        Self {
            tournament_name: input.tournament_name,
            tournament_position: input.tournament_position,
            upcoming_tournament: input.upcoming_tournament,
            tournament_start: input.tournament_start,
        }
    }
}

impl TournamentDetails {
    pub fn apply(&mut self, changes: TournamentChanges) {
        if let Some(name) = changes.tournament_name {
            self.tournament_name = name;
        }
        if let Some(position) = changes.tournament_position {
            self.tournament_position = position;
        }
        if let Some(upcoming) = changes.upcoming_tournament {
            self.upcoming_tournament = upcoming;
        }
        if let Some(start) = changes.tournament_start {
            self.tournament_start = start;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateTournamentDto {
    #[serde(rename = "tournamentName")]
    #[validate(
        required(message = "Tournament Name is required"),
        length(min = 1, message = "Tournament Name cannot be empty")
    )]
    #[schema(example = "Champions League")]
    pub tournament_name: Option<String>,

    #[serde(rename = "tournamentPosition")]
    #[validate(
        required(message = "Tournament Position is required"),
        length(min = 1, message = "Tournament Position cannot be empty")
    )]
    #[schema(example = "Quarter Final")]
    pub tournament_position: Option<String>,

    #[serde(rename = "upcomingTournamnet")]
    #[validate(
        required(message = "Upcoming Tournament is required"),
        length(min = 1, message = "Upcoming Tournament cannot be empty")
    )]
    #[schema(example = "Club World Cup")]
    pub upcoming_tournament: Option<String>,

    #[serde(rename = "tournamentStart")]
    #[validate(
        required(message = "Tournament Start Date is required"),
        custom(
            function = "validate_date",
            message = "Tournament Start Date must be a valid date"
        )
    )]
    #[schema(value_type = Option<String>, format = DateTime, example = "2025-09-16")]
    pub tournament_start: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTournamentDto {
    #[serde(rename = "tournamentName")]
    #[validate(length(min = 1, message = "Tournament Name cannot be empty"))]
    pub tournament_name: Option<String>,

    #[serde(rename = "tournamentPosition")]
    #[validate(length(min = 1, message = "Tournament Position cannot be empty"))]
    pub tournament_position: Option<String>,

    #[serde(rename = "upcomingTournamnet")]
    #[validate(length(min = 1, message = "Upcoming Tournament cannot be empty"))]
    pub upcoming_tournament: Option<String>,

    #[serde(rename = "tournamentStart")]
    #[validate(custom(
        function = "validate_date",
        message = "Tournament Start Date must be a valid date"
    ))]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub tournament_start: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct TournamentIdParams {
    /// Tournament ID
    #[validate(custom(
        function = "validate_not_blank",
        message = "Tournament ID cannot be empty"
    ))]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTournament {
    pub tournament_name: String,
    pub tournament_position: String,
    pub upcoming_tournament: String,
    pub tournament_start: DateTime<Utc>,
}

impl TryFrom<CreateTournamentDto> for NewTournament {
    type Error = FieldError;

    fn try_from(dto: CreateTournamentDto) -> Result<Self, Self::Error> {
        Ok(Self {
            tournament_name: require(dto.tournament_name, "tournamentName", "Tournament Name")?,
            tournament_position: require(
                dto.tournament_position,
                "tournamentPosition",
                "Tournament Position",
            )?,
            upcoming_tournament: require(
                dto.upcoming_tournament,
                "upcomingTournamnet",
                "Upcoming Tournament",
            )?,
            tournament_start: require_date(
                dto.tournament_start,
                "tournamentStart",
                "Tournament Start Date",
            )?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TournamentChanges {
    pub tournament_name: Option<String>,
    pub tournament_position: Option<String>,
    pub upcoming_tournament: Option<String>,
    pub tournament_start: Option<DateTime<Utc>>,
}

impl TryFrom<UpdateTournamentDto> for TournamentChanges {
    type Error = FieldError;

    fn try_from(dto: UpdateTournamentDto) -> Result<Self, Self::Error> {
        Ok(Self {
            tournament_name: dto.tournament_name,
            tournament_position: dto.tournament_position,
            upcoming_tournament: dto.upcoming_tournament,
            tournament_start: optional_date(
                dto.tournament_start,
                "tournamentStart",
                "Tournament Start Date",
            )?,
        })
    }
}
