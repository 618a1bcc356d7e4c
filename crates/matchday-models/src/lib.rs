//! Entity records and request schemas.
//!
//! Each entity module holds three kinds of types:
//!
//! - the stored record (`Player`, `Match`, ...) as returned to clients
//! - request DTOs validated with `validator` before reaching a handler
//! - typed inputs (`NewPlayer`, `PlayerChanges`, ...) built from a DTO
//!   once it has passed validation

pub mod matches;
pub mod player;
pub mod schema;
pub mod tournament;
pub mod users;

pub use matches::{
    CreateMatchDto, Match, MatchChanges, MatchDetails, MatchIdParams, NewMatch, UpdateMatchDto,
};
pub use player::{
    CreatePlayerDto, NewPlayer, Player, PlayerChanges, PlayerDetails, PlayerIdParams,
    UpdatePlayerDto,
};
pub use schema::{ListQuery, parse_date};
pub use tournament::{
    CreateTournamentDto, NewTournament, Tournament, TournamentChanges, TournamentDetails,
    TournamentIdParams, UpdateTournamentDto,
};
pub use users::{SetRole, SetRoleDto, UserIdParams, UserRoleDetails, UserRoleRecord};
