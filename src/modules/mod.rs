//! Feature modules.
//!
//! Each entity module is laid out the same way:
//!
//! - `controller.rs`: HTTP handlers and their OpenAPI annotations
//! - `service.rs`: business logic on top of the document store
//! - `router.rs`: route table and access rules
//!
//! Request and record types live in the `matchday-models` crate.

pub mod health;
pub mod matches;
pub mod players;
pub mod tournaments;
pub mod users;
