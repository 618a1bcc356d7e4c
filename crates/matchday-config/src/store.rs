//! Document store backend selection.
//!
//! - `STORE_BACKEND`: `postgres` or `memory`. Defaults to `postgres` when
//!   `DATABASE_URL` is set and `memory` otherwise.
//! - `DATABASE_URL`: PostgreSQL connection string
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)

use crate::{env_opt, env_or};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl StoreBackend {
    fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Some(Self::Postgres),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self::resolve(
            env_opt("STORE_BACKEND").as_deref(),
            env_opt("DATABASE_URL"),
            env_or("DATABASE_MAX_CONNECTIONS", 5),
        )
    }

    fn resolve(backend: Option<&str>, database_url: Option<String>, max_connections: u32) -> Self {
        let backend = backend
            .and_then(StoreBackend::parse)
            .unwrap_or(if database_url.is_some() {
                StoreBackend::Postgres
            } else {
                StoreBackend::Memory
            });

        Self {
            backend,
            database_url,
            max_connections,
        }
    }

    /// In-memory configuration, used by tests and local runs.
    pub fn memory() -> Self {
        Self {
            backend: StoreBackend::Memory,
            database_url: None,
            max_connections: 0,
        }
    }
}
