//! # Matchday DB
//!
//! Document persistence for the Matchday API.
//!
//! - [`store`]: the [`DocumentStore`] trait and its error type
//! - [`postgres`]: PostgreSQL JSONB backend built on SQLx
//! - [`memory`]: in-process backend for local runs and tests
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use matchday_config::StoreConfig;
//! use matchday_db::connect_store;
//!
//! let store = connect_store(&StoreConfig::from_env()).await?;
//! let players = store.get_documents("players").await?;
//! ```

use std::sync::Arc;

use matchday_config::{StoreBackend, StoreConfig};
use sqlx::postgres::PgPoolOptions;

pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;
pub use store::{Document, DocumentStore, StoreError, StoreFuture, StoredDocument};

/// Initializes a PostgreSQL connection pool from the store configuration.
///
/// # Errors
///
/// Fails if `DATABASE_URL` is not configured or the connection fails.
pub async fn init_db_pool(config: &StoreConfig) -> Result<sqlx::PgPool, StoreError> {
    let database_url = config
        .database_url
        .as_deref()
        .ok_or(StoreError::Database(sqlx::Error::Configuration(
            "DATABASE_URL must be set for the postgres store".into(),
        )))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Builds the configured document store. Called once at startup; the
/// returned handle is shared by every request.
pub async fn connect_store(config: &StoreConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
    match config.backend {
        StoreBackend::Postgres => {
            let store = PgDocumentStore::new(init_db_pool(config).await?);
            store.migrate().await?;
            tracing::info!("Connected to PostgreSQL document store");
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory document store; data is lost on restart");
            Ok(Arc::new(MemoryDocumentStore::new()))
        }
    }
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
