//! Document store abstraction.
//!
//! Services never talk to a database driver directly; they go through the
//! [`DocumentStore`] trait, which exposes the handful of primitives a managed
//! document database offers. Backends can be swapped without touching
//! business logic.
//!
//! # Example
//!
//! ```ignore
//! use matchday_db::{DocumentStore, MemoryDocumentStore};
//! use serde_json::{Map, json};
//!
//! let store = MemoryDocumentStore::new();
//!
//! let mut fields = Map::new();
//! fields.insert("name".into(), json!("Messi"));
//!
//! let id = store.create_document("players", fields).await?;
//! let doc = store.get_document_by_id("players", &id).await?;
//! ```

use std::future::Future;
use std::pin::Pin;

use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

/// Field map of a single document, without its id.
pub type Document = Map<String, Value>;

/// Boxed future returned by every [`DocumentStore`] operation.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send + 'a>>;

/// A document read back from the store together with its id.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub data: Document,
}

/// Error type for document store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The addressed document does not exist.
    #[error("document {collection}/{id} not found")]
    NotFound { collection: String, id: String },

    /// A stored row could not be read back as a JSON object.
    #[error("document {collection}/{id} is not a JSON object")]
    Malformed { collection: String, id: String },

    /// Failure reported by the database driver.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Schema migration failed at startup.
    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    pub fn not_found(collection: &str, id: &str) -> Self {
        Self::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }
}

/// Primitive operations of the external document database.
///
/// There are no transactions and no compare-and-swap: callers that read and
/// then write the same document may race with other requests, and the last
/// write wins.
pub trait DocumentStore: Send + Sync {
    /// Inserts a new document under a freshly generated id and returns that id.
    fn create_document<'a>(&'a self, collection: &'a str, fields: Document)
    -> StoreFuture<'a, String>;

    /// Lists every document in a collection, oldest first.
    fn get_documents<'a>(&'a self, collection: &'a str) -> StoreFuture<'a, Vec<StoredDocument>>;

    /// Fetches a single document, `None` when it does not exist.
    fn get_document_by_id<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
    ) -> StoreFuture<'a, Option<StoredDocument>>;

    /// Merges `fields` into an existing document.
    ///
    /// Returns [`StoreError::NotFound`] if the document does not exist.
    fn update_document<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
        fields: Document,
    ) -> StoreFuture<'a, ()>;

    /// Removes a document.
    ///
    /// Returns [`StoreError::NotFound`] if the document does not exist.
    fn delete_document<'a>(&'a self, collection: &'a str, id: &'a str) -> StoreFuture<'a, ()>;

    /// Creates the document under the given id or merges `fields` into it.
    fn set_document<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
        fields: Document,
    ) -> StoreFuture<'a, ()>;
}

/// Generates an opaque document id. Ids are random and never reused.
pub fn new_document_id() -> String {
    Uuid::new_v4().simple().to_string()
}
