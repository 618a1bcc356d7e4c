//! Conversions between typed records and store documents.

use matchday_core::AppError;
use matchday_db::{Document, StoreError, StoredDocument};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Serializes a record body into the field map handed to the store.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document, AppError> {
    match serde_json::to_value(value)? {
        Value::Object(fields) => Ok(fields),
        other => Err(AppError::internal(anyhow::anyhow!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

/// Decodes the fields of a stored document, returning them with the id.
pub fn from_document<T: DeserializeOwned>(doc: StoredDocument) -> Result<(String, T), AppError> {
    let fields = serde_json::from_value(Value::Object(doc.data))?;
    Ok((doc.id, fields))
}

/// Maps a store failure for `entity` `id` onto the client-facing taxonomy.
/// Only a missing document is reported as such; anything else stays an
/// unknown error with the store error kept as its cause.
pub fn store_error(err: StoreError, entity: &str, id: &str) -> AppError {
    match err {
        StoreError::NotFound { .. } => not_found(entity, id),
        other => AppError::from(other),
    }
}

pub fn not_found(entity: &str, id: &str) -> AppError {
    AppError::not_found(format!("{} with ID {} not found", entity, id))
}
