//! PostgreSQL [`DocumentStore`] backend.
//!
//! Documents live in a single `documents` table keyed by
//! `(collection, id)` with their fields in a JSONB column. Updates use the
//! JSONB `||` operator so only supplied keys are replaced.

use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;
use tracing::instrument;

use crate::store::{Document, DocumentStore, StoreError, StoreFuture, StoredDocument, new_document_id};

#[derive(Clone, Debug)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }
}

fn into_stored(collection: &str, id: String, data: Value) -> Result<StoredDocument, StoreError> {
    match data {
        Value::Object(data) => Ok(StoredDocument { id, data }),
        _ => Err(StoreError::Malformed {
            collection: collection.to_string(),
            id,
        }),
    }
}

impl DocumentStore for PgDocumentStore {
    #[instrument(skip(self, fields))]
    fn create_document<'a>(
        &'a self,
        collection: &'a str,
        fields: Document,
    ) -> StoreFuture<'a, String> {
        Box::pin(async move {
            let id = new_document_id();

            sqlx::query("INSERT INTO documents (collection, id, data) VALUES ($1, $2, $3)")
                .bind(collection)
                .bind(&id)
                .bind(Json(Value::Object(fields)))
                .execute(&self.pool)
                .await?;

            Ok(id)
        })
    }

    #[instrument(skip(self))]
    fn get_documents<'a>(&'a self, collection: &'a str) -> StoreFuture<'a, Vec<StoredDocument>> {
        Box::pin(async move {
            let rows = sqlx::query_as::<_, (String, Json<Value>)>(
                r#"SELECT id, data FROM documents
                   WHERE collection = $1
                   ORDER BY created_at, id"#,
            )
            .bind(collection)
            .fetch_all(&self.pool)
            .await?;

            rows.into_iter()
                .map(|(id, Json(data))| into_stored(collection, id, data))
                .collect::<Result<Vec<_>, StoreError>>()
        })
    }

    #[instrument(skip(self))]
    fn get_document_by_id<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
    ) -> StoreFuture<'a, Option<StoredDocument>> {
        Box::pin(async move {
            let row = sqlx::query_as::<_, (String, Json<Value>)>(
                "SELECT id, data FROM documents WHERE collection = $1 AND id = $2",
            )
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

            row.map(|(id, Json(data))| into_stored(collection, id, data))
                .transpose()
        })
    }

    #[instrument(skip(self, fields))]
    fn update_document<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
        fields: Document,
    ) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            let result = sqlx::query(
                r#"UPDATE documents
                   SET data = data || $3, updated_at = NOW()
                   WHERE collection = $1 AND id = $2"#,
            )
            .bind(collection)
            .bind(id)
            .bind(Json(Value::Object(fields)))
            .execute(&self.pool)
            .await?;

            if result.rows_affected() == 0 {
                return Err(StoreError::not_found(collection, id));
            }
            Ok(())
        })
    }

    #[instrument(skip(self))]
    fn delete_document<'a>(&'a self, collection: &'a str, id: &'a str) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
                .bind(collection)
                .bind(id)
                .execute(&self.pool)
                .await?;

            if result.rows_affected() == 0 {
                return Err(StoreError::not_found(collection, id));
            }
            Ok(())
        })
    }

    #[instrument(skip(self, fields))]
    fn set_document<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
        fields: Document,
    ) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            sqlx::query(
                r#"INSERT INTO documents (collection, id, data)
                   VALUES ($1, $2, $3)
                   ON CONFLICT (collection, id)
                   DO UPDATE SET data = documents.data || EXCLUDED.data, updated_at = NOW()"#,
            )
            .bind(collection)
            .bind(id)
            .bind(Json(Value::Object(fields)))
            .execute(&self.pool)
            .await?;

            Ok(())
        })
    }
}
