//! In-process [`DocumentStore`] backend.
//!
//! Keeps collections in memory in insertion order. Used for local runs
//! without a database and by the test suite.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::store::{Document, DocumentStore, StoreError, StoreFuture, StoredDocument, new_document_id};

#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Vec<StoredDocument>>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn create_document<'a>(
        &'a self,
        collection: &'a str,
        fields: Document,
    ) -> StoreFuture<'a, String> {
        Box::pin(async move {
            let id = new_document_id();
            let mut collections = self.collections.write().await;
            collections
                .entry(collection.to_string())
                .or_default()
                .push(StoredDocument {
                    id: id.clone(),
                    data: fields,
                });
            Ok(id)
        })
    }

    fn get_documents<'a>(&'a self, collection: &'a str) -> StoreFuture<'a, Vec<StoredDocument>> {
        Box::pin(async move {
            let collections = self.collections.read().await;
            Ok(collections.get(collection).cloned().unwrap_or_default())
        })
    }

    fn get_document_by_id<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
    ) -> StoreFuture<'a, Option<StoredDocument>> {
        Box::pin(async move {
            let collections = self.collections.read().await;
            Ok(collections
                .get(collection)
                .and_then(|docs| docs.iter().find(|doc| doc.id == id))
                .cloned())
        })
    }

    fn update_document<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
        fields: Document,
    ) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            let mut collections = self.collections.write().await;
            let doc = collections
                .get_mut(collection)
                .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
                .ok_or_else(|| StoreError::not_found(collection, id))?;

            doc.data.extend(fields);
            Ok(())
        })
    }

    fn delete_document<'a>(&'a self, collection: &'a str, id: &'a str) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            let mut collections = self.collections.write().await;
            let docs = collections
                .get_mut(collection)
                .ok_or_else(|| StoreError::not_found(collection, id))?;

            let position = docs
                .iter()
                .position(|doc| doc.id == id)
                .ok_or_else(|| StoreError::not_found(collection, id))?;

            docs.remove(position);
            Ok(())
        })
    }

    fn set_document<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
        fields: Document,
    ) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            let mut collections = self.collections.write().await;
            let docs = collections.entry(collection.to_string()).or_default();

            match docs.iter_mut().find(|doc| doc.id == id) {
                Some(doc) => doc.data.extend(fields),
                None => docs.push(StoredDocument {
                    id: id.to_string(),
                    data: fields,
                }),
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> Document {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = MemoryDocumentStore::new();
        let id = store
            .create_document("players", fields(json!({"name": "Messi"})))
            .await
            .unwrap();

        let doc = store.get_document_by_id("players", &id).await.unwrap().unwrap();
        assert_eq!(doc.id, id);
        assert_eq!(doc.data["name"], "Messi");
    }

    #[tokio::test]
    async fn test_get_documents_preserves_insertion_order() {
        let store = MemoryDocumentStore::new();
        let first = store
            .create_document("matches", fields(json!({"location": "anfield"})))
            .await
            .unwrap();
        let second = store
            .create_document("matches", fields(json!({"location": "bernabeu"})))
            .await
            .unwrap();

        let docs = store.get_documents("matches").await.unwrap();
        let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec![first.as_str(), second.as_str()]);
    }

    #[tokio::test]
    async fn test_get_documents_empty_collection() {
        let store = MemoryDocumentStore::new();
        assert!(store.get_documents("tournaments").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let store = MemoryDocumentStore::new();
        let id = store
            .create_document(
                "players",
                fields(json!({"name": "Hazard", "position": "Midfielder"})),
            )
            .await
            .unwrap();

        store
            .update_document("players", &id, fields(json!({"position": "Forward"})))
            .await
            .unwrap();

        let doc = store.get_document_by_id("players", &id).await.unwrap().unwrap();
        assert_eq!(doc.data["name"], "Hazard");
        assert_eq!(doc.data["position"], "Forward");
    }

    #[tokio::test]
    async fn test_update_missing_document() {
        let store = MemoryDocumentStore::new();
        let result = store
            .update_document("players", "missing", Document::new())
            .await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let store = MemoryDocumentStore::new();
        let id = store
            .create_document("players", Document::new())
            .await
            .unwrap();

        store.delete_document("players", &id).await.unwrap();
        let second = store.delete_document("players", &id).await;
        assert!(matches!(second, Err(StoreError::NotFound { .. })));
        assert!(store.get_document_by_id("players", &id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_document_upserts() {
        let store = MemoryDocumentStore::new();
        store
            .set_document("users", "uid-1", fields(json!({"role": "manager"})))
            .await
            .unwrap();
        store
            .set_document("users", "uid-1", fields(json!({"role": "admin"})))
            .await
            .unwrap();

        let docs = store.get_documents("users").await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].data["role"], "admin");
    }
}
