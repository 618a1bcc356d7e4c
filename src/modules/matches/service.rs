use matchday_core::AppError;
use matchday_db::DocumentStore;
use matchday_models::matches::COLLECTION;
use matchday_models::{ListQuery, Match, MatchChanges, MatchDetails, NewMatch};
use tracing::instrument;

use crate::utils::documents::{from_document, not_found, store_error, to_document};

const ENTITY: &str = "Match";

pub struct MatchService;

impl MatchService {
    #[instrument(skip(store))]
    pub async fn get_all_matches(
        store: &dyn DocumentStore,
        query: &ListQuery,
    ) -> Result<Vec<Match>, AppError> {
        let docs = store.get_documents(COLLECTION).await?;

        let matches = docs
            .into_iter()
            .map(|doc| from_document(doc).map(|(id, details)| Match { id, details }))
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(query.apply(matches))
    }

    #[instrument(skip(store))]
    pub async fn get_match(store: &dyn DocumentStore, id: &str) -> Result<Match, AppError> {
        let doc = store
            .get_document_by_id(COLLECTION, id)
            .await?
            .ok_or_else(|| not_found(ENTITY, id))?;

        let (id, details) = from_document(doc)?;
        Ok(Match { id, details })
    }

    #[instrument(skip(store))]
    pub async fn create_match(store: &dyn DocumentStore, input: NewMatch) -> Result<Match, AppError> {
        let details = MatchDetails::from(input);
        let id = store
            .create_document(COLLECTION, to_document(&details)?)
            .await?;

        Ok(Match { id, details })
    }

    #[instrument(skip(store))]
    pub async fn update_match(
        store: &dyn DocumentStore,
        id: &str,
        changes: MatchChanges,
    ) -> Result<Match, AppError> {
        let mut fixture = Self::get_match(store, id).await?;
        fixture.details.apply(changes);

        store
            .update_document(COLLECTION, id, to_document(&fixture.details)?)
            .await
            .map_err(|err| store_error(err, ENTITY, id))?;

        Ok(fixture)
    }

    #[instrument(skip(store))]
    pub async fn delete_match(store: &dyn DocumentStore, id: &str) -> Result<(), AppError> {
        Self::get_match(store, id).await?;

        store
            .delete_document(COLLECTION, id)
            .await
            .map_err(|err| store_error(err, ENTITY, id))
    }
}
