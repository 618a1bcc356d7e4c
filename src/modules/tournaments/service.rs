use matchday_core::AppError;
use matchday_db::DocumentStore;
use matchday_models::tournament::COLLECTION;
use matchday_models::{ListQuery, NewTournament, Tournament, TournamentChanges, TournamentDetails};
use tracing::instrument;

use crate::utils::documents::{from_document, not_found, store_error, to_document};

const ENTITY: &str = "Tournament";

pub struct TournamentService;

impl TournamentService {
    #[instrument(skip(store))]
    pub async fn get_all_tournaments(
        store: &dyn DocumentStore,
        query: &ListQuery,
    ) -> Result<Vec<Tournament>, AppError> {
        let docs = store.get_documents(COLLECTION).await?;

        let tournaments = docs
            .into_iter()
            .map(|doc| from_document(doc).map(|(id, details)| Tournament { id, details }))
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(query.apply(tournaments))
    }

    #[instrument(skip(store))]
    pub async fn get_tournament(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<Tournament, AppError> {
        let doc = store
            .get_document_by_id(COLLECTION, id)
            .await?
            .ok_or_else(|| not_found(ENTITY, id))?;

        let (id, details) = from_document(doc)?;
        Ok(Tournament { id, details })
    }

    #[instrument(skip(store))]
    pub async fn create_tournament(
        store: &dyn DocumentStore,
        input: NewTournament,
    ) -> Result<Tournament, AppError> {
        let details = TournamentDetails::from(input);
        let id = store
            .create_document(COLLECTION, to_document(&details)?)
            .await?;

        Ok(Tournament { id, details })
    }

    #[instrument(skip(store))]
    pub async fn update_tournament(
        store: &dyn DocumentStore,
        id: &str,
        changes: TournamentChanges,
    ) -> Result<Tournament, AppError> {
        let mut tournament = Self::get_tournament(store, id).await?;
        tournament.details.apply(changes);

        store
            .update_document(COLLECTION, id, to_document(&tournament.details)?)
            .await
            .map_err(|err| store_error(err, ENTITY, id))?;

        Ok(tournament)
    }

    #[instrument(skip(store))]
    pub async fn delete_tournament(store: &dyn DocumentStore, id: &str) -> Result<(), AppError> {
        Self::get_tournament(store, id).await?;

        store
            .delete_document(COLLECTION, id)
            .await
            .map_err(|err| store_error(err, ENTITY, id))
    }
}
