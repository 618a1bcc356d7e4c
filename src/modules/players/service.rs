use chrono::Utc;
use matchday_core::AppError;
use matchday_db::DocumentStore;
use matchday_models::player::COLLECTION;
use matchday_models::{ListQuery, NewPlayer, Player, PlayerChanges, PlayerDetails};
use tracing::instrument;

use crate::utils::documents::{from_document, not_found, store_error, to_document};

const ENTITY: &str = "Player";

pub struct PlayerService;

impl PlayerService {
    #[instrument(skip(store))]
    pub async fn get_all_players(
        store: &dyn DocumentStore,
        query: &ListQuery,
    ) -> Result<Vec<Player>, AppError> {
        let docs = store.get_documents(COLLECTION).await?;

        let players = docs
            .into_iter()
            .map(|doc| from_document(doc).map(|(id, details)| Player { id, details }))
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(query.apply(players))
    }

    #[instrument(skip(store))]
    pub async fn get_player(store: &dyn DocumentStore, id: &str) -> Result<Player, AppError> {
        let doc = store
            .get_document_by_id(COLLECTION, id)
            .await?
            .ok_or_else(|| not_found(ENTITY, id))?;

        let (id, details) = from_document(doc)?;
        Ok(Player { id, details })
    }

    /// Stores a new player. The id and registration timestamp are assigned
    /// here, never taken from the caller.
    #[instrument(skip(store))]
    pub async fn create_player(
        store: &dyn DocumentStore,
        input: NewPlayer,
    ) -> Result<Player, AppError> {
        let details = PlayerDetails::new(input, Utc::now());
        let id = store
            .create_document(COLLECTION, to_document(&details)?)
            .await?;

        Ok(Player { id, details })
    }

    /// Read-modify-write with no concurrency guard: two concurrent updates
    /// of the same player race and the last write wins.
    #[instrument(skip(store))]
    pub async fn update_player(
        store: &dyn DocumentStore,
        id: &str,
        changes: PlayerChanges,
    ) -> Result<Player, AppError> {
        let mut player = Self::get_player(store, id).await?;
        player.details.apply(changes);

        store
            .update_document(COLLECTION, id, to_document(&player.details)?)
            .await
            .map_err(|err| store_error(err, ENTITY, id))?;

        Ok(player)
    }

    #[instrument(skip(store))]
    pub async fn delete_player(store: &dyn DocumentStore, id: &str) -> Result<(), AppError> {
        Self::get_player(store, id).await?;

        store
            .delete_document(COLLECTION, id)
            .await
            .map_err(|err| store_error(err, ENTITY, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchday_core::ErrorKind;
    use matchday_db::MemoryDocumentStore;

    fn messi() -> NewPlayer {
        NewPlayer {
            name: "Messi".into(),
            position: "Forward".into(),
            jersey_number: "10".into(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamp() {
        let store = MemoryDocumentStore::new();
        let before = Utc::now();

        let player = PlayerService::create_player(&store, messi()).await.unwrap();

        assert!(!player.id.is_empty());
        assert!(player.details.registration_id >= before);
        assert_eq!(player.details.name, "Messi");

        let fetched = PlayerService::get_player(&store, &player.id).await.unwrap();
        assert_eq!(fetched, player);
    }

    #[tokio::test]
    async fn test_list_applies_paging() {
        let store = MemoryDocumentStore::new();
        for name in ["A", "B", "C"] {
            PlayerService::create_player(
                &store,
                NewPlayer {
                    name: name.into(),
                    ..messi()
                },
            )
            .await
            .unwrap();
        }

        let query = ListQuery {
            limit: Some(2),
            offset: Some(1),
        };
        let players = PlayerService::get_all_players(&store, &query).await.unwrap();
        let names: Vec<_> = players.iter().map(|p| p.details.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[tokio::test]
    async fn test_update_changes_only_supplied_fields() {
        let store = MemoryDocumentStore::new();
        let player = PlayerService::create_player(&store, messi()).await.unwrap();

        let updated = PlayerService::update_player(
            &store,
            &player.id,
            PlayerChanges {
                jersey_number: Some("30".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.details.jersey_number, "30");
        assert_eq!(updated.details.name, "Messi");
        assert_eq!(updated.details.registration_id, player.details.registration_id);
    }

    #[tokio::test]
    async fn test_update_missing_player() {
        let store = MemoryDocumentStore::new();
        let err = PlayerService::update_player(&store, "nope", PlayerChanges::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.client_message(), "Player with ID nope not found");
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = MemoryDocumentStore::new();
        let player = PlayerService::create_player(&store, messi()).await.unwrap();

        PlayerService::delete_player(&store, &player.id).await.unwrap();
        let err = PlayerService::delete_player(&store, &player.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
