use chrono::Utc;
use matchday_core::AppError;
use matchday_db::DocumentStore;
use matchday_models::users::COLLECTION;
use matchday_models::{SetRole, UserRoleDetails, UserRoleRecord};
use tracing::instrument;

use crate::utils::documents::{from_document, not_found, to_document};

const ENTITY: &str = "User";

pub struct UserService;

impl UserService {
    /// Records a role assignment for `uid`. Tokens issued by the identity
    /// provider after this call are expected to carry the new role.
    #[instrument(skip(store))]
    pub async fn set_role(
        store: &dyn DocumentStore,
        input: SetRole,
    ) -> Result<UserRoleRecord, AppError> {
        let details = UserRoleDetails {
            role: input.role,
            updated_at: Utc::now(),
        };

        store
            .set_document(COLLECTION, &input.uid, to_document(&details)?)
            .await?;

        tracing::info!(uid = %input.uid, role = %input.role, "Role assignment recorded");

        Ok(UserRoleRecord {
            uid: input.uid,
            details,
        })
    }

    #[instrument(skip(store))]
    pub async fn get_role(store: &dyn DocumentStore, uid: &str) -> Result<UserRoleRecord, AppError> {
        let doc = store
            .get_document_by_id(COLLECTION, uid)
            .await?
            .ok_or_else(|| not_found(ENTITY, uid))?;

        let (uid, details) = from_document(doc)?;
        Ok(UserRoleRecord { uid, details })
    }
}
