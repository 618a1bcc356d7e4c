use std::sync::Arc;
use std::time::Instant;

use matchday_auth::{IdentityProvider, JwtIdentityProvider};
use matchday_config::{CorsConfig, JwtConfig, StoreConfig};
use matchday_db::{DocumentStore, StoreError, connect_store};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub identity: Arc<dyn IdentityProvider>,
    pub cors_config: CorsConfig,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            store,
            identity,
            cors_config,
            started_at: Instant::now(),
        }
    }
}

pub async fn init_app_state() -> Result<AppState, StoreError> {
    let store = connect_store(&StoreConfig::from_env()).await?;
    let identity = Arc::new(JwtIdentityProvider::new(&JwtConfig::from_env()));

    Ok(AppState::new(store, identity, CorsConfig::from_env()))
}
