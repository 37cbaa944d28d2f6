use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::UserStore;
use crate::services::TokenService;
use crate::utils::Config;

// Using type aliases to improve readability!
pub type UserStoreType = Arc<RwLock<dyn UserStore>>;
pub type TokenServiceType = Arc<TokenService>;
pub type ConfigType = Arc<Config>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub token_service: TokenServiceType,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        token_service: TokenServiceType,
        config: ConfigType,
    ) -> Self {
        Self {
            user_store,
            token_service,
            config,
        }
    }

    /// Builds the token service from `config`'s secret and TTL.
    pub fn from_config(config: Config, user_store: UserStoreType) -> Self {
        let token_service = Arc::new(TokenService::new(&config));
        Self::new(user_store, token_service, Arc::new(config))
    }
}
