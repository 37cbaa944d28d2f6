use std::sync::Arc;

use crate::services::TokenVerifier;
use crate::utils::Config;

pub type TokenVerifierType = Arc<dyn TokenVerifier>;
pub type ConfigType = Arc<Config>;

#[derive(Clone)]
pub struct AppState {
    pub verifier: TokenVerifierType,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(verifier: TokenVerifierType, config: ConfigType) -> Self {
        Self { verifier, config }
    }
}
