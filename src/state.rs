use std::sync::Arc;

use crate::auth::{CredentialVerifier, JwtError, JwtKeys, StaticCredentials};
use crate::config::AppConfig;
use crate::database::ProductStore;
use crate::services::ProductService;

/// Shared handler state, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub products: ProductService,
    pub jwt: Arc<JwtKeys>,
    pub credentials: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// Wire the configured signing keys and credential check around `store`
    pub fn new(config: AppConfig, store: Arc<dyn ProductStore>) -> Result<Self, JwtError> {
        let jwt = JwtKeys::from_config(&config.security)?;
        let credentials = StaticCredentials::from_config(&config.security);

        Ok(Self {
            config: Arc::new(config),
            products: ProductService::new(store),
            jwt: Arc::new(jwt),
            credentials: Arc::new(credentials),
        })
    }

    pub fn with_credentials(mut self, credentials: Arc<dyn CredentialVerifier>) -> Self {
        self.credentials = credentials;
        self
    }
}
