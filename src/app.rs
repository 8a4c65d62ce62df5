// ============================================================================
// APP - Client wiring, built once at startup
// ============================================================================
// One auth store, one API client, the services and the session context.
// Everything is passed explicitly; nothing lives in a global.
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::services::{ApiClient, HttpTransport, Services};
use crate::state::SessionContext;
use crate::stores::AuthStore;
use crate::utils::storage::KeyValueStorage;

pub struct App {
    config: AppConfig,
    store: AuthStore,
    client: ApiClient,
    services: Services,
    session: SessionContext,
}

impl App {
    /// Platform storage and transport
    pub fn new(config: AppConfig) -> Self {
        let store = AuthStore::from_config(&config);
        let client = ApiClient::from_config(&config, store.clone());
        Self::assemble(config, store, client)
    }

    /// Explicit storage and transport (native hosts, tests)
    pub fn with_parts(
        config: AppConfig,
        storage: Rc<dyn KeyValueStorage>,
        transport: Rc<dyn HttpTransport>,
    ) -> Self {
        let store = AuthStore::new(storage, config.storage_key.clone());
        let client = ApiClient::new(&config.api_base_url, transport, store.clone());
        Self::assemble(config, store, client)
    }

    fn assemble(config: AppConfig, store: AuthStore, client: ApiClient) -> Self {
        let services = Services::new(client.clone());
        let session = SessionContext::new(store.clone(), services.auth.clone());
        log::info!("🚀 HRMS client ready ({}, {})", config.api_base_url, config.environment);
        Self { config, store, client, services, session }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &AuthStore {
        &self.store
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }
}
