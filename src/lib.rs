// ============================================================================
// HRMS CLIENT - Authenticated API client for the HRMS suite
// ============================================================================
// - Stores: persisted session snapshot + auth signals
// - Services: request core (bearer auth, envelope, refresh-on-401) and
//   typed wrappers per backend module
// - State: reactive session context for the UI
// - Models: wire types shared with the backend
// ============================================================================

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;

pub use app::App;
pub use config::{AppConfig, CONFIG};
pub use error::{ApiError, ApiResult, ErrorKind};
pub use models::{ApiPayload, Page, Pagination, SessionSnapshot, SessionTokens, SessionUser};
pub use services::{ApiClient, RequestOptions, Services};
pub use state::{SessionContext, SessionState};
pub use stores::{AuthEvent, AuthStore};

/// Installs the browser logger and panic hook
#[cfg(target_arch = "wasm32")]
pub fn init_logging(config: &AppConfig) {
    console_error_panic_hook::set_once();
    if config.is_logging_enabled() {
        let level = if config.is_production() { log::Level::Info } else { log::Level::Debug };
        wasm_logger::init(wasm_logger::Config::new(level));
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    init_logging(&CONFIG);
    log::info!("🚀 HRMS client loaded ({})", CONFIG.api_base_url);
}
