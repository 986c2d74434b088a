// src/application/state.rs

use crate::config::AppConfig;
use crate::services::CatalogService;

/// Application state shared by every menu command.
/// The service is built by `app::bootstrap` and handed over here.
pub struct AppState {
    pub config: AppConfig,
    pub catalog_service: CatalogService,
}

impl AppState {
    pub fn new(config: AppConfig, catalog_service: CatalogService) -> Self {
        Self {
            config,
            catalog_service,
        }
    }
}
