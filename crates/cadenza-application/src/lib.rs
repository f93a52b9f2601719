// SPDX-License-Identifier: GPL-3.0-or-later
use cadenza_catalog::{shared, Catalog, SharedCatalog};
use cadenza_config::AppConfig;
pub mod events;
pub mod service;

pub use events::{EventPublisher, InMemoryEventBus};
pub use service::{CatalogService, PlaylistSummary};

use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub service: CatalogService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_catalog(config, shared(Catalog::new()))
    }

    pub fn with_catalog(config: AppConfig, catalog: SharedCatalog) -> Self {
        Self {
            config,
            service: CatalogService::new(catalog, InMemoryEventBus::new()),
        }
    }

    pub fn on_start(&self) {
        info!(target: "application", "application state initialized");
    }
}
