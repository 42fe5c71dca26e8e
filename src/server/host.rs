//! Application host
//!
//! The host is the composition root: it owns the configuration, the catalog
//! store, the data source, the route table and the renderer, and mounts
//! fresh views over them. It knows nothing about HTTP; exposures such as
//! [`RestExposure`](super::exposure::RestExposure) consume it.

use crate::config::AppConfig;
use crate::core::source::BeerSource;
use crate::server::router::AppRouter;
use crate::storage::{CatalogStore, HttpBeerSource, StaticDirSource};
use crate::views::{DetailView, ListView, Renderer};
use anyhow::Result;
use std::sync::Arc;

/// Host context containing all application state
pub struct AppHost {
    /// Configuration the host was built from
    pub config: Arc<AppConfig>,

    /// Catalog shown by the list view
    pub store: CatalogStore,

    /// Where the list and detail resources are fetched from
    pub source: Arc<dyn BeerSource>,

    /// Route table
    pub router: AppRouter,

    /// HTML renderer
    pub renderer: Renderer,
}

impl AppHost {
    /// Build the host from builder components
    pub fn from_components(
        config: AppConfig,
        store: CatalogStore,
        source: Arc<dyn BeerSource>,
    ) -> Result<Self> {
        let renderer = Renderer::new()?;
        Ok(Self {
            config: Arc::new(config),
            store,
            source,
            router: AppRouter::new(),
            renderer,
        })
    }

    /// Source described by the configuration: HTTP when `source_url` is
    /// set, otherwise the data directory itself
    pub fn source_from_config(config: &AppConfig) -> Arc<dyn BeerSource> {
        match &config.source_url {
            Some(url) => Arc::new(HttpBeerSource::new(url.clone())),
            None => Arc::new(StaticDirSource::new(config.data_dir.clone())),
        }
    }

    /// Mount a list view over the shared store
    pub fn list_view(&self) -> ListView {
        ListView::new(self.store.clone()).with_search_mode(self.config.search_mode)
    }

    /// Mount a detail view over the shared source
    pub fn detail_view(&self) -> DetailView {
        DetailView::new(self.source.clone())
    }
}
