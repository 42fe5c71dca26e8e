//! In-memory catalog store
//!
//! The store holds an ordered snapshot of the catalog. It starts from the
//! bundled list and is only ever replaced as a whole: a reload either swaps
//! in the fetched catalog or leaves the previous content untouched.

use crate::core::beer::{Beer, bundled_beers};
use crate::core::error::SourceError;
use crate::core::source::BeerSource;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared, cheaply cloneable handle on the catalog
#[derive(Clone, Debug)]
pub struct CatalogStore {
    beers: Arc<RwLock<Vec<Beer>>>,
}

impl CatalogStore {
    /// Create a store holding `beers`
    pub fn new(beers: Vec<Beer>) -> Self {
        Self {
            beers: Arc::new(RwLock::new(beers)),
        }
    }

    /// Create a store holding the bundled sample list
    pub fn bundled() -> Self {
        Self::new(bundled_beers())
    }

    /// Current content, in catalog order
    pub fn snapshot(&self) -> Vec<Beer> {
        // Content is only ever swapped whole, so a poisoned lock still holds a full catalog
        self.beers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the content wholesale
    pub fn replace(&self, beers: Vec<Beer>) {
        let mut guard = self.beers.write().unwrap_or_else(PoisonError::into_inner);
        *guard = beers;
    }

    /// Find a beer by id
    pub fn get(&self, id: &str) -> Option<Beer> {
        self.beers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|beer| beer.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.beers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch the catalog from `source` and replace the content with it
    ///
    /// On failure the previous content is kept and the error is logged;
    /// the error is still returned for callers that care.
    pub async fn load(&self, source: &dyn BeerSource) -> Result<Vec<Beer>, SourceError> {
        match source.fetch_catalog().await {
            Ok(beers) => {
                tracing::info!(
                    source = %source.describe(),
                    count = beers.len(),
                    "Catalog loaded"
                );
                self.replace(beers.clone());
                Ok(beers)
            }
            Err(e) => {
                tracing::warn!(
                    source = %source.describe(),
                    error = %e,
                    "Catalog fetch failed, keeping previous content"
                );
                Err(e)
            }
        }
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::bundled()
    }
}
