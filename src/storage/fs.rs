//! Data source reading the static data directory directly

use crate::core::beer::Beer;
use crate::core::error::SourceError;
use crate::core::source::{BeerSource, CATALOG_RESOURCE, decode, detail_resource};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Reads `beers/beers.json` and `beers/details/{id}.json` below a root directory
///
/// The layout is the one the HTTP server exposes under `/data`, so the same
/// directory can be served and read without going through the network.
#[derive(Debug, Clone)]
pub struct StaticDirSource {
    root: PathBuf,
}

impl StaticDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn read(&self, resource: &str) -> Result<Vec<u8>, SourceError> {
        let path = self.root.join(resource);
        tokio::fs::read(&path).await.map_err(|e| SourceError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl BeerSource for StaticDirSource {
    async fn fetch_catalog(&self) -> Result<Vec<Beer>, SourceError> {
        let bytes = self.read(CATALOG_RESOURCE).await?;
        decode(CATALOG_RESOURCE, &bytes)
    }

    async fn fetch_details(&self, id: &str) -> Result<Beer, SourceError> {
        let resource = detail_resource(id)?;
        let bytes = self.read(&resource).await?;
        decode(&resource, &bytes)
    }

    fn describe(&self) -> String {
        format!("dir:{}", self.root.display())
    }
}
