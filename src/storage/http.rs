//! Data source fetching the static JSON resources over HTTP

use crate::core::beer::Beer;
use crate::core::error::SourceError;
use crate::core::source::{BeerSource, CATALOG_RESOURCE, decode, detail_resource};
use async_trait::async_trait;

/// Plain HTTP GET against a data root such as `http://localhost:3000/data/`
///
/// No timeout beyond the client's defaults and no retry.
#[derive(Debug, Clone)]
pub struct HttpBeerSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBeerSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Use an existing client, e.g. one with custom headers
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a resource below the data root
    pub fn url_for(&self, resource: &str) -> String {
        format!("{}{}", self.base_url, resource)
    }

    async fn get(&self, resource: &str) -> Result<Vec<u8>, SourceError> {
        let url = self.url_for(resource);
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Network {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| SourceError::Network {
            url: url.clone(),
            message: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl BeerSource for HttpBeerSource {
    async fn fetch_catalog(&self) -> Result<Vec<Beer>, SourceError> {
        let bytes = self.get(CATALOG_RESOURCE).await?;
        decode(CATALOG_RESOURCE, &bytes)
    }

    async fn fetch_details(&self, id: &str) -> Result<Beer, SourceError> {
        let resource = detail_resource(id)?;
        let bytes = self.get(&resource).await?;
        decode(&resource, &bytes)
    }

    fn describe(&self) -> String {
        format!("http:{}", self.base_url)
    }
}
