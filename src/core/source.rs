//! Where the static JSON resources come from

use crate::core::beer::Beer;
use crate::core::error::SourceError;
use async_trait::async_trait;

/// Path of the catalog resource, relative to the data root
pub const CATALOG_RESOURCE: &str = "beers/beers.json";

/// Path of the detail resource for `id`, relative to the data root
///
/// Ids end up in file names and URLs, so only ids made of letters, digits,
/// `-`, `_` and non-leading `.` are accepted.
pub fn detail_resource(id: &str) -> Result<String, SourceError> {
    if !is_valid_id(id) {
        return Err(SourceError::InvalidId { id: id.to_string() });
    }
    Ok(format!("beers/details/{}.json", id))
}

pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('.')
        && id
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Source of catalog data
///
/// Implementations map the two resources of the data layout
/// (`beers/beers.json` and `beers/details/{id}.json`) to an actual transport.
/// Every call is a single-shot fetch: no caching, no retry.
#[async_trait]
pub trait BeerSource: Send + Sync {
    /// Fetch the full catalog
    async fn fetch_catalog(&self) -> Result<Vec<Beer>, SourceError>;

    /// Fetch the full record of one beer
    async fn fetch_details(&self, id: &str) -> Result<Beer, SourceError>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// Decode a JSON payload, naming the resource in the error
pub(crate) fn decode<T: serde::de::DeserializeOwned>(
    resource: &str,
    bytes: &[u8],
) -> Result<T, SourceError> {
    serde_json::from_slice(bytes).map_err(|e| SourceError::Parse {
        resource: resource.to_string(),
        message: e.to_string(),
    })
}
