//! Core module: the catalog model, its queries and the data source seam

pub mod beer;
pub mod error;
pub mod query;
pub mod source;

pub use beer::{Beer, bundled_beers};
pub use error::{CatalogError, CatalogResult, ConfigError, SourceError};
pub use query::{SearchMode, SearchPattern, SortCriterion, SortKey, sorting_criteria};
pub use source::BeerSource;
