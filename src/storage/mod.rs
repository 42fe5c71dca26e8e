//! Catalog storage and the data sources it is loaded from

pub mod catalog;
pub mod fs;
pub mod http;

pub use catalog::CatalogStore;
pub use fs::StaticDirSource;
pub use http::HttpBeerSource;
