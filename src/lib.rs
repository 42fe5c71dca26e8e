//! # Beer catalog
//!
//! A small catalog browser over static JSON data: a searchable, sortable list
//! of beers and a detail page per beer.
//!
//! ## Features
//!
//! - **Catalog Store**: bundled sample list, replaced wholesale by a fetch of
//!   `beers/beers.json`
//! - **Search**: case-insensitive substring (or regex) match on the name
//! - **Sort**: by name or alcohol content, ascending or descending
//! - **Detail View**: fetches `beers/details/{id}.json`; the last requested
//!   id always wins over slower earlier fetches
//! - **Router**: `/` and unknown paths show the list, `/beer/{id}` the detail
//! - **HTTP**: Axum server serving the data directory and rendered pages
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use beers::prelude::*;
//!
//! let mut list = ListView::new(CatalogStore::bundled());
//! list.on_search_input("dubbel");
//! assert_eq!(list.render().matching_count, 1);
//!
//! let detail = DetailView::new(Arc::new(StaticDirSource::new("data")));
//! detail.set_beer_id("AffligemTripel").await;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod views;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        beer::{Beer, bundled_beers},
        error::{CatalogError, CatalogResult, ConfigError, SourceError},
        query::{
            SearchMode, SearchPattern, SortCriterion, SortKey, compare, filter, matches, sort,
            sorting_criteria,
        },
        source::BeerSource,
    };

    // === Storage ===
    pub use crate::storage::{CatalogStore, HttpBeerSource, StaticDirSource};

    // === Views ===
    pub use crate::views::{
        BeerSummary, DetailSnapshot, DetailState, DetailView, ImageChoice, ListSnapshot,
        ListView, Renderer,
    };

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{AppHost, AppRouter, Route, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
}
