//! Client-side route table
//!
//! Maps a URL path to the view that should be shown. The mapping is total:
//! every path resolves to some view, unknown ones to the list.

use crate::views;

/// View selected for a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The searchable list
    List,

    /// The detail page of one beer
    Detail { beer_id: String },
}

/// Route table owned by the application host
///
/// - `/` → [`Route::List`]
/// - `/beer/{id}` → [`Route::Detail`] (`/item/{id}` is accepted as well)
/// - anything else → [`Route::List`]
#[derive(Debug, Clone)]
pub struct AppRouter {
    detail_prefixes: Vec<String>,
}

impl AppRouter {
    /// Prefix of the canonical detail paths, the one views link to
    pub const DETAIL_PREFIX: &'static str = views::DETAIL_PREFIX;

    pub fn new() -> Self {
        Self {
            detail_prefixes: vec![Self::DETAIL_PREFIX.to_string(), "item".to_string()],
        }
    }

    /// Canonical path of the detail page for `beer_id`
    pub fn detail_path(beer_id: &str) -> String {
        views::detail_path(beer_id)
    }

    /// Resolve a path (without query string) to a route
    pub fn resolve(&self, path: &str) -> Route {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Route::List;
        }

        let mut segments = trimmed.split('/');
        if let (Some(prefix), Some(beer_id), None) =
            (segments.next(), segments.next(), segments.next())
        {
            if !beer_id.is_empty() && self.detail_prefixes.iter().any(|p| p == prefix) {
                return Route::Detail {
                    beer_id: beer_id.to_string(),
                };
            }
        }

        tracing::debug!(path = %path, "No route matched, falling back to the list");
        Route::List
    }
}

impl Default for AppRouter {
    fn default() -> Self {
        Self::new()
    }
}
