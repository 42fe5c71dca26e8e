//! The two views of the catalog and their HTML rendering
//!
//! Views hold state and expose explicit event handlers; `render()` turns the
//! current state into a plain snapshot, which [`render::Renderer`] turns into
//! HTML. Nothing here knows about HTTP.

pub mod detail;
pub mod list;
pub mod render;

pub use detail::{DetailSnapshot, DetailState, DetailView, ImageChoice};
pub use list::{BeerSummary, ListSnapshot, ListView};
pub use render::Renderer;

/// First path segment of detail page links
pub const DETAIL_PREFIX: &str = "beer";

/// Link to the detail page of `beer_id`
pub fn detail_path(beer_id: &str) -> String {
    format!("/{}/{}", DETAIL_PREFIX, beer_id)
}

/// URL of an image below the data root
pub(crate) fn data_url(prefix: &str, image_ref: &str) -> String {
    format!("{}{}", prefix, image_ref.trim_start_matches('/'))
}
