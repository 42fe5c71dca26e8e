//! Page handlers
//!
//! Each request mounts fresh views on the host, replays the query string
//! onto them as UI events and renders the result.

use crate::core::error::CatalogError;
use crate::core::query::{SortCriterion, SortKey};
use crate::server::host::AppHost;
use crate::server::router::Route;
use crate::views::ImageChoice;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::Html;
use serde::Deserialize;
use std::sync::Arc;

/// Query string of a page request
///
/// List pages read `q` (search box), `sort` (sort select value) and `desc`
/// (descending checkbox, present when checked). Detail pages read `image`
/// (`main` or `secondary` thumbnail).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub desc: Option<String>,
    pub image: Option<String>,
}

impl PageParams {
    /// An HTML checkbox submits `on`; `true` and `1` are accepted for links
    pub fn descending(&self) -> bool {
        matches!(self.desc.as_deref(), Some("on" | "true" | "1"))
    }

    /// Build params from raw key/value pairs; a repeated key keeps its last value
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" => params.q = Some(value),
                "sort" => params.sort = Some(value),
                "desc" => params.desc = Some(value),
                "image" => params.image = Some(value),
                _ => {}
            }
        }
        params
    }

    /// Params of a query string the typed extractor refused
    ///
    /// Falls back to the defaults when the string cannot be decoded at all.
    fn lenient(uri: &Uri, rejection: &QueryRejection) -> Self {
        tracing::debug!(query = ?uri.query(), error = %rejection, "Lenient query string parsing");
        match Query::<Vec<(String, String)>>::try_from_uri(uri) {
            Ok(Query(pairs)) => Self::from_pairs(pairs),
            Err(e) => {
                tracing::warn!(query = ?uri.query(), error = %e, "Ignoring undecodable query string");
                Self::default()
            }
        }
    }

    pub fn image_choice(&self) -> Option<ImageChoice> {
        match self.image.as_deref() {
            Some("main") => Some(ImageChoice::Main),
            Some("secondary") => Some(ImageChoice::Secondary),
            _ => None,
        }
    }
}

/// Render the page the route table selects for the request path
pub async fn render_page(
    State(host): State<Arc<AppHost>>,
    uri: Uri,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Result<Html<String>, CatalogError> {
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => PageParams::lenient(&uri, &rejection),
    };

    let html = match host.router.resolve(uri.path()) {
        Route::List => render_list(&host, &params).await?,
        Route::Detail { beer_id } => render_detail(&host, beer_id, &params).await?,
    };
    Ok(Html(html))
}

async fn render_list(host: &AppHost, params: &PageParams) -> Result<String, CatalogError> {
    let mut view = host.list_view();

    // A failed fetch is logged by the store; the list keeps its previous content
    let _ = view.load(host.source.as_ref()).await;

    if let Some(pattern) = &params.q {
        view.on_search_input(pattern);
    }
    if let Some(value) = &params.sort {
        let label = value
            .parse::<SortKey>()
            .map(|key| SortCriterion::find(key).label)
            .unwrap_or_default();
        view.on_sort_change(value, &label);
    }
    view.on_descending_change(params.descending());

    host.renderer.render_list(&view.render())
}

async fn render_detail(
    host: &AppHost,
    beer_id: String,
    params: &PageParams,
) -> Result<String, CatalogError> {
    let view = host.detail_view();
    view.set_beer_id(beer_id).await;

    if let Some(choice) = params.image_choice() {
        view.select_image(choice);
    }

    host.renderer.render_detail(view.render().as_ref())
}
