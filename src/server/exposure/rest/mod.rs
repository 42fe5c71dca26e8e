//! HTTP exposure of the application host
//!
//! Produces an Axum `Router` with:
//! - `/data/...`: the static data directory, served as-is
//! - `/health`, `/healthz`: liveness
//! - every other path: an HTML page chosen by the host's route table

pub mod handlers;

use super::super::host::AppHost;
use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// HTTP exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the router from a host
    ///
    /// # Arguments
    ///
    /// * `host` - The application host
    /// * `custom_routes` - Additional routes merged before the page fallback
    pub fn build_router(host: Arc<AppHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let health_routes = Self::health_routes();
        let data_routes = Self::data_routes(&host);
        let page_routes = Router::new()
            .route("/", get(handlers::render_page))
            .fallback(handlers::render_page)
            .with_state(host);

        let mut app = health_routes.merge(data_routes);

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.merge(page_routes))
    }

    /// Static files below the configured data directory
    fn data_routes(host: &AppHost) -> Router {
        let routes = Router::new().nest_service("/data", ServeDir::new(&host.config.data_dir));
        if host.config.cors {
            routes.layer(CorsLayer::permissive())
        } else {
            routes
        }
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "beer-catalog"
        }))
    }
}
