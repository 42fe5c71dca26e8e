//! `beer-catalog [config.yaml]`
//!
//! Serves the data directory and the catalog pages. Without a config file
//! the defaults apply: listen on 127.0.0.1:3000, serve and read `./data`.

use beers::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("beers=info,beer_catalog=info,tower_http=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_yaml_file(&path)?,
        None => AppConfig::default_config(),
    };

    tracing::info!(
        data_dir = %config.data_dir.display(),
        source_url = config.source_url.as_deref().unwrap_or("-"),
        search_mode = ?config.search_mode,
        "Starting beer catalog"
    );

    ServerBuilder::new().with_config(config).serve().await
}
