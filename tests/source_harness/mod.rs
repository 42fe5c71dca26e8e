//! Shared fixtures for data source and server tests
//!
//! Provides a temporary data directory laid out like `data/` and a helper
//! that serves such a directory over real HTTP on a random local port.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod source_harness;
//! use source_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod contract;

use beers::prelude::*;
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Ids of the fixture catalog, in file order
pub const FIXTURE_IDS: [&str; 4] = [
    "AffligemBlond",
    "AffligemDubbel",
    "AffligemTripel",
    "WestmalleTripel",
];

/// Id whose detail file exists but is not JSON
pub const BROKEN_ID: &str = "Broken";

fn fixture_catalog() -> serde_json::Value {
    json!([
        {
            "alcohol": 6.8,
            "description": "The classic clear blonde abbey ale.",
            "id": "AffligemBlond",
            "img": "img/AffligemBlond.jpg",
            "name": "Affligem Blond"
        },
        {
            "alcohol": 6.8,
            "description": "A reddish-brown abbey ale brewed with dark malts.",
            "id": "AffligemDubbel",
            "img": "img/AffligemDubbel.jpg",
            "name": "Affligem Dubbel"
        },
        {
            "alcohol": 8.5,
            "description": "The king of the abbey beers.",
            "id": "AffligemTripel",
            "img": "img/AffligemTripel.jpg",
            "name": "Affligem Tripel"
        },
        {
            "alcohol": 9.5,
            "description": "The mother of all tripels.",
            "id": "WestmalleTripel",
            "img": "img/WestmalleTripel.jpg",
            "name": "Westmalle Tripel"
        }
    ])
}

fn fixture_details(id: &str) -> serde_json::Value {
    let catalog = fixture_catalog();
    let summary = catalog
        .as_array()
        .and_then(|beers| beers.iter().find(|b| b["id"] == id))
        .cloned()
        .expect("fixture id");

    json!({
        "alcohol": summary["alcohol"],
        "availability": "Year round",
        "brewery": format!("{} Brewery", id),
        "description": summary["description"],
        "id": id,
        "img": format!("beers/img/{}.jpg", id),
        "label": format!("beers/img/{}Label.png", id),
        "name": summary["name"],
        "serving": "Serve in a chalice",
        "style": "Abbey ale"
    })
}

/// Write the fixture data directory
pub fn write_data_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let details = dir.path().join("beers").join("details");
    std::fs::create_dir_all(&details).unwrap();

    std::fs::write(
        dir.path().join("beers").join("beers.json"),
        serde_json::to_vec_pretty(&fixture_catalog()).unwrap(),
    )
    .unwrap();

    for id in FIXTURE_IDS {
        std::fs::write(
            details.join(format!("{}.json", id)),
            serde_json::to_vec_pretty(&fixture_details(id)).unwrap(),
        )
        .unwrap();
    }
    std::fs::write(details.join(format!("{}.json", BROKEN_ID)), b"{ \"id\": ").unwrap();

    dir
}

/// An empty data directory: every fetch fails
pub fn empty_data_dir() -> TempDir {
    tempfile::tempdir().expect("tempdir")
}

/// Config serving and reading `root`
pub fn config_for(root: &Path) -> AppConfig {
    AppConfig {
        data_dir: root.to_path_buf(),
        ..AppConfig::default_config()
    }
}

/// Serve `root` with the catalog server on a random port
///
/// Returns the base URL of the data root, e.g. `http://127.0.0.1:40123/data/`.
pub async fn spawn_data_server(root: &Path) -> String {
    let app = ServerBuilder::new()
        .with_config(config_for(root))
        .build()
        .expect("router");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/data/", addr)
}

/// Fixture directory read directly
pub async fn static_dir_source() -> (TempDir, StaticDirSource) {
    let dir = write_data_dir();
    let source = StaticDirSource::new(dir.path());
    (dir, source)
}

/// Fixture directory fetched over HTTP
pub async fn http_source() -> (TempDir, HttpBeerSource) {
    let dir = write_data_dir();
    let base_url = spawn_data_server(dir.path()).await;
    (dir, HttpBeerSource::new(base_url))
}
