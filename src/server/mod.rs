//! Server module: composition root, route table and HTTP exposure
//!
//! This module provides a `ServerBuilder` that assembles the host and
//! exposes it over HTTP:
//! - static data files under `/data`
//! - the list page at `/`, detail pages at `/beer/{id}`
//! - health routes

pub mod builder;
pub mod exposure;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use host::AppHost;
pub use router::{AppRouter, Route};
