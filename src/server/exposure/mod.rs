//! Exposures of the application host
//!
//! The host is transport-agnostic; an exposure turns it into something a
//! client can reach. The only exposure is the HTTP one, which serves the
//! static data files and renders the views as HTML pages.

pub mod rest;

pub use rest::RestExposure;
