//! Cinescope - movie browsing and seat booking over a remote catalog
//!
//! This library provides the core pieces shared by the cine-* tools: a
//! client for the third-party movie catalog API, reducer-based state
//! containers for browsing results, the seat-map pricing model, and
//! trailer resolution. There is no backend of its own; everything is
//! fetched remotely or held in memory, and the booking flow is a
//! client-side mock.

pub mod booking;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod state;
pub mod trailer;
pub mod types;

// Re-export commonly used types
pub use catalog::{CatalogClient, CatalogSource};
pub use config::Config;
pub use error::{CatalogError, CinescopeError, Result};
pub use types::{Genre, GenreTile, Movie, MovieCategory, MovieDetails, Page, Video};
