//! Nearby Suggest - location-aware search suggestions
//!
//! This library ranks a record set against a free-text query and an optional
//! location key, then renders the results as HTML fragments for a search box.

pub mod config;
pub mod core;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Ranker, Coordinate, distance::haversine_distance};
pub use models::{Query, Record, Location, RankedResult, SearchResponse};
pub use services::{SearchService, RecordSource, MockApi, SuggestionsClient, NetworkError};
