// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Location, Query, RankedResult, Record};
pub use requests::SearchRequest;
pub use responses::{ErrorResponse, HealthResponse, RemoteMeta, SearchMeta, SearchResponse, SuggestionsPayload, SuggestionsResponse};
