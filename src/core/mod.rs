// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod ranker;

pub use distance::{haversine_distance, round_km, Coordinate};
pub use filters::{matches_text, resolve_reference};
pub use ranker::{RankOutcome, Ranker, DEFAULT_FALLBACK};
