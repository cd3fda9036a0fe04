// Service exports
pub mod mock;
pub mod sample;
pub mod search;
pub mod suggestions;

pub use mock::MockApi;
pub use sample::sample_records;
pub use search::{RecordSource, SearchService};
pub use suggestions::{NetworkError, SuggestionsClient};
