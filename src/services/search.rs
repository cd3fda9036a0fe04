use crate::core::Ranker;
use crate::models::{Query, RankedResult, Record, RemoteMeta, SearchMeta, SearchResponse, SuggestionsResponse};
use crate::render::{render_error, render_results};
use crate::services::{MockApi, NetworkError, SuggestionsClient};
use std::sync::Arc;
use std::time::Instant;

/// Where the searchable records come from
#[derive(Debug, Clone)]
pub enum RecordSource {
    Mock(MockApi),
    Remote(SuggestionsClient),
}

/// Records handed back by a source, with any metadata the source reported
struct FetchedRecords {
    records: Arc<[Record]>,
    meta: Option<RemoteMeta>,
}

impl RecordSource {
    pub fn name(&self) -> &'static str {
        match self {
            RecordSource::Mock(_) => "mock",
            RecordSource::Remote(_) => "remote",
        }
    }

    async fn fetch(&self, query: &Query) -> Result<FetchedRecords, NetworkError> {
        match self {
            RecordSource::Mock(mock) => Ok(FetchedRecords {
                records: mock.fetch().await,
                meta: None,
            }),
            RecordSource::Remote(client) => {
                let payload = client.fetch(query).await?;
                Ok(FetchedRecords {
                    records: payload.items.into(),
                    meta: payload.meta,
                })
            }
        }
    }
}

/// Search orchestrator
///
/// Fetches records from the configured source, ranks them and renders the
/// result fragment. Network failures are turned into an error fragment
/// instead of being propagated to the page.
#[derive(Debug, Clone)]
pub struct SearchService {
    source: RecordSource,
    ranker: Ranker,
}

impl SearchService {
    pub fn new(source: RecordSource, ranker: Ranker) -> Self {
        Self { source, ranker }
    }

    pub fn source(&self) -> &RecordSource {
        &self.source
    }

    /// Run a search and render it as an HTML fragment with metadata
    pub async fn handle_search(&self, query: &Query) -> SearchResponse {
        match self.search(query).await {
            Ok((results, meta)) => SearchResponse {
                html: render_results(&results),
                meta,
            },
            Err(e) => {
                tracing::error!("Search failed for {:?} via {}: {}", query, self.source.name(), e);
                SearchResponse {
                    html: render_error(&e.to_string()),
                    meta: SearchMeta {
                        count: 0,
                        time_ms: 0,
                        query: query.text.clone(),
                        zipcode: query.location_key.clone(),
                        total: 0,
                        error: true,
                    },
                }
            }
        }
    }

    /// Run a search and return the ranked records
    pub async fn suggestions(&self, query: &Query) -> Result<SuggestionsResponse, NetworkError> {
        let (items, meta) = self.search(query).await?;
        Ok(SuggestionsResponse { items, meta })
    }

    async fn search(&self, query: &Query) -> Result<(Vec<RankedResult>, SearchMeta), NetworkError> {
        let started = Instant::now();

        let fetched = self.source.fetch(query).await?;
        let outcome = self.ranker.rank_with_stats(query, &fetched.records);

        let elapsed_ms = started.elapsed().as_millis() as u64;
        let remote = fetched.meta.unwrap_or_default();

        let meta = SearchMeta {
            count: outcome.results.len(),
            time_ms: remote.time_ms.unwrap_or(elapsed_ms),
            query: remote.query.or_else(|| query.text.clone()),
            zipcode: remote.zipcode.or_else(|| query.location_key.clone()),
            total: remote.total.unwrap_or(outcome.total_records),
            error: false,
        };

        tracing::info!(
            "Returning {} suggestions from {} records in {}ms ({})",
            meta.count,
            outcome.total_records,
            meta.time_ms,
            self.source.name()
        );

        Ok((outcome.results, meta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sample::sample_records;

    fn create_mock_service() -> SearchService {
        SearchService::new(
            RecordSource::Mock(MockApi::instant(sample_records())),
            Ranker::default(),
        )
    }

    #[tokio::test]
    async fn test_handle_search_renders_matches() {
        let service = create_mock_service();
        let response = service.handle_search(&Query::text("coffee")).await;

        assert!(response.html.contains("Cafe Delight"));
        assert!(response.html.contains("Coffee House"));
        assert_eq!(response.meta.count, 2);
        assert_eq!(response.meta.total, 10);
        assert!(!response.meta.error);
    }

    #[tokio::test]
    async fn test_handle_search_empty_query_renders_sentinel() {
        let service = create_mock_service();
        let response = service.handle_search(&Query::default()).await;

        assert!(response.html.contains("No suggestions found"));
        assert_eq!(response.meta.count, 0);
    }

    #[tokio::test]
    async fn test_suggestions_include_distance() {
        let service = create_mock_service();
        let response = service.suggestions(&Query::new("coffee", "10001")).await.unwrap();

        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].record.name, "Cafe Delight");
        assert_eq!(response.items[0].distance_km, Some(0.0));
        assert_eq!(response.meta.zipcode.as_deref(), Some("10001"));
    }
}
