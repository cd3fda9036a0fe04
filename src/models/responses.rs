use serde::{Deserialize, Serialize};
use crate::models::domain::{RankedResult, Record};

/// Metadata reported next to a rendered fragment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMeta {
    pub count: usize,
    pub time_ms: u64,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
    pub total: usize,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub error: bool,
}

/// Rendered HTML fragment plus metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub html: String,
    pub meta: SearchMeta,
}

/// Metadata a remote suggestions endpoint may attach to its body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteMeta {
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub time_ms: Option<u64>,
    #[serde(default)]
    pub total: Option<usize>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
}

/// Body returned by the remote suggestions endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestionsPayload {
    #[serde(default)]
    pub items: Vec<Record>,
    #[serde(default)]
    pub meta: Option<RemoteMeta>,
}

/// JSON response for the suggestions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub items: Vec<RankedResult>,
    pub meta: SearchMeta,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub source: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_hides_error_flag_when_false() {
        let meta = SearchMeta {
            count: 2,
            time_ms: 5,
            query: Some("coffee".to_string()),
            zipcode: None,
            total: 10,
            error: false,
        };

        let json = serde_json::to_value(&meta).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["count"], 2);
    }

    #[test]
    fn test_payload_tolerates_missing_fields() {
        let payload: SuggestionsPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.items.is_empty());
        assert!(payload.meta.is_none());
    }
}
