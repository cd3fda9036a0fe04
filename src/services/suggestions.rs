use crate::config::ApiConfig;
use crate::models::{Query, SuggestionsPayload};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Path of the suggestions endpoint relative to the configured base URL
const SUGGESTIONS_PATH: &str = "/api/v1/suggestions";

/// Errors that can occur when calling the suggestions endpoint
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

/// Client for a remote suggestions endpoint
///
/// Sends `GET {base_url}/api/v1/suggestions` with the search text and ZIP
/// code as query parameters, authenticating with `X-API-Token` when a token
/// is configured.
#[derive(Debug, Clone)]
pub struct SuggestionsClient {
    base_url: String,
    api_token: String,
    client: Client,
}

impl SuggestionsClient {
    /// Create a new suggestions client
    pub fn new(config: ApiConfig) -> Result<Self, NetworkError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(NetworkError::InvalidUrl(config.base_url));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url,
            api_token: config.api_token,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request URL, adding only the parameters that are present
    fn request_url(&self, query: &Query) -> String {
        let mut params = Vec::new();
        if let Some(text) = query.text.as_deref().filter(|t| !t.is_empty()) {
            params.push(format!("query={}", urlencoding::encode(text)));
        }
        if let Some(key) = query.location_key.as_deref().filter(|k| !k.is_empty()) {
            params.push(format!("zipcode={}", urlencoding::encode(key)));
        }

        if params.is_empty() {
            format!("{}{}", self.base_url, SUGGESTIONS_PATH)
        } else {
            format!("{}{}?{}", self.base_url, SUGGESTIONS_PATH, params.join("&"))
        }
    }

    /// Fetch the record set for a query
    pub async fn fetch(&self, query: &Query) -> Result<SuggestionsPayload, NetworkError> {
        let url = self.request_url(query);

        tracing::debug!("Making API request to: {}", url);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/json");

        if !self.api_token.is_empty() {
            request = request.header("X-API-Token", &self.api_token);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body)
            .map_err(|e| NetworkError::InvalidResponse(format!("Failed to parse suggestions: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_client(base_url: &str) -> SuggestionsClient {
        SuggestionsClient::new(ApiConfig {
            base_url: base_url.to_string(),
            api_token: "test-token".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_client_creation_trims_slash() {
        let client = create_client("https://search.test/");
        assert_eq!(client.base_url(), "https://search.test");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let result = SuggestionsClient::new(ApiConfig {
            base_url: "localhost:5001".to_string(),
            api_token: String::new(),
        });

        assert!(matches!(result, Err(NetworkError::InvalidUrl(_))));
    }

    #[test]
    fn test_request_url_encodes_parameters() {
        let client = create_client("http://localhost:5001");

        let url = client.request_url(&Query::new("ice cream", "10019"));
        assert_eq!(url, "http://localhost:5001/api/v1/suggestions?query=ice%20cream&zipcode=10019");

        let url = client.request_url(&Query::near("10001"));
        assert_eq!(url, "http://localhost:5001/api/v1/suggestions?zipcode=10001");

        let url = client.request_url(&Query::default());
        assert_eq!(url, "http://localhost:5001/api/v1/suggestions");
    }

    #[test]
    fn test_status_error_message() {
        let error = NetworkError::Status {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };

        assert_eq!(error.to_string(), "API returned 503: Service Unavailable");
    }
}
