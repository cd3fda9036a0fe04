use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Query;

/// Search parameters as they arrive on the URL
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(max = 200))]
    #[serde(default)]
    pub query: Option<String>,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub zipcode: Option<String>,
}

impl SearchRequest {
    /// Convert to a ranker query, trimming values and dropping blank ones
    pub fn into_query(self) -> Query {
        Query {
            text: normalize(self.query),
            location_key: normalize(self.zipcode),
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_query_trims_and_drops_blank() {
        let request = SearchRequest {
            query: Some("  coffee ".to_string()),
            zipcode: Some("   ".to_string()),
        };

        let query = request.into_query();
        assert_eq!(query.text.as_deref(), Some("coffee"));
        assert_eq!(query.location_key, None);
    }

    #[test]
    fn test_rejects_overlong_query() {
        let request = SearchRequest {
            query: Some("x".repeat(201)),
            zipcode: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_accepts_missing_fields() {
        let request = SearchRequest::default();
        assert!(request.validate().is_ok());
    }
}
