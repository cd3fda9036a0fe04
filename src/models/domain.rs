use serde::{Deserialize, Serialize};

use crate::core::distance::Coordinate;

/// Where a record sits, addressed by a lookup key such as a ZIP code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub key: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Searchable reference item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub location: Location,
}

/// Caller-supplied search text and/or location key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(rename = "locationKey", default)]
    pub location_key: Option<String>,
}

impl Query {
    pub fn new(text: impl Into<String>, location_key: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            location_key: Some(location_key.into()),
        }
    }

    /// Text-only query
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            location_key: None,
        }
    }

    /// Location-only query
    pub fn near(location_key: impl Into<String>) -> Self {
        Self {
            text: None,
            location_key: Some(location_key.into()),
        }
    }
}

/// A record plus its distance from the query's reference point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub record: Record,
    #[serde(rename = "distanceKm", default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}
