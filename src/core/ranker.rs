use crate::core::{
    distance::{round_km, Coordinate},
    filters::{matches_text, resolve_reference},
};
use crate::models::{Query, RankedResult, Record};

/// Reference point used when a location key matches no record (New York City center)
pub const DEFAULT_FALLBACK: Coordinate = Coordinate::new(40.7128, -74.0060);

/// Result of a ranking pass
#[derive(Debug)]
pub struct RankOutcome {
    pub results: Vec<RankedResult>,
    pub total_records: usize,
}

/// Suggestion ranker - filters records by text and orders them by distance
///
/// # Pipeline Stages
/// 1. Case-insensitive substring filter on name, category and tags
/// 2. Reference point resolution from the location key
/// 3. Haversine distance, rounded to two decimals
/// 4. Stable ascending sort by distance
///
/// The ranker holds no record state; callers pass the record set per call.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    fallback: Coordinate,
}

impl Ranker {
    pub fn new(fallback: Coordinate) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> Coordinate {
        self.fallback
    }

    /// Rank `records` against `query`
    ///
    /// Empty strings count as absent. With neither text nor location key the
    /// result is empty. Without a location key the matches keep their input
    /// order and carry no distance.
    pub fn rank(&self, query: &Query, records: &[Record]) -> Vec<RankedResult> {
        let text = query.text.as_deref().filter(|t| !t.is_empty());
        let location_key = query.location_key.as_deref().filter(|k| !k.is_empty());

        if text.is_none() && location_key.is_none() {
            return Vec::new();
        }

        // Stage 1: text filter (pass-through when no text)
        let needle = text.map(str::to_lowercase);
        let matched = records.iter().filter(|record| match &needle {
            Some(needle) => matches_text(record, needle),
            None => true,
        });

        let Some(location_key) = location_key else {
            return matched
                .map(|record| RankedResult {
                    record: record.clone(),
                    distance_km: None,
                })
                .collect();
        };

        // Stage 2 & 3: reference point and distances
        let reference = resolve_reference(records, location_key, self.fallback);

        let mut ranked: Vec<RankedResult> = matched
            .map(|record| {
                let distance_km = round_km(reference.distance_to(&record.location.coordinate()));
                RankedResult {
                    record: record.clone(),
                    distance_km: Some(distance_km),
                }
            })
            .collect();

        // Stage 4: stable sort keeps input order for equal distances
        ranked.sort_by(|a, b| sort_key(a).total_cmp(&sort_key(b)));

        ranked
    }

    /// Rank and report the size of the record set that was searched
    pub fn rank_with_stats(&self, query: &Query, records: &[Record]) -> RankOutcome {
        let results = self.rank(query, records);

        tracing::debug!(
            "Ranked {} of {} records (text: {:?}, location: {:?})",
            results.len(),
            records.len(),
            query.text,
            query.location_key
        );

        RankOutcome {
            results,
            total_records: records.len(),
        }
    }
}

/// Unknown (NaN) distances from non-finite coordinates sort after every real one
#[inline]
fn sort_key(result: &RankedResult) -> f64 {
    match result.distance_km {
        Some(d) if !d.is_nan() => d,
        _ => f64::INFINITY,
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn create_record(id: i64, name: &str, tags: &[&str], key: &str, lat: f64, lon: f64) -> Record {
        Record {
            id,
            name: name.to_string(),
            category: "Cafe".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            location: Location {
                key: key.to_string(),
                latitude: lat,
                longitude: lon,
            },
        }
    }

    fn create_records() -> Vec<Record> {
        vec![
            create_record(1, "Far Beans", &["coffee"], "A", 40.80, -73.95),
            create_record(2, "Near Beans", &["coffee"], "B", 40.7510, -73.9970),
            create_record(3, "Tea Room", &["tea"], "C", 40.7506, -73.9971),
            create_record(4, "Twin Beans", &["coffee"], "D", 40.7510, -73.9970),
        ]
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let ranker = Ranker::default();
        let result = ranker.rank(&Query::new("", ""), &create_records());
        assert!(result.is_empty());
    }

    #[test]
    fn test_text_only_keeps_input_order() {
        let ranker = Ranker::default();
        let result = ranker.rank(&Query::text("BEANS"), &create_records());

        let ids: Vec<i64> = result.iter().map(|r| r.record.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
        assert!(result.iter().all(|r| r.distance_km.is_none()));
    }

    #[test]
    fn test_location_sorts_by_distance() {
        let ranker = Ranker::default();
        let result = ranker.rank(&Query::new("coffee", "C"), &create_records());

        let ids: Vec<i64> = result.iter().map(|r| r.record.id).collect();
        // 2 and 4 share a coordinate, so input order decides
        assert_eq!(ids, vec![2, 4, 1]);
        assert!(result.iter().all(|r| r.distance_km.is_some()));
    }

    #[test]
    fn test_location_only_ranks_everything() {
        let ranker = Ranker::default();
        let result = ranker.rank(&Query::near("C"), &create_records());

        assert_eq!(result.len(), 4);
        assert_eq!(result[0].record.id, 3);
        assert_eq!(result[0].distance_km, Some(0.0));
    }

    #[test]
    fn test_unknown_key_uses_fallback() {
        let fallback = Coordinate::new(40.80, -73.95);
        let ranker = Ranker::new(fallback);
        let result = ranker.rank(&Query::near("nowhere"), &create_records());

        assert_eq!(result[0].record.id, 1);
        assert_eq!(result[0].distance_km, Some(0.0));
    }

    #[test]
    fn test_non_finite_coordinate_sorts_last() {
        let ranker = Ranker::default();
        let mut records = create_records();
        records.insert(0, create_record(9, "Broken Beans", &["coffee"], "X", f64::INFINITY, -73.99));

        let result = ranker.rank(&Query::new("coffee", "C"), &records);

        let ids: Vec<i64> = result.iter().map(|r| r.record.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 9]);
        assert!(result[3].distance_km.unwrap().is_nan());
    }

    #[test]
    fn test_rank_with_stats_reports_total() {
        let ranker = Ranker::default();
        let outcome = ranker.rank_with_stats(&Query::text("tea"), &create_records());

        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.total_records, 4);
    }
}
