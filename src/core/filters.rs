use crate::core::distance::Coordinate;
use crate::models::Record;

/// Check if a record matches a free-text needle
///
/// `needle` must already be lowercased. A record matches when the needle is a
/// substring of its name, its category, or any one of its tags.
#[inline]
pub fn matches_text(record: &Record, needle: &str) -> bool {
    if record.name.to_lowercase().contains(needle) {
        return true;
    }

    if record.category.to_lowercase().contains(needle) {
        return true;
    }

    record
        .tags
        .iter()
        .any(|tag| tag.to_lowercase().contains(needle))
}

/// Resolve the point distances are measured from
///
/// The first record whose location key equals `location_key` wins; an unknown
/// key falls back to `fallback`.
pub fn resolve_reference(
    records: &[Record],
    location_key: &str,
    fallback: Coordinate,
) -> Coordinate {
    records
        .iter()
        .find(|record| record.location.key == location_key)
        .map(|record| record.location.coordinate())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn create_test_record(name: &str, category: &str, tags: &[&str], key: &str) -> Record {
        Record {
            id: 1,
            name: name.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            location: Location {
                key: key.to_string(),
                latitude: 40.7506,
                longitude: -73.9971,
            },
        }
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let record = create_test_record("Coffee House", "Cafe", &[], "10013");
        assert!(matches_text(&record, "coffee"));
        assert!(matches_text(&record, "e ho"));
    }

    #[test]
    fn test_matches_category() {
        let record = create_test_record("Taco Fiesta", "Restaurant", &[], "10014");
        assert!(matches_text(&record, "restaur"));
    }

    #[test]
    fn test_matches_any_tag() {
        let record = create_test_record("Ice Cream Parlor", "Dessert", &["Ice Cream", "family"], "10019");
        assert!(matches_text(&record, "fam"));
        assert!(matches_text(&record, "ice cream"));
    }

    #[test]
    fn test_no_match() {
        let record = create_test_record("Noodle Shop", "Restaurant", &["noodles", "asian"], "10016");
        assert!(!matches_text(&record, "sushi"));
    }

    #[test]
    fn test_resolve_known_key() {
        let records = vec![create_test_record("Cafe Delight", "Cafe", &[], "10001")];
        let fallback = Coordinate::new(0.0, 0.0);

        let reference = resolve_reference(&records, "10001", fallback);
        assert_eq!(reference, Coordinate::new(40.7506, -73.9971));
    }

    #[test]
    fn test_resolve_unknown_key_uses_fallback() {
        let records = vec![create_test_record("Cafe Delight", "Cafe", &[], "10001")];
        let fallback = Coordinate::new(40.7128, -74.0060);

        let reference = resolve_reference(&records, "99999", fallback);
        assert_eq!(reference, fallback);
    }
}
