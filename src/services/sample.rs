use crate::models::{Location, Record};

/// (id, name, category, tags, zipcode, latitude, longitude)
type SampleRow = (i64, &'static str, &'static str, &'static [&'static str], &'static str, f64, f64);

const SAMPLE_ROWS: &[SampleRow] = &[
    (1, "Cafe Delight", "Cafe", &["coffee", "breakfast", "wifi"], "10001", 40.7506, -73.9971),
    (2, "Burger Palace", "Restaurant", &["burgers", "fast food", "takeout"], "10002", 40.7157, -73.9863),
    (3, "Sushi Express", "Restaurant", &["sushi", "japanese", "healthy"], "10003", 40.7318, -73.9890),
    (4, "Pizza Corner", "Restaurant", &["pizza", "italian", "delivery"], "10011", 40.7420, -74.0004),
    (5, "Green Salad Bar", "Restaurant", &["salad", "healthy", "vegan"], "10012", 40.7255, -73.9983),
    (6, "Coffee House", "Cafe", &["coffee", "pastries", "quiet"], "10013", 40.7201, -74.0049),
    (7, "Taco Fiesta", "Restaurant", &["mexican", "tacos", "spicy"], "10014", 40.7340, -74.0054),
    (8, "Noodle Shop", "Restaurant", &["noodles", "asian", "quick"], "10016", 40.7459, -73.9781),
    (9, "Ice Cream Parlor", "Dessert", &["ice cream", "dessert", "family"], "10019", 40.7651, -73.9858),
    (10, "Cocktail Lounge", "Bar", &["cocktails", "nightlife", "upscale"], "10036", 40.7603, -73.9900),
];

/// The built-in sample set served by the mock API
pub fn sample_records() -> Vec<Record> {
    SAMPLE_ROWS
        .iter()
        .map(|&(id, name, category, tags, key, latitude, longitude)| Record {
            id,
            name: name.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            location: Location {
                key: key.to_string(),
                latitude,
                longitude,
            },
        })
        .collect()
}
