//! Shared test seed data, deliberately full of edge cases: the empty name,
//! a stored null, numeric and negative-float values, and names containing
//! separators that must NOT be treated as hierarchy.

use serde_json::{Map, Value};

/// `(name, value-as-JSON-text)` pairs used to seed stores under test.
pub const SEED: &[(&str, &str)] = &[
    ("", r##""#EMPTY#""##),
    ("null", "null"),
    ("1", r#""TRUE""#),
    ("alpha", r#""ALPHA""#),
    ("beta", r#""BETA""#),
    ("123", "123"),
    ("float", "-12.3"),
    ("a/b/c", r#""A/B/C""#),
    ("x.y.z", r#""X/Y/Z""#),
];

/// The seed pairs as an option mapping.
pub fn seed_map() -> Map<String, Value> {
    SEED.iter()
        .map(|(name, json)| {
            let value: Value = serde_json::from_str(json).expect("fixture value parses");
            (name.to_string(), value)
        })
        .collect()
}
