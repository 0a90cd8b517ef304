//! Shared fixtures for integration tests.

#![allow(dead_code)]

use app_bootstrap::RawEnvironment;

/// Environment pairs that pass validation.
pub fn valid_env_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("STAGE", "unit"),
        ("REGION", "unit-region"),
        ("EXAMPLE_STRING_VAR", "test"),
        ("EXAMPLE_INT_VAR", "1"),
        ("EXAMPLE_BOOLEAN_VAR", "true"),
    ]
}

pub fn valid_env() -> RawEnvironment {
    valid_env_pairs().into_iter().collect()
}

/// Valid environment with one key replaced (`Some`) or removed (`None`).
pub fn env_with(key: &'static str, value: Option<&'static str>) -> RawEnvironment {
    valid_env_pairs()
        .into_iter()
        .filter(|(k, _)| *k != key)
        .chain(value.map(|v| (key, v)))
        .collect()
}

/// Build a JSON payload with every required field.
pub fn valid_input(string: &str, int: i32, boolean: bool, timestamp: &str, list: &[&str]) -> String {
    serde_json::json!({
        "exampleStringField": string,
        "exampleIntField": int,
        "exampleBooleanField": boolean,
        "exampleTimestampField": timestamp,
        "exampleListField": list,
    })
    .to_string()
}

pub const SAMPLE_INPUT: &str = r#"{"exampleStringField":"hello","exampleIntField":3,"exampleBooleanField":true,"exampleTimestampField":"2024-01-01T00:00:00Z","exampleListField":["a","b"]}"#;
