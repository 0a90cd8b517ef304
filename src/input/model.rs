//! Application input model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::config::validation::{Validate, Violations};

/// The single JSON payload the process receives on its command line.
///
/// Decoding is strict: unknown, duplicate and missing fields are errors,
/// including `exampleStringField`, which may be `null` but not absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ApplicationInput {
    #[serde(deserialize_with = "nullable")]
    pub example_string_field: Option<String>,

    pub example_int_field: i32,

    pub example_boolean_field: bool,

    /// RFC 3339 instant, normalised to UTC.
    #[serde(deserialize_with = "rfc3339")]
    pub example_timestamp_field: DateTime<Utc>,

    pub example_list_field: Vec<String>,
}

// Any decoded payload is acceptable; field rules go here as they are added.
impl Validate for ApplicationInput {
    fn validate(&self) -> Violations {
        Violations::new()
    }
}

// A custom deserializer keeps serde from treating an absent `Option` as `None`.
fn nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

fn rfc3339<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| serde::de::Error::custom(format!("invalid RFC 3339 timestamp '{}': {}", raw, e)))
}
