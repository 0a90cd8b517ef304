//! Configuration schema definitions.
//!
//! This module defines the fixed set of environment variables the process
//! needs, the raw environment they are read from, and the validated,
//! immutable configuration produced from them.

use std::collections::BTreeMap;

use crate::config::validation::FieldKind;

pub const STAGE: &str = "STAGE";
pub const REGION: &str = "REGION";
pub const EXAMPLE_STRING_VAR: &str = "EXAMPLE_STRING_VAR";
pub const EXAMPLE_INT_VAR: &str = "EXAMPLE_INT_VAR";
pub const EXAMPLE_BOOLEAN_VAR: &str = "EXAMPLE_BOOLEAN_VAR";

/// Describes one environment variable the process reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Variable name, unique within the schema.
    pub key: &'static str,
    /// Type the raw value must parse as.
    pub kind: FieldKind,
    /// Absent or blank values are violations when set.
    pub required: bool,
}

impl FieldDescriptor {
    const fn required(key: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            kind,
            required: true,
        }
    }
}

/// Every variable, in the order violations are reported.
pub const CONFIG_SCHEMA: [FieldDescriptor; 5] = [
    FieldDescriptor::required(STAGE, FieldKind::String),
    FieldDescriptor::required(REGION, FieldKind::String),
    FieldDescriptor::required(EXAMPLE_STRING_VAR, FieldKind::String),
    FieldDescriptor::required(EXAMPLE_INT_VAR, FieldKind::Integer),
    FieldDescriptor::required(EXAMPLE_BOOLEAN_VAR, FieldKind::Boolean),
];

/// Snapshot of string-keyed environment values.
///
/// Never mutated after construction; tests build one from literal pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEnvironment {
    vars: BTreeMap<String, String>,
}

impl RawEnvironment {
    /// Capture the current process environment.
    ///
    /// Entries that are not valid Unicode are skipped, so they read as unset.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => Some((key, value)),
                (key, _) => {
                    tracing::debug!(key = ?key, "Skipping non-Unicode environment entry");
                    None
                }
            })
            .collect();
        Self { vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawEnvironment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Validated process configuration.
///
/// Built once at startup by [`crate::config::load_config`] and passed by
/// reference afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// Deployment stage (e.g., dev, staging, prod).
    pub stage: String,

    /// Deployment region (e.g., us-west-2).
    pub region: String,

    pub example_string_var: String,

    pub example_int_var: i32,

    pub example_boolean_var: bool,
}
