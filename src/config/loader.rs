//! Configuration loading from the environment.

use thiserror::Error;

use crate::config::schema::{
    RawEnvironment, ValidatedConfig, CONFIG_SCHEMA, EXAMPLE_BOOLEAN_VAR, EXAMPLE_INT_VAR,
    EXAMPLE_STRING_VAR, REGION, STAGE,
};
use crate::config::validation::{parse_boolean, parse_integer, require_value, Violation, Violations};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more variables are missing, blank or malformed.
    #[error("environment validation failed: {0}")]
    Invalid(Violations),
}

impl ConfigError {
    pub fn violations(&self) -> &Violations {
        match self {
            ConfigError::Invalid(violations) => violations,
        }
    }
}

impl From<Violations> for ConfigError {
    fn from(violations: Violations) -> Self {
        ConfigError::Invalid(violations)
    }
}

/// Load and validate configuration from an environment snapshot.
///
/// Every schema field is checked before failing, so the error lists all
/// problems in schema order.
pub fn load_config(env: &RawEnvironment) -> Result<ValidatedConfig, ConfigError> {
    let stage = string_var(env, STAGE);
    let region = string_var(env, REGION);
    let example_string_var = string_var(env, EXAMPLE_STRING_VAR);
    let example_int_var = integer_var(env, EXAMPLE_INT_VAR);
    let example_boolean_var = boolean_var(env, EXAMPLE_BOOLEAN_VAR);

    match (stage, region, example_string_var, example_int_var, example_boolean_var) {
        (Ok(stage), Ok(region), Ok(example_string_var), Ok(example_int_var), Ok(example_boolean_var)) => {
            tracing::debug!(fields = CONFIG_SCHEMA.len(), "Environment configuration validated");
            Ok(ValidatedConfig {
                stage,
                region,
                example_string_var,
                example_int_var,
                example_boolean_var,
            })
        }
        (stage, region, example_string_var, example_int_var, example_boolean_var) => {
            let violations: Violations = [
                stage.err(),
                region.err(),
                example_string_var.err(),
                example_int_var.err(),
                example_boolean_var.err(),
            ]
            .into_iter()
            .flatten()
            .collect();
            Err(ConfigError::Invalid(violations))
        }
    }
}

/// Load configuration from the current process environment.
pub fn load_config_from_process() -> Result<ValidatedConfig, ConfigError> {
    load_config(&RawEnvironment::from_process())
}

fn string_var(env: &RawEnvironment, key: &str) -> Result<String, Violation> {
    require_value(key, env.get(key)).map(str::to_string)
}

fn integer_var(env: &RawEnvironment, key: &str) -> Result<i32, Violation> {
    require_value(key, env.get(key)).and_then(|value| parse_integer(key, value))
}

fn boolean_var(env: &RawEnvironment, key: &str) -> Result<bool, Violation> {
    require_value(key, env.get(key)).and_then(|value| parse_boolean(key, value))
}
