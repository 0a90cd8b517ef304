//! Main-path executor.
//!
//! # Responsibilities
//! - Hold the validated configuration for the run
//! - Sanitize the command-line input
//! - Hand both to the business callback

use std::ffi::OsStr;

use crate::config::ValidatedConfig;
use crate::error::{AppError, AppResult, ProcessingError};
use crate::input::{sanitize, ApplicationInput};

/// Business logic run once the configuration and input are valid.
pub trait Processor {
    fn process(&self, config: &ValidatedConfig, input: &ApplicationInput) -> Result<(), ProcessingError>;
}

impl<F> Processor for F
where
    F: Fn(&ValidatedConfig, &ApplicationInput) -> Result<(), ProcessingError>,
{
    fn process(&self, config: &ValidatedConfig, input: &ApplicationInput) -> Result<(), ProcessingError> {
        self(config, input)
    }
}

pub struct Executor<P> {
    config: ValidatedConfig,
    processor: P,
}

impl<P: Processor> Executor<P> {
    pub fn new(config: ValidatedConfig, processor: P) -> Self {
        Self { config, processor }
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// Sanitize `args` and run the processor on the result.
    pub fn execute<S: AsRef<OsStr>>(&self, args: &[S]) -> AppResult<ApplicationInput> {
        tracing::info!(
            stage = %self.config.stage,
            region = %self.config.region,
            "Executing"
        );

        let input = sanitize(args)?;
        tracing::info!(input = ?input, "Sanitized input");

        self.processor
            .process(&self.config, &input)
            .map_err(AppError::Processing)?;

        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn config() -> ValidatedConfig {
        ValidatedConfig {
            stage: "unit".into(),
            region: "unit-region".into(),
            example_string_var: "test".into(),
            example_int_var: 1,
            example_boolean_var: true,
        }
    }

    const PAYLOAD: &str = r#"{"exampleStringField":"x","exampleIntField":7,"exampleBooleanField":false,"exampleTimestampField":"2024-06-01T12:00:00Z","exampleListField":[]}"#;

    #[test]
    fn test_processor_receives_config_and_input() {
        let seen = Cell::new(None);
        let executor = Executor::new(config(), |config: &ValidatedConfig, input: &ApplicationInput| -> Result<(), ProcessingError> {
            seen.set(Some((config.example_int_var, input.example_int_field)));
            Ok(())
        });

        let input = executor.execute(&[PAYLOAD]).unwrap();
        assert_eq!(input.example_int_field, 7);
        assert_eq!(seen.get(), Some((1, 7)));
        assert_eq!(executor.config().stage, "unit");
    }

    #[test]
    fn test_processor_not_called_on_invalid_input() {
        let called = Cell::new(false);
        let executor = Executor::new(config(), |_: &ValidatedConfig, _: &ApplicationInput| -> Result<(), ProcessingError> {
            called.set(true);
            Ok(())
        });

        let args: [&str; 0] = [];
        let err = executor.execute(&args).unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
        assert!(!called.get());
    }

    #[test]
    fn test_processor_error_is_wrapped() {
        let executor = Executor::new(config(), |_: &ValidatedConfig, _: &ApplicationInput| {
            Err::<(), ProcessingError>("downstream unavailable".into())
        });

        let err = executor.execute(&[PAYLOAD]).unwrap_err();
        assert_eq!(err.to_string(), "processing failed: downstream unavailable");
        assert_eq!(err.exit_code(), 1);
    }
}
