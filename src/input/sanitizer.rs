//! Input sanitization.
//!
//! Turns the raw argument vector into a validated [`ApplicationInput`].
//! Each step is a hard gate: argument structure, strict JSON decoding,
//! then the semantic constraint pass.

use std::ffi::OsStr;

use thiserror::Error;

use crate::config::validation::{Validate, Violations};
use crate::input::model::ApplicationInput;

/// Error type for input sanitization.
#[derive(Debug, Error)]
pub enum InputError {
    /// The argument vector was empty.
    #[error("no input provided")]
    Missing,

    /// The first argument is not a well-formed payload.
    #[error("invalid input JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// The payload decoded but violates one or more constraints.
    #[error("validation failed: {0}")]
    Invalid(Violations),
}

/// Parse and validate the first argument.
///
/// Additional arguments are ignored.
pub fn sanitize<S: AsRef<OsStr>>(args: &[S]) -> Result<ApplicationInput, InputError> {
    let raw = args
        .first()
        .ok_or(InputError::Missing)?
        .as_ref()
        .to_str()
        .ok_or_else(|| InputError::Json(serde::de::Error::custom("argument is not valid UTF-8")))?;
    if args.len() > 1 {
        tracing::debug!(ignored = args.len() - 1, "Using first argument only");
    }

    // Derived struct decoding also accepts a positional array form.
    if raw.trim_start().starts_with('[') {
        return Err(InputError::Json(serde::de::Error::custom(
            "expected a JSON object, found an array",
        )));
    }

    let input: ApplicationInput = serde_json::from_str(raw).map_err(InputError::Json)?;

    input.validate().into_result().map_err(InputError::Invalid)?;

    Ok(input)
}
