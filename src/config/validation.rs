//! Typed extraction and validation primitives.
//!
//! # Responsibilities
//! - Turn a raw environment string into a typed value
//! - Describe every failure as a [`Violation`] carrying the offending key
//! - Collect violations so a whole pass is reported at once
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Booleans accept only the lowercase literals `true` and `false`
//! - Integers are 32-bit and never truncated (`3.14` is an error)

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Boxed cause attached to a violation.
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Semantic type of a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
}

/// One failed constraint: the field it belongs to and a readable message.
#[derive(Debug, Error)]
#[error("{field}: {message}")]
pub struct Violation {
    field: String,
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl Violation {
    /// Create a violation without an underlying cause.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            cause: None,
        }
    }

    /// Attach the error that triggered this violation.
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying parse error, if any.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

/// Ordered set of violations produced by one validation pass.
#[derive(Debug, Default)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// `Ok(())` when nothing was collected, otherwise the whole set.
    pub fn into_result(self) -> Result<(), Violations> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl Extend<Violation> for Violations {
    fn extend<T: IntoIterator<Item = Violation>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<T: IntoIterator<Item = Violation>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Semantic checks run on an already-decoded value.
pub trait Validate {
    /// Every violated constraint, in field-declaration order.
    fn validate(&self) -> Violations;
}

/// Present and not whitespace-only.
///
/// Only for environment variables: the message names `key` as one.
pub fn require_value<'a>(key: &str, raw: Option<&'a str>) -> Result<&'a str, Violation> {
    match raw {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Violation::new(
            key,
            format!("Required environment variable '{}' is not set", key),
        )),
    }
}

/// Base-10 signed 32-bit integer matching `^-?[0-9]+$`.
pub fn parse_integer(key: &str, value: &str) -> Result<i32, Violation> {
    let invalid = || {
        Violation::new(
            key,
            format!("Environment variable '{}' must be a valid integer, got: {}", key, value),
        )
    };

    // `str::parse` also accepts a leading '+', which is not a valid form here.
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        let cause = value.parse::<i32>().err();
        return Err(match cause {
            Some(err) => invalid().with_cause(err),
            None => invalid(),
        });
    }

    value.parse::<i32>().map_err(|err| invalid().with_cause(err))
}

/// Exactly `"true"` or `"false"`; anything else is an error.
pub fn parse_boolean(key: &str, value: &str) -> Result<bool, Violation> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Violation::new(
            key,
            format!("Environment variable '{}' must be 'true' or 'false', got: {}", key, value),
        )),
    }
}
