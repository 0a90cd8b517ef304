//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → schema.rs (RawEnvironment snapshot, field descriptors)
//!     → validation.rs (typed parsing, violations)
//!     → loader.rs (aggregate violations, build config)
//!     → ValidatedConfig (validated, immutable)
//!     → passed by reference to every consumer
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - Every variable is required; there are no defaults
//! - All violations are reported together, in schema order

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_config_from_process, ConfigError};
pub use schema::{FieldDescriptor, RawEnvironment, ValidatedConfig, CONFIG_SCHEMA};
pub use validation::{FieldKind, Validate, Violation, Violations};
