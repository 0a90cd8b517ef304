//! Command-line input subsystem.
//!
//! # Data Flow
//! ```text
//! argv[1..]
//!     → sanitizer.rs (structure check, strict JSON decode)
//!     → model.rs (ApplicationInput + constraint pass)
//!     → ApplicationInput (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Only the first argument is read
//! - Decoding rejects unknown, duplicate and missing fields
//! - Downstream code performs no further checks

pub mod model;
pub mod sanitizer;

pub use model::ApplicationInput;
pub use sanitizer::{sanitize, InputError};
