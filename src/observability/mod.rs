//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events, stderr)
//!
//! Each run is wrapped in a `bootstrap` span carrying a `run_id`.
//! ```

pub mod logging;

pub use logging::{init_logging, LogFormat};
