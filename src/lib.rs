//! Application bootstrap library
//!
//! Loads strictly validated configuration from the environment, sanitizes a
//! single JSON command-line payload, and coordinates graceful shutdown
//! between a termination signal and the main path.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod lifecycle;
pub mod observability;

pub use config::{load_config, RawEnvironment, ValidatedConfig};
pub use error::{AppError, AppResult};
pub use executor::{Executor, Processor};
pub use input::{sanitize, ApplicationInput};
pub use lifecycle::LifecycleCoordinator;
