//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Sanitize input and run the business callback
//! - Signal completion on every exit path
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The termination handler must already be registered
//! - Completion is signalled by a drop guard, never by the handler

use std::ffi::OsStr;

use crate::config::{load_config, RawEnvironment};
use crate::error::AppResult;
use crate::executor::{Executor, Processor};
use crate::input::ApplicationInput;
use crate::lifecycle::shutdown::LifecycleCoordinator;

/// Run one bootstrap pass: config, input, processor.
///
/// `coordinator` sees `signal_complete()` when this returns or unwinds.
pub fn run<S, P>(
    coordinator: &LifecycleCoordinator,
    env: &RawEnvironment,
    args: &[S],
    processor: P,
) -> AppResult<ApplicationInput>
where
    S: AsRef<OsStr>,
    P: Processor,
{
    let _completion = coordinator.completion_guard();

    let config = load_config(env)?;
    tracing::info!(
        stage = %config.stage,
        region = %config.region,
        "Configuration loaded"
    );

    Executor::new(config, processor).execute(args)
}
