//! Application bootstrap (v1)
//!
//! A single-shot batch entry point built with Tokio.
//!
//! # Architecture Overview
//!
//! ```text
//!   process start
//!        │
//!        ▼
//!   ┌───────────────┐   SIGTERM/SIGINT   ┌──────────────────────┐
//!   │   lifecycle   │◀───────────────────│  termination handler │
//!   │  coordinator  │───────────────────▶│  (waits, ≤ grace)    │
//!   └──────┬────────┘   Completed        └──────────────────────┘
//!          │
//!          ▼
//!   ┌───────────────┐    ┌───────────────┐    ┌───────────────┐
//!   │    config     │───▶│     input     │───▶│   processor   │
//!   │ (environment) │    │ (argv JSON)   │    │ (calculator)  │
//!   └───────────────┘    └───────────────┘    └───────┬───────┘
//!                                                     │
//!                           completion guard dropped ◀┘
//!                                     │
//!                                     ▼
//!                                process exit (0 / 1)
//! ```

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use uuid::Uuid;

use app_bootstrap::calculator::SampleCalculation;
use app_bootstrap::cli::Cli;
use app_bootstrap::config::RawEnvironment;
use app_bootstrap::error::EXIT_FAILURE;
use app_bootstrap::lifecycle::{register_handler, startup, LifecycleCoordinator};
use app_bootstrap::observability::{init_logging, LogFormat};

#[tokio::main]
async fn main() -> ExitCode {
    let env = RawEnvironment::from_process();
    init_logging(LogFormat::from_env(&env));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            report_fatal("Failed to read command-line arguments", &e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    let coordinator = LifecycleCoordinator::new();

    // Must be in place before any configuration or input work.
    if let Err(e) = register_handler(&coordinator) {
        report_fatal("Failed to register termination handler", &e);
        return ExitCode::from(EXIT_FAILURE);
    }

    let span = tracing::info_span!("bootstrap", run_id = %Uuid::new_v4());
    let outcome = span.in_scope(|| {
        panic::catch_unwind(AssertUnwindSafe(|| {
            startup::run(&coordinator, &env, &cli.input, SampleCalculation)
        }))
    });

    match outcome {
        Ok(Ok(_)) => {
            tracing::info!("Run complete");
            ExitCode::SUCCESS
        }
        Ok(Err(e)) => {
            report_fatal("Run failed", &e);
            ExitCode::from(e.exit_code())
        }
        Err(_) => {
            report_fatal("Run aborted", &"unexpected panic");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Fatal outcomes reach stderr even when `RUST_LOG` filters errors out.
fn report_fatal(message: &str, error: &dyn fmt::Display) {
    if tracing::enabled!(Level::ERROR) {
        tracing::error!(error = %error, "{}", message);
    } else {
        eprintln!("{}: {}", message, error);
    }
}
