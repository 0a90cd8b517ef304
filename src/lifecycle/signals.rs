//! OS signal handling.
//!
//! # Responsibilities
//! - Register signal handlers (SIGTERM, SIGINT) before any other work
//! - Translate the first signal into a termination request
//! - Hand termination back to the host once the main path completes or
//!   the grace period runs out
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Listeners are installed synchronously so registration happens-before
//!   configuration loading
//! - Repeated signals while waiting are no-op requests, not new handlers

use std::future::Future;
use std::io;

use tokio::task::JoinHandle;

use crate::lifecycle::shutdown::{LifecycleCoordinator, ShutdownOutcome};

/// Exit status used when the grace period runs out (128 + SIGTERM).
pub const EXIT_TERMINATED: i32 = 143;

/// Anything that yields termination signals by name.
pub trait SignalSource {
    /// Wait for the next signal.
    fn recv(&mut self) -> impl Future<Output = &'static str> + Send;
}

/// Termination signals the process listens for.
pub struct TerminationSignals {
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
}

impl TerminationSignals {
    /// Install the OS listeners. Must be called inside a Tokio runtime.
    pub fn install() -> io::Result<Self> {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            Ok(Self {
                terminate: signal(SignalKind::terminate())?,
                interrupt: signal(SignalKind::interrupt())?,
            })
        }
        #[cfg(not(unix))]
        {
            Ok(Self {})
        }
    }

}

impl SignalSource for TerminationSignals {
    async fn recv(&mut self) -> &'static str {
        #[cfg(unix)]
        {
            tokio::select! {
                _ = self.terminate.recv() => "SIGTERM",
                _ = self.interrupt.recv() => "SIGINT",
            }
        }
        #[cfg(not(unix))]
        {
            match tokio::signal::ctrl_c().await {
                Ok(()) => "ctrl-c",
                Err(e) => {
                    tracing::error!(error = %e, "Failed to listen for Ctrl+C");
                    std::future::pending().await
                }
            }
        }
    }
}

/// Install the asynchronous termination handler.
///
/// Signal listeners are registered before this returns; the handler runs
/// on a spawned task for the rest of the process lifetime.
pub fn register_handler(coordinator: &LifecycleCoordinator) -> io::Result<JoinHandle<()>> {
    let signals = TerminationSignals::install()?;
    let coordinator = coordinator.clone();
    tracing::debug!("Termination handler registered");

    Ok(tokio::spawn(async move {
        if handle_signals(&coordinator, signals).await == HandlerExit::GracePeriodElapsed {
            // The default disposition of SIGTERM would have ended the process.
            std::process::exit(EXIT_TERMINATED);
        }
    }))
}

/// How the handler task finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerExit {
    Completed,
    GracePeriodElapsed,
}

/// Wait for the first signal, then run the termination wait while
/// absorbing further signals.
///
/// The handler never signals completion itself; on timeout the state stays
/// `TerminationRequested`.
pub async fn handle_signals<S: SignalSource>(coordinator: &LifecycleCoordinator, mut signals: S) -> HandlerExit {
    let first = signals.recv().await;
    tracing::info!(signal = first, "Termination signal received");

    let wait = coordinator.handle_termination();
    tokio::pin!(wait);

    let result = loop {
        tokio::select! {
            result = &mut wait => break result,
            signal = signals.recv() => {
                if !coordinator.request_termination() {
                    tracing::debug!(signal, "Termination already in progress, ignoring signal");
                }
            }
        }
    };

    match result {
        Ok(ShutdownOutcome::Completed) | Ok(ShutdownOutcome::AlreadyRequested) => HandlerExit::Completed,
        Err(e) => {
            tracing::warn!(error = %e, "Grace period elapsed, allowing termination");
            HandlerExit::GracePeriodElapsed
        }
    }
}
