//! Shutdown coordination between the termination handler and the main path.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;

/// How long the termination handler waits for the main path to finish.
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(10);

/// Shutdown lifecycle state.
///
/// Transitions only move forward: `Running → TerminationRequested` (handler),
/// `Running | TerminationRequested → Completed` (main path).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownState {
    Running = 0,
    TerminationRequested = 1,
    Completed = 2,
}

impl From<u8> for ShutdownState {
    fn from(val: u8) -> Self {
        match val {
            1 => ShutdownState::TerminationRequested,
            2 => ShutdownState::Completed,
            _ => ShutdownState::Running,
        }
    }
}

/// Result of handling a termination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// The main path signalled completion (possibly before the request).
    Completed,
    /// Another request is already waiting; this one did nothing.
    AlreadyRequested,
}

/// Errors raised while coordinating shutdown.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The main path did not complete within the grace period.
    #[error("main path did not complete within the {grace_period:?} grace period")]
    GracePeriodElapsed { grace_period: Duration },
}

#[derive(Debug)]
struct Inner {
    state: AtomicU8,
    termination_observed: AtomicBool,
    completed_tx: watch::Sender<bool>,
    grace_period: Duration,
}

/// Coordinator for graceful shutdown.
///
/// Cheap to clone; every clone shares the same state. The termination
/// handler only asks for shutdown and waits, it never cleans anything up.
#[derive(Debug, Clone)]
pub struct LifecycleCoordinator {
    inner: Arc<Inner>,
}

impl LifecycleCoordinator {
    /// Create a coordinator with the default grace period.
    pub fn new() -> Self {
        Self::with_grace_period(DEFAULT_GRACE_PERIOD)
    }

    pub fn with_grace_period(grace_period: Duration) -> Self {
        let (completed_tx, _) = watch::channel(false);
        Self {
            inner: Arc::new(Inner {
                state: AtomicU8::new(ShutdownState::Running as u8),
                termination_observed: AtomicBool::new(false),
                completed_tx,
                grace_period,
            }),
        }
    }

    pub fn state(&self) -> ShutdownState {
        self.inner.state.load(Ordering::SeqCst).into()
    }

    pub fn grace_period(&self) -> Duration {
        self.inner.grace_period
    }

    /// Whether a termination signal has been observed. Never blocks.
    pub fn is_termination_requested(&self) -> bool {
        self.inner.termination_observed.load(Ordering::SeqCst)
    }

    /// Record a termination request.
    ///
    /// Returns `true` only for the call that moved `Running → TerminationRequested`.
    pub fn request_termination(&self) -> bool {
        self.inner.termination_observed.store(true, Ordering::SeqCst);
        self.inner
            .state
            .compare_exchange(
                ShutdownState::Running as u8,
                ShutdownState::TerminationRequested as u8,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_ok()
    }

    /// Termination handler body: request shutdown, then wait for completion.
    ///
    /// Waits at most the grace period. A second call while the first is
    /// still waiting returns [`ShutdownOutcome::AlreadyRequested`] at once.
    pub async fn handle_termination(&self) -> Result<ShutdownOutcome, LifecycleError> {
        if !self.request_termination() {
            return match self.state() {
                ShutdownState::Completed => Ok(ShutdownOutcome::Completed),
                _ => {
                    tracing::debug!("Termination already requested, ignoring");
                    Ok(ShutdownOutcome::AlreadyRequested)
                }
            };
        }

        tracing::info!(
            grace_period_secs = self.inner.grace_period.as_secs_f64(),
            "Termination requested, waiting for main path to complete"
        );

        let mut completed_rx = self.inner.completed_tx.subscribe();
        // The sender lives in `inner`, so the channel cannot close while waiting.
        let completed = tokio::time::timeout(self.inner.grace_period, completed_rx.wait_for(|done| *done))
            .await
            .is_ok();

        if completed {
            tracing::info!("Main path completed, releasing termination");
            Ok(ShutdownOutcome::Completed)
        } else {
            Err(LifecycleError::GracePeriodElapsed {
                grace_period: self.inner.grace_period,
            })
        }
    }

    /// Mark the main path as finished and release any waiting handler.
    pub fn signal_complete(&self) {
        let previous: ShutdownState = self
            .inner
            .state
            .swap(ShutdownState::Completed as u8, Ordering::SeqCst)
            .into();
        if previous == ShutdownState::Completed {
            tracing::warn!("Completion signalled more than once");
            return;
        }
        self.inner.completed_tx.send_replace(true);
        tracing::debug!(previous = ?previous, "Main path completed");
    }

    /// Guard that signals completion when dropped, on every exit path.
    pub fn completion_guard(&self) -> CompletionGuard {
        CompletionGuard {
            coordinator: self.clone(),
        }
    }
}

impl Default for LifecycleCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// A RAII guard that signals completion on drop.
#[derive(Debug)]
pub struct CompletionGuard {
    coordinator: LifecycleCoordinator,
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        self.coordinator.signal_complete();
    }
}
