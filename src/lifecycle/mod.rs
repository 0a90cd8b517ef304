//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     install SIGTERM/SIGINT listeners → first signal → handle_termination
//!
//! Startup (startup.rs):
//!     Load config → Sanitize input → Process → signal_complete (drop guard)
//!
//! Shutdown (shutdown.rs):
//!     Running → TerminationRequested (handler) → Completed (main path)
//!     handler waits for Completed, bounded by the grace period
//! ```
//!
//! # Design Decisions
//! - Handler registration happens before any other work
//! - Cleanup runs on the main path, never inside the handler
//! - Shutdown has timeout: the host may terminate after the deadline

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{
    CompletionGuard, LifecycleCoordinator, LifecycleError, ShutdownOutcome, ShutdownState,
    DEFAULT_GRACE_PERIOD,
};
pub use signals::{handle_signals, register_handler, HandlerExit, SignalSource, TerminationSignals};
