//! CLI cancellation utilities.
//!
//! Responsibilities:
//! - Provide a cloneable cancellation token passed through command handlers.
//! - Define the `Cancelled` marker error that signals Ctrl+C through `anyhow::Result`.
//!
//! Does NOT handle:
//! - Installing signal handlers (done in `main`).
//!
//! Invariants:
//! - Once cancelled, a token stays cancelled.

use std::fmt;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Cancellation token usable across async tasks.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the token. Idempotent.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Wait until the token is cancelled.
    pub async fn cancelled(&self) {
        // register before checking so a concurrent cancel() is not missed
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }

    /// Run `fut` unless the token is cancelled first.
    pub async fn run<F, T>(&self, fut: F) -> anyhow::Result<T>
    where
        F: std::future::Future<Output = T>,
    {
        tokio::select! {
            out = fut => Ok(out),
            _ = self.cancelled() => Err(Cancelled.into()),
        }
    }
}

/// Marker error for user-driven cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
}

pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}
