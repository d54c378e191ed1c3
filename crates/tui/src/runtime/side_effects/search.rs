//! Search side effect handler.

use crate::action::Action;
use tokio::sync::mpsc::{Sender, error::TrySendError};

use super::{SharedClient, TaskTracker};

/// Sends `Action::Loading(false)` when dropped.
///
/// Held by the search task so the loading flag is released on every exit
/// path, including a panic inside the task.
pub struct LoadingGuard {
    tx: Sender<Action>,
}

impl LoadingGuard {
    pub fn new(tx: Sender<Action>) -> Self {
        Self { tx }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        match self.tx.try_send(Action::Loading(false)) {
            Ok(()) | Err(TrySendError::Closed(_)) => {}
            Err(TrySendError::Full(action)) => {
                // Cannot block in drop; hand the send to the runtime.
                let tx = self.tx.clone();
                if let Ok(handle) = tokio::runtime::Handle::try_current() {
                    handle.spawn(async move {
                        let _ = tx.send(action).await;
                    });
                }
            }
        }
    }
}

/// Run every lookup of `query` concurrently and report the settled result.
pub fn handle_search(
    client: SharedClient,
    tx: Sender<Action>,
    query: String,
    task_tracker: &TaskTracker,
) {
    task_tracker.spawn(async move {
        let _loading = LoadingGuard::new(tx.clone());
        let result = client.search(&query).await;
        if let Ok(report) = &result {
            tracing::debug!(
                cards = report.cards.len(),
                failed = report.failed.len(),
                "Search settled"
            );
        }
        let _ = tx.send(Action::SearchFinished(result)).await;
    });
}
