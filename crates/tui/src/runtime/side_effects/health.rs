//! Health check side effect handler.

use crate::action::Action;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};

/// Query `GET /health` once.
pub fn handle_load_health(client: SharedClient, tx: Sender<Action>, task_tracker: &TaskTracker) {
    task_tracker.spawn(async move {
        let result = client.health().await.map_err(Arc::new);
        let _ = tx.send(Action::HealthLoaded(result)).await;
    });
}
