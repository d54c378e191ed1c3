//! Suggestion side effect handler.

use crate::action::Action;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};

/// Fetch suggestions for `keyword`, tagging the result with `request_id`.
///
/// Failures are passed on for the app to log; they are never surfaced to
/// the user.
pub fn handle_suggest(
    client: SharedClient,
    tx: Sender<Action>,
    keyword: String,
    request_id: u64,
    task_tracker: &TaskTracker,
) {
    task_tracker.spawn(async move {
        let result = client.suggest(&keyword).await.map_err(Arc::new);
        let _ = tx
            .send(Action::SuggestionsLoaded { request_id, result })
            .await;
    });
}
