//! Side effect dispatcher.
//!
//! Routes actions to their handler; actions without side effects are
//! ignored here.

use crate::action::Action;
use crate::runtime::side_effects::{SharedClient, TaskTracker, export, health, search, suggest};
use std::time::Instant;
use tokio::sync::mpsc::Sender;
use tracing::{Instrument, info_span};

/// Handle side effects (async API calls) for `action`.
///
/// Handlers spawn their work on `task_tracker` and report back through
/// `tx`, so this returns as soon as the task is started.
pub async fn handle_side_effects(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) {
    let start = Instant::now();
    let span = info_span!(
        "tui.handle_action",
        action_type = action.name(),
        duration_ms = tracing::field::Empty,
    );

    async move {
        match action {
            Action::Search { query } => {
                search::handle_search(client, tx, query, &task_tracker);
            }
            Action::Suggest {
                keyword,
                request_id,
            } => {
                suggest::handle_suggest(client, tx, keyword, request_id, &task_tracker);
            }
            Action::ExportSprite {
                name,
                sprite_url,
                dir,
            } => {
                export::handle_export_sprite(client, tx, name, sprite_url, dir, &task_tracker);
            }
            Action::LoadHealth => health::handle_load_health(client, tx, &task_tracker),
            _ => {}
        }
        tracing::Span::current().record("duration_ms", start.elapsed().as_millis() as i64);
    }
    .instrument(span)
    .await;
}
