//! Sprite export side effect handler.

use crate::action::Action;
use pokedex_client::export_sprite;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};

/// Download the sprite and write `dir/{name}.png`.
pub fn handle_export_sprite(
    client: SharedClient,
    tx: Sender<Action>,
    name: String,
    sprite_url: Option<String>,
    dir: PathBuf,
    task_tracker: &TaskTracker,
) {
    task_tracker.spawn(async move {
        let result = export_sprite(&client, sprite_url.as_deref(), &name, &dir)
            .await
            .map_err(Arc::new);
        let _ = tx.send(Action::ExportFinished { name, result }).await;
    });
}
