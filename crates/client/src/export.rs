//! Sprite image export.
//!
//! Downloads a card's sprite and writes it to `{dir}/{name}.png`. There is
//! no retry; every failure is returned so the caller can show a blocking
//! notice.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::client::PokedexClient;
use crate::error::ExportError;

/// File name for an exported sprite.
///
/// Path separators in the name are replaced so the file always lands
/// directly in the export directory.
pub fn sprite_file_name(name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{safe}.png")
}

/// Fetch `sprite_url` and save it as `{dir}/{name}.png`.
///
/// # Errors
///
/// - [`ExportError::MissingSprite`] when `sprite_url` is `None` or empty.
/// - [`ExportError::Fetch`] when the download fails.
/// - [`ExportError::Write`] when the file cannot be written.
pub async fn export_sprite(
    client: &PokedexClient,
    sprite_url: Option<&str>,
    name: &str,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let result = export_inner(client, sprite_url, name, dir).await;

    if let Some(m) = client.metrics() {
        m.record_sprite_export(result.is_ok());
    }

    result
}

async fn export_inner(
    client: &PokedexClient,
    sprite_url: Option<&str>,
    name: &str,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let url = sprite_url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| ExportError::MissingSprite(name.to_string()))?;

    let bytes = client
        .fetch_sprite(url)
        .await
        .map_err(|source| ExportError::Fetch {
            name: name.to_string(),
            source,
        })?;

    let path = dir.join(sprite_file_name(name));
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

    info!(path = %path.display(), bytes = bytes.len(), "Exported sprite");
    Ok(path)
}
