//! Export command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use pokedex_client::{CreatureCard, export_sprite};
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::{CommandContext, build_client, emit};
use crate::formatters::{ExportOutput, OutputFormat, get_formatter};

pub async fn run(
    ctx: &CommandContext,
    identifier: &str,
    dir: &Path,
    output_format: &str,
    output_file: Option<&Path>,
    cancel: &CancellationToken,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let client = build_client(ctx)?;

    let identifier = identifier.trim();
    let record = cancel
        .run(client.get_creature(identifier))
        .await?
        .with_context(|| format!("Failed to look up '{identifier}'"))?;
    let card = CreatureCard::from_record(&record);

    let path = cancel
        .run(export_sprite(
            &client,
            card.sprite_url.as_deref(),
            &card.name,
            dir,
        ))
        .await??;

    info!(path = %path.display(), "Sprite exported");

    let output = get_formatter(format).format_export(&ExportOutput {
        name: card.name,
        path,
    })?;
    emit(&output, output_file)
}
