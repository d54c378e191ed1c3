//! Suggest command implementation.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cancellation::CancellationToken;
use crate::commands::{CommandContext, build_client, emit};
use crate::formatters::{OutputFormat, get_formatter};

pub async fn run(
    ctx: &CommandContext,
    keyword: &str,
    output_format: &str,
    output_file: Option<&Path>,
    cancel: &CancellationToken,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let client = build_client(ctx)?;

    let mut names = cancel
        .run(client.suggest(keyword))
        .await?
        .context("Failed to fetch suggestions")?;
    names.truncate(ctx.config.suggest.max_suggestions);

    let output = get_formatter(format).format_suggestions(&names)?;
    emit(&output, output_file)
}
