//! Health command implementation.

use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::cancellation::CancellationToken;
use crate::commands::{CommandContext, build_client, emit};
use crate::formatters::{OutputFormat, get_formatter};

pub async fn run(
    ctx: &CommandContext,
    output_format: &str,
    output_file: Option<&Path>,
    cancel: &CancellationToken,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let client = build_client(ctx)?;

    info!("Connecting to {}", client.base_url());

    let health = cancel.run(client.health()).await??;
    if !health.is_up() {
        warn!(status = %health.status, "Service reported a non-UP status");
    }

    let output = get_formatter(format).format_health(&health)?;
    emit(&output, output_file)
}
