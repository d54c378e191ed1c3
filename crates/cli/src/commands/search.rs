//! Search command implementation.

use std::path::Path;

use anyhow::Result;
use pokedex_client::NOT_FOUND_MESSAGE;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::{CommandContext, build_client, emit};
use crate::error::NothingFound;
use crate::formatters::{OutputFormat, get_formatter};

pub async fn run(
    ctx: &CommandContext,
    query: &str,
    output_format: &str,
    output_file: Option<&Path>,
    cancel: &CancellationToken,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let client = build_client(ctx)?;

    info!("Searching {}", client.base_url());

    let report = cancel.run(client.search(query)).await??;

    let output = get_formatter(format).format_report(&report)?;
    emit(&output, output_file)?;

    let banner = report.error_banner();
    if report.is_empty() {
        // main prints the error, which carries the banner
        return Err(NothingFound {
            message: banner.unwrap_or_else(|| NOT_FOUND_MESSAGE.to_string()),
        }
        .into());
    }
    if let Some(banner) = banner {
        eprintln!("{banner}");
    }

    Ok(())
}
