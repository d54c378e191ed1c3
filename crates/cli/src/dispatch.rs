//! Command dispatch logic.
//!
//! Routes parsed CLI arguments to the matching command handler.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands::{self, CommandContext};

pub(crate) async fn run_command(
    cli: Cli,
    ctx: CommandContext,
    cancel: &CancellationToken,
) -> Result<()> {
    let output_file = cli.output_file.as_deref();

    match cli.command {
        Commands::Search { query } => {
            commands::search::run(&ctx, &query, &cli.output, output_file, cancel).await
        }
        Commands::Suggest { keyword } => {
            commands::suggest::run(&ctx, &keyword, &cli.output, output_file, cancel).await
        }
        Commands::Export { identifier, dir } => {
            commands::export::run(&ctx, &identifier, &dir, &cli.output, output_file, cancel)
                .await
        }
        Commands::Health => commands::health::run(&ctx, &cli.output, output_file, cancel).await,
    }
}
