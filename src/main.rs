// file: src/main.rs
// version: 0.3.0
// guid: 3b4c5d6e-7f8a-9b0c-1d2e-3f4a5b6c7d8e

//! Argo - Main entry point

use argo::{
    cli::{args::Cli, commands::*},
    logging::logger,
    Result,
};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logger::init_logger(cli.verbose, cli.quiet)?;

    // Ctrl+C during a backup is handled by the runner, which kills the
    // robocopy child instead of exiting the whole application.
    match cli.command {
        argo::cli::args::Commands::Backup(args) => backup_command(args).await,
        argo::cli::args::Commands::OpenLog => open_log_command().await,
        argo::cli::args::Commands::CheckUpdate => check_update_command().await,
    }
}
