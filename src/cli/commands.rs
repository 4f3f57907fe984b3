// file: src/cli/commands.rs
// version: 0.3.0
// guid: 2a3b4c5d-6e7f-8a9b-0c1d-2e3f4a5b6c7d

//! Command implementations for the CLI

use crate::{
    backup::{compose, composer::ROBOCOPY_PROGRAM, BackupOutcome, BackupRequest, BackupRunner},
    cli::args::BackupArgs,
    update::{UpdateChecker, UpdateOutcome},
    utils::system::SystemUtils,
    Result, VERSION,
};
use tracing::{info, warn};

/// Compose and run one backup
pub async fn backup_command(args: BackupArgs) -> Result<()> {
    let request = request_from_args(args.clone());

    if args.dry_run {
        let log_path = SystemUtils::log_file_path()?;
        let command = compose(&request, &log_path)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&command)?);
        } else {
            println!("{}", command.display());
        }
        return Ok(());
    }

    if !SystemUtils::command_exists(ROBOCOPY_PROGRAM) {
        warn!("{} was not found in PATH, the launch will likely fail", ROBOCOPY_PROGRAM);
    }

    info!("Backing up {} to {}", request.source, request.destination);

    let runner = BackupRunner::new();
    match runner.run(request).await? {
        BackupOutcome::Completed { exit_code } => {
            info!("Backup finished, robocopy exit code {:?}", exit_code);
        }
        BackupOutcome::Interrupted => {
            warn!("Backup interrupted by user");
        }
    }

    Ok(())
}

/// Open the Argo log file in the system text viewer
pub async fn open_log_command() -> Result<()> {
    SystemUtils::open_log().await
}

/// Check the release page for a newer published version
pub async fn check_update_command() -> Result<()> {
    let checker = UpdateChecker::new();

    match checker.check().await {
        UpdateOutcome::UpdateAvailable { remote } => {
            info!("There is a new version available! ({} -> {})", VERSION, remote);
        }
        UpdateOutcome::UpToDate => {
            info!("You have the latest available version!");
        }
        UpdateOutcome::LocalNewer { remote } => {
            info!("Local version {} is ahead of the published {}", VERSION, remote);
        }
        UpdateOutcome::Unparseable => {
            warn!("Could not find a version string in the update server response");
        }
        UpdateOutcome::CannotCheck => {
            warn!("Cannot connect to the update server at this time");
        }
    }

    Ok(())
}

/// Build a backup request from the parsed CLI options
fn request_from_args(args: BackupArgs) -> BackupRequest {
    let mut request = BackupRequest::new();
    request.set_source(args.source);
    request.set_destination(args.destination);
    request.mirror = args.mirror;
    request.logging = args.log;
    request.retry_immediately = args.retry_immediately;
    request.verbose = args.verbose_output;
    request.shutdown_after = args.shutdown;

    for file in args.exclude_files {
        request.exclude_file(file);
    }
    for folder in args.exclude_dirs {
        request.exclude_folder(folder);
    }
    request.set_file_types_raw(&args.exclude_types);
    request.max_file_size = args.max_size;

    request
}
