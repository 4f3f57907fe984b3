// file: src/cli/args.rs
// version: 0.3.0
// guid: 1f2a3b4c-5d6e-7f8a-9b0c-1d2e3f4a5b6c

//! Command line argument definitions

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "argo")]
#[command(about = "Another Robocopy Organiser - front-end for Microsoft's robocopy utility")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compose the robocopy command for a backup and run it
    Backup(BackupArgs),

    /// Open the Argo log file in the system text viewer
    OpenLog,

    /// Check the release page for a newer published version
    CheckUpdate,
}

/// Options for one backup run
#[derive(Args, Clone, Debug)]
pub struct BackupArgs {
    #[arg(short, long, help = "Directory tree to copy from")]
    pub source: String,

    #[arg(short, long, help = "Directory tree to copy to")]
    pub destination: String,

    #[arg(short, long, help = "Mirror the source, propagating deletions")]
    pub mirror: bool,

    #[arg(short, long, help = "Append robocopy output to the Argo log file")]
    pub log: bool,

    #[arg(short, long, help = "Skip failing files immediately (zero retries, zero wait)")]
    pub retry_immediately: bool,

    #[arg(long, help = "Accepted for compatibility; currently has no effect")]
    pub verbose_output: bool,

    #[arg(long, help = "Power the machine off 15 seconds after the copy returns")]
    pub shutdown: bool,

    #[arg(long = "exclude-file", value_name = "PATH", help = "File to exclude, repeatable")]
    pub exclude_files: Vec<String>,

    #[arg(long = "exclude-dir", value_name = "PATH", help = "Folder to exclude, repeatable")]
    pub exclude_dirs: Vec<String>,

    #[arg(
        long,
        value_name = "TYPES",
        default_value = "",
        help = "Comma-separated file types to exclude, e.g. mp4,mp3"
    )]
    pub exclude_types: String,

    #[arg(
        long,
        value_name = "BYTES",
        default_value = "",
        help = "Exclude files larger than this size"
    )]
    pub max_size: String,

    #[arg(long, help = "Print the composed command without running it")]
    pub dry_run: bool,

    #[arg(long, help = "With --dry-run, print the composed command as JSON")]
    pub json: bool,
}
