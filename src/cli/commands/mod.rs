//! CLI command definitions and dispatch.
//!
//! This module provides the command-line interface for Photo Minder.
//! Each subcommand is implemented in its own submodule for maintainability:
//! - `rate`: Rating-driven color labeling
//! - `copy`: Tag copying from previews to raw siblings
//! - `tools`: External tool diagnostics

mod copy;
mod rate;
mod tools;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

pub use copy::cmd_copy_tags;
pub use rate::cmd_rate_tags;
pub use tools::cmd_check_tools;

/// Photo Minder CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Tag images with the color label matching their star rating
    RateTags {
        /// Directory to process (prompted for when omitted)
        path: Option<PathBuf>,
        /// Dry run - show what would be tagged without changing any file
        #[arg(long)]
        dry_run: bool,
        /// Recursive directory scan
        #[arg(short, long)]
        recursive: bool,
    },
    /// Copy Finder tags from JPEG previews onto their raw siblings
    CopyTags {
        /// Directory to process (prompted for when omitted; blank input
        /// means the current directory)
        path: Option<PathBuf>,
        /// Merge with the sibling's existing tags instead of replacing them
        #[arg(long)]
        merge: bool,
        /// Dry run - show what would be copied without changing any file
        #[arg(long)]
        dry_run: bool,
        /// Recursive directory scan
        #[arg(short, long)]
        recursive: bool,
    },
    /// Check if the external metadata and tagging tools are installed
    CheckTools,
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    match &cli.command {
        Commands::RateTags {
            path,
            dry_run,
            recursive,
        } => cmd_rate_tags(path.as_deref(), *dry_run, *recursive, config),
        Commands::CopyTags {
            path,
            merge,
            dry_run,
            recursive,
        } => cmd_copy_tags(path.as_deref(), *merge, *dry_run, *recursive, config),
        Commands::CheckTools => cmd_check_tools(),
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Print installation instructions for exiftool
pub(crate) fn print_exiftool_install_instructions() {
    eprintln!("Error: exiftool not found.");
    eprintln!("Install ExifTool:");
    eprintln!("  Windows: winget install OliverBetz.ExifTool");
    eprintln!("  macOS:   brew install exiftool");
    eprintln!("  Linux:   apt install libimage-exiftool-perl");
}

/// Print installation instructions for the tag tool
pub(crate) fn print_tag_install_instructions() {
    eprintln!("Error: 'tag' command not found.");
    eprintln!("Install tag:");
    eprintln!("  macOS: brew install tag");
}

/// Prompt for a directory path on standard input.
///
/// Returns `None` when the user submits a blank line; callers decide what
/// blank means (invalid for rating, current directory for copying).
pub(crate) fn prompt_for_directory(prompt: &str) -> anyhow::Result<Option<PathBuf>> {
    use std::io::Write;

    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let trimmed = line.trim();

    Ok((!trimmed.is_empty()).then(|| PathBuf::from(trimmed)))
}
