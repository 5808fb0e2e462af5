//! Tag copying command.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::copier::{self, CopyOptions, CopyOutcome};
use crate::finder::{self, TagCli};

use super::{print_tag_install_instructions, prompt_for_directory};

/// Copy Finder tags from JPEG previews onto their raw siblings
pub fn cmd_copy_tags(
    path: Option<&Path>,
    merge: bool,
    dry_run: bool,
    recursive: bool,
    config: &Config,
) -> anyhow::Result<()> {
    // The tagging tool is required for anything this command does; bail
    // before touching the filesystem.
    if !finder::is_tag_available() {
        print_tag_install_instructions();
        std::process::exit(1);
    }

    let dir: PathBuf = match path {
        Some(p) => p.to_path_buf(),
        None => {
            match prompt_for_directory("Enter directory path (or press Enter for current dir): ")? {
                Some(p) => p,
                None => std::env::current_dir()?,
            }
        }
    };

    println!("Processing directory: {}", dir.display());

    let options = CopyOptions {
        jpeg_extensions: config.copy.jpeg_extensions.clone(),
        raw_extensions: config.copy.raw_extensions.clone(),
        merge: merge || config.copy.merge,
        recursive,
        dry_run,
    };

    let reports = copier::copy_directory(&dir, &TagCli, &options)?;

    if reports.is_empty() {
        println!("No JPEG files found.");
        return Ok(());
    }

    if dry_run {
        println!("DRY RUN - no changes will be made\n");
    }

    let mut copied_count = 0;
    let mut skip_count = 0;
    let mut fail_count = 0;

    let total = reports.len();
    for (i, report) in reports.iter().enumerate() {
        let filename = report
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("?");

        print!("[{}/{}] {}... ", i + 1, total, filename);
        match &report.outcome {
            CopyOutcome::Copied { sibling, tags } => {
                let sibling_name = sibling
                    .file_name()
                    .and_then(|s| s.to_str())
                    .unwrap_or("?");
                if dry_run {
                    println!("✓ would copy [{}] to {}", tags.join(", "), sibling_name);
                } else {
                    println!("✓ copied [{}] to {}", tags.join(", "), sibling_name);
                }
                copied_count += 1;
            }
            CopyOutcome::SiblingMissing => {
                println!("✗ ARW file not found");
                skip_count += 1;
            }
            CopyOutcome::NoTags => {
                println!("✗ no tags found");
                skip_count += 1;
            }
            CopyOutcome::Failed { message } => {
                println!("✗ error: {}", message);
                fail_count += 1;
            }
        }
    }

    println!();
    println!(
        "Done! {} copied, {} skipped, {} errors",
        copied_count, skip_count, fail_count
    );

    if dry_run && copied_count > 0 {
        println!("\nRun without --dry-run to copy tags.");
    }

    Ok(())
}
