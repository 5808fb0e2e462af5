//! Rating-driven tagging command.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Error;
use crate::exif::ExifTool;
use crate::finder::TagCli;
use crate::rater::{self, RateOptions, RateOutcome};

use super::prompt_for_directory;

/// Tag images with the color label matching their star rating
pub fn cmd_rate_tags(
    path: Option<&Path>,
    dry_run: bool,
    recursive: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let dir: PathBuf = match path {
        Some(p) => p.to_path_buf(),
        None => prompt_for_directory("Enter the path to your image directory: ")?
            .unwrap_or_default(),
    };

    let options = RateOptions {
        extensions: config.rate.extensions.clone(),
        recursive,
        dry_run,
    };

    let reports = match rater::rate_directory(&dir, &ExifTool, &TagCli, &options) {
        Ok(reports) => reports,
        Err(Error::NotADirectory(p)) => {
            eprintln!("Error: {:?} is not a valid directory.", p);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    if reports.is_empty() {
        println!("No image files found.");
        return Ok(());
    }

    if dry_run {
        println!("DRY RUN - no changes will be made\n");
    }
    println!("Rating {} file(s)...\n", reports.len());

    let mut tagged_count = 0;
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
            RateOutcome::Tagged { rating, label } => {
                if dry_run {
                    println!("✓ rating {}, would tag {}", rating, label);
                } else {
                    println!("✓ rating {}, tagged {}", rating, label);
                }
                tagged_count += 1;
            }
            RateOutcome::NoMapping { rating } => {
                println!("✗ rating {}: no tag mapping found", rating);
                skip_count += 1;
            }
            RateOutcome::Invalid { raw } => {
                println!("✗ invalid rating value: {}", raw);
                skip_count += 1;
            }
            RateOutcome::Missing => {
                println!("✗ rating not found");
                skip_count += 1;
            }
            RateOutcome::Failed { message } => {
                println!("✗ error: {}", message);
                fail_count += 1;
            }
        }
    }

    println!();
    println!(
        "Done! {} tagged, {} skipped, {} errors",
        tagged_count, skip_count, fail_count
    );

    if dry_run && tagged_count > 0 {
        println!("\nRun without --dry-run to apply tags.");
    }

    Ok(())
}
