//! Photo Minder - Finder tag management for photo libraries.
//!
//! This application applies macOS Finder color labels to images based on
//! their embedded star ratings, and copies Finder tags from JPEG previews
//! onto their raw siblings. Metadata reading and tag storage are delegated
//! to the external `exiftool` and `tag` command-line tools.

pub mod cli;
pub mod config;
pub mod copier;
pub mod error;
pub mod exif;
pub mod finder;
pub mod rater;
pub mod scanner;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("photo_minder=info".parse().unwrap()))
        .init();

    let config = config::load();

    cli::run_command(&args, &config)
}
