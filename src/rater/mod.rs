//! Rating-driven Finder tagging.
//!
//! Maps the embedded star rating of each image in a directory to a fixed
//! color label and applies it as a Finder tag. One rating, one label:
//! 1=Red, 2=Orange, 3=Yellow, 4=Green, 5=Blue. Ratings outside that range
//! are reported, never applied.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::exif::RatingReader;
use crate::finder::TagStore;
use crate::scanner;

/// Color label for a star rating, or `None` for unmapped values.
///
/// The mapping is fixed for the process lifetime.
pub fn label_for(rating: i64) -> Option<&'static str> {
    match rating {
        1 => Some("Red"),
        2 => Some("Orange"),
        3 => Some("Yellow"),
        4 => Some("Green"),
        5 => Some("Blue"),
        _ => None,
    }
}

/// Options for a rating pass over a directory
#[derive(Debug, Clone)]
pub struct RateOptions {
    /// Extension allow-list for qualifying files (case-insensitive)
    pub extensions: Vec<String>,
    /// Descend into subdirectories
    pub recursive: bool,
    /// Report what would be tagged without touching any file
    pub dry_run: bool,
}

/// What happened to a single file during a rating pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateOutcome {
    /// Rating mapped and the label was applied (or would be, on dry run)
    Tagged {
        rating: i64,
        label: &'static str,
    },
    /// Rating parsed but has no label mapping
    NoMapping { rating: i64 },
    /// Rating field present but not an integer
    Invalid { raw: String },
    /// File carries no rating field
    Missing,
    /// Reading or tagging this file failed; the pass continued
    Failed { message: String },
}

/// Per-file result of a rating pass
#[derive(Debug, Clone)]
pub struct RateReport {
    pub path: PathBuf,
    pub outcome: RateOutcome,
}

/// Tag every qualifying image under `dir` according to its rating.
///
/// The only fatal condition is `dir` not being a directory; every per-file
/// failure is captured in that file's report and the pass continues.
pub fn rate_directory<R, T>(
    dir: &Path,
    reader: &R,
    store: &T,
    options: &RateOptions,
) -> Result<Vec<RateReport>>
where
    R: RatingReader,
    T: TagStore,
{
    let files = scanner::image_files(dir, &options.extensions, options.recursive)?;

    let reports = files
        .into_iter()
        .map(|path| {
            let outcome = rate_file(&path, reader, store, options.dry_run);
            if let RateOutcome::Failed { ref message } = outcome {
                tracing::warn!("failed to process {:?}: {}", path, message);
            } else {
                tracing::debug!("processed {:?}: {:?}", path, outcome);
            }
            RateReport { path, outcome }
        })
        .collect();

    Ok(reports)
}

fn rate_file<R, T>(path: &Path, reader: &R, store: &T, dry_run: bool) -> RateOutcome
where
    R: RatingReader,
    T: TagStore,
{
    let raw = match reader.read_rating(path) {
        Ok(Some(raw)) => raw,
        Ok(None) => return RateOutcome::Missing,
        Err(e) => {
            return RateOutcome::Failed {
                message: e.to_string(),
            };
        }
    };

    let rating = match raw.parse::<i64>() {
        Ok(r) => r,
        Err(_) => return RateOutcome::Invalid { raw },
    };

    let Some(label) = label_for(rating) else {
        return RateOutcome::NoMapping { rating };
    };

    if !dry_run
        && let Err(e) = store.set(path, &[label.to_string()])
    {
        return RateOutcome::Failed {
            message: e.to_string(),
        };
    }

    RateOutcome::Tagged { rating, label }
}
