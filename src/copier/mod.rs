//! Copying Finder tags from JPEG previews to raw siblings.
//!
//! Cameras writing JPEG+raw pairs leave the raw file untagged when the
//! preview gets labeled in Finder or a culling tool. This pass finds each
//! JPEG's same-named raw sibling and carries the preview's tags over.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::finder::TagStore;
use crate::scanner;

/// Options for a tag-copy pass over a directory
#[derive(Debug, Clone)]
pub struct CopyOptions {
    /// Extensions identifying preview files (case-insensitive)
    pub jpeg_extensions: Vec<String>,
    /// Sibling candidate extensions, tried in order; first existing wins
    pub raw_extensions: Vec<String>,
    /// Merge with the sibling's existing tags instead of replacing them
    pub merge: bool,
    /// Descend into subdirectories
    pub recursive: bool,
    /// Report what would be copied without touching any file
    pub dry_run: bool,
}

/// What happened to a single JPEG during a tag-copy pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Tags written to the sibling (or would be, on dry run)
    Copied {
        sibling: PathBuf,
        tags: Vec<String>,
    },
    /// No raw sibling exists for this preview
    SiblingMissing,
    /// The preview carries no tags; the sibling was left untouched
    NoTags,
    /// Listing or setting tags failed; the pass continued
    Failed { message: String },
}

/// Per-file result of a tag-copy pass
#[derive(Debug, Clone)]
pub struct CopyReport {
    pub path: PathBuf,
    pub outcome: CopyOutcome,
}

/// Locate the raw sibling of `jpeg`, trying `raw_extensions` in order.
pub fn sibling_raw(jpeg: &Path, raw_extensions: &[String]) -> Option<PathBuf> {
    raw_extensions
        .iter()
        .map(|ext| jpeg.with_extension(ext))
        .find(|candidate| candidate.exists())
}

/// Copy each JPEG's tags onto its raw sibling under `dir`.
///
/// Tool availability is the caller's precondition; here every per-file
/// failure is captured in that file's report and the pass continues.
pub fn copy_directory<T>(dir: &Path, store: &T, options: &CopyOptions) -> Result<Vec<CopyReport>>
where
    T: TagStore,
{
    let jpegs = scanner::image_files(dir, &options.jpeg_extensions, options.recursive)?;

    let reports = jpegs
        .into_iter()
        .map(|path| {
            let outcome = copy_file(&path, store, options);
            if let CopyOutcome::Failed { ref message } = outcome {
                tracing::warn!("failed to process {:?}: {}", path, message);
            } else {
                tracing::debug!("processed {:?}: {:?}", path, outcome);
            }
            CopyReport { path, outcome }
        })
        .collect();

    Ok(reports)
}

fn copy_file<T>(jpeg: &Path, store: &T, options: &CopyOptions) -> CopyOutcome
where
    T: TagStore,
{
    let Some(sibling) = sibling_raw(jpeg, &options.raw_extensions) else {
        return CopyOutcome::SiblingMissing;
    };

    let tags = match store.list(jpeg) {
        Ok(tags) => tags,
        Err(e) => {
            return CopyOutcome::Failed {
                message: e.to_string(),
            };
        }
    };

    if tags.is_empty() {
        return CopyOutcome::NoTags;
    }

    let target_tags = if options.merge {
        match store.list(&sibling) {
            Ok(existing) => merge_tags(&tags, &existing),
            Err(e) => {
                return CopyOutcome::Failed {
                    message: e.to_string(),
                };
            }
        }
    } else {
        tags
    };

    if !options.dry_run
        && let Err(e) = store.set(&sibling, &target_tags)
    {
        return CopyOutcome::Failed {
            message: e.to_string(),
        };
    }

    CopyOutcome::Copied {
        sibling,
        tags: target_tags,
    }
}

/// Source tags first, then existing sibling tags not already present.
fn merge_tags(source: &[String], existing: &[String]) -> Vec<String> {
    let mut merged = source.to_vec();
    for tag in existing {
        if !merged.contains(tag) {
            merged.push(tag.clone());
        }
    }
    merged
}
