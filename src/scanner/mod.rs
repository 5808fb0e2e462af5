//! Directory scanning for image files.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Collect the files under `dir` whose extension matches `extensions`
/// (case-insensitive).
///
/// The default scan lists the directory itself; with `recursive` set,
/// subdirectories are walked too. Results are sorted so processing order
/// is stable. Matching extensions case-insensitively means the `.jpg` /
/// `.JPG` spellings of one file are only ever seen once.
pub fn image_files(dir: &Path, extensions: &[String], recursive: bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::not_a_directory(dir));
    }

    let mut files: Vec<PathBuf> = if recursive {
        walkdir::WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .filter(|p| has_matching_extension(p, extensions))
            .collect()
    } else {
        std::fs::read_dir(dir)?
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
            .map(|e| e.path())
            .filter(|p| has_matching_extension(p, extensions))
            .collect()
    };

    files.sort();
    Ok(files)
}

fn has_matching_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}
