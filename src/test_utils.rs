//! Test utilities and fixtures for photo-minder tests.
//!
//! This module provides common filesystem helpers to reduce boilerplate in
//! tests. External collaborators are mocked via the `mocks` modules in
//! [`crate::exif`] and [`crate::finder`].
//!
//! # Example
//!
//! ```ignore
//! use photo_minder::test_utils::{photo_pair, touch};
//!
//! #[test]
//! fn test_something() {
//!     let dir = tempfile::tempdir().unwrap();
//!     let (jpeg, raw) = photo_pair(dir.path(), "shot");
//!     // ... test logic
//! }
//! ```

use std::path::{Path, PathBuf};

/// Create an empty file at `path`.
///
/// The files these tests scan are never opened for content, only listed
/// and matched by name, so empty placeholders are enough.
pub fn touch(path: &Path) {
    std::fs::write(path, b"").expect("Failed to create test file");
}

/// Create a `<stem>.jpg` / `<stem>.ARW` pair in `dir`.
///
/// Returns the (jpeg, raw) paths.
pub fn photo_pair(dir: &Path, stem: &str) -> (PathBuf, PathBuf) {
    let jpeg = dir.join(format!("{}.jpg", stem));
    let raw = dir.join(format!("{}.ARW", stem));
    touch(&jpeg);
    touch(&raw);
    (jpeg, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_touch_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("file.jpg");
        touch(&path);
        assert!(path.exists());
    }

    #[test]
    fn test_photo_pair_creates_both_files() {
        let dir = tempdir().unwrap();
        let (jpeg, raw) = photo_pair(dir.path(), "shot");
        assert!(jpeg.exists());
        assert!(raw.exists());
        assert_eq!(jpeg.extension().unwrap(), "jpg");
        assert_eq!(raw.extension().unwrap(), "ARW");
    }
}
