//! Embedded image rating access via exiftool
//!
//! This module shells out to the `exiftool` command-line tool to read the
//! XMP rating field from image files. This approach is more reliable than
//! per-format parsing and works for every format exiftool understands.
//!
//! Install exiftool:
//! - Windows: `winget install OliverBetz.ExifTool` or download from https://exiftool.org
//! - macOS: `brew install exiftool`
//! - Linux: `apt install libimage-exiftool-perl` or equivalent

use std::path::Path;
use std::process::Command;

/// Common installation paths for exiftool on Windows
#[cfg(windows)]
const EXIFTOOL_PATHS: &[&str] = &[
    "exiftool", // In PATH
    r"C:\Program Files\exiftool\exiftool.exe",
    r"C:\Windows\exiftool.exe",
];

#[cfg(not(windows))]
const EXIFTOOL_PATHS: &[&str] = &[
    "exiftool", // In PATH
    "/usr/bin/exiftool",
    "/usr/local/bin/exiftool",
    "/opt/homebrew/bin/exiftool",
];

/// Errors raised while reading ratings through exiftool
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExifError {
    #[error("exiftool not found. Please install it: https://exiftool.org")]
    ToolMissing,

    #[error("exiftool failed: {0}")]
    Tool(String),
}

/// Capability to read the embedded star rating of an image file.
///
/// Production code uses [`ExifTool`]; tests substitute mock implementations.
/// The returned value is the raw rating text as reported by the reader
/// (`None` when the file carries no rating field at all) - parsing and
/// range-checking happen in the caller.
pub trait RatingReader {
    /// Read the raw rating value of `path`, or `None` if the field is absent.
    fn read_rating(&self, path: &Path) -> Result<Option<String>, ExifError>;
}

/// Production rating reader shelling out to exiftool.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifTool;

impl RatingReader for ExifTool {
    fn read_rating(&self, path: &Path) -> Result<Option<String>, ExifError> {
        let exiftool = find_exiftool().ok_or(ExifError::ToolMissing)?;

        let output = Command::new(exiftool)
            .arg("-XMP:Rating")
            .arg(path)
            .output()
            .map_err(|e| ExifError::Tool(format!("failed to run exiftool: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExifError::Tool(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_rating_output(&stdout))
    }
}

/// Find the exiftool executable, checking common installation paths
fn find_exiftool() -> Option<&'static str> {
    EXIFTOOL_PATHS
        .iter()
        .find(|&path| {
            Command::new(path)
                .arg("-ver")
                .output()
                .map(|o| o.status.success())
                .unwrap_or(false)
        })
        .map(|v| v as _)
}

/// Extract the raw rating value from exiftool's text output.
///
/// The rating line looks like `Rating : 5`; the value is whatever
/// follows the last colon on the first line mentioning "Rating".
pub fn parse_rating_output(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| line.contains("Rating"))
        .and_then(|line| line.rsplit(':').next())
        .map(|value| value.trim().to_string())
}

/// Check if exiftool is available on the system
pub fn is_exiftool_available() -> bool {
    find_exiftool().is_some()
}

/// Get exiftool version string (for diagnostics)
pub fn get_exiftool_version() -> Option<String> {
    let exiftool = find_exiftool()?;
    Command::new(exiftool)
        .arg("-ver")
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rating_output() {
        let output = "Rating                          : 5\n";
        assert_eq!(parse_rating_output(output), Some("5".to_string()));
    }

    #[test]
    fn test_parse_rating_output_no_rating_line() {
        let output = "ExifTool Version Number         : 13.10\n";
        assert_eq!(parse_rating_output(output), None);
    }

    #[test]
    fn test_parse_rating_output_empty() {
        // exiftool prints nothing when the requested field is absent
        assert_eq!(parse_rating_output(""), None);
    }

    #[test]
    fn test_parse_rating_output_takes_last_colon() {
        // Windows paths put extra colons on the line; the value is after the last one
        let output = "Rating (C:\\photos\\a.jpg)       : 3\n";
        assert_eq!(parse_rating_output(output), Some("3".to_string()));
    }

    #[test]
    fn test_parse_rating_output_non_numeric_preserved() {
        // Parsing to an integer is the caller's job
        let output = "Rating                          : five\n";
        assert_eq!(parse_rating_output(output), Some("five".to_string()));
    }

    #[test]
    fn test_is_exiftool_available() {
        // This test just ensures the function doesn't panic
        let _ = is_exiftool_available();
    }

    #[test]
    fn test_mock_reader_missing_field() {
        use mocks::MockRatingReader;
        let mock = MockRatingReader::empty();
        let result = mock.read_rating(Path::new("/photos/a.jpg")).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_mock_reader_error() {
        use mocks::MockRatingReader;
        let mock = MockRatingReader::with_error(ExifError::Tool("boom".to_string()));
        assert!(mock.read_rating(Path::new("/photos/a.jpg")).is_err());
    }
}
