//! Loads pre-captured traceroute output from a test directory.
//!
//! Files are read in sorted filename order so run ordering, and with it the
//! "first run reporting a hop supplies the hosts" tie-break, is
//! deterministic regardless of directory iteration order.

use super::Capture;
use crate::utils::config::CAPTURE_EXTENSION;
use crate::utils::error::TraceError;
use log::{debug, info};
use std::path::Path;

/// Load every `*.out` capture file from a directory
///
/// **Public** - called by the analyze command
///
/// # Errors
/// * `TraceError::NotADirectory` - the path is missing or not a directory
/// * `TraceError::NoCaptures` - the directory holds no `*.out` files
/// * `TraceError::Io` - a capture file could not be read
pub fn load_captures(directory: impl AsRef<Path>) -> Result<Vec<Capture>, TraceError> {
    let directory = directory.as_ref();

    if !directory.is_dir() {
        return Err(TraceError::NotADirectory(directory.display().to_string()));
    }

    let mut paths: Vec<_> = std::fs::read_dir(directory)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().is_some_and(|ext| ext == CAPTURE_EXTENSION)
        })
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(TraceError::NoCaptures {
            directory: directory.display().to_string(),
            extension: CAPTURE_EXTENSION,
        });
    }

    info!("loading {} capture files from {}", paths.len(), directory.display());

    let mut captures = Vec::with_capacity(paths.len());
    for path in paths {
        let text = std::fs::read_to_string(&path)?;
        debug!("loaded {} ({} bytes)", path.display(), text.len());
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        captures.push(Capture { label, text });
    }

    Ok(captures)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_captures_sorted_by_filename() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("b.out"), "second").unwrap();
        std::fs::write(temp_dir.path().join("a.out"), "first").unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let captures = load_captures(temp_dir.path()).unwrap();

        assert_eq!(captures.len(), 2);
        assert_eq!(captures[0].label, "a.out");
        assert_eq!(captures[0].text, "first");
        assert_eq!(captures[1].label, "b.out");
    }

    #[test]
    fn test_load_captures_missing_directory() {
        let result = load_captures("/no/such/directory");
        assert!(matches!(result, Err(TraceError::NotADirectory(_))));
    }

    #[test]
    fn test_load_captures_empty_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = load_captures(temp_dir.path());
        assert!(matches!(result, Err(TraceError::NoCaptures { .. })));
    }
}
