//! JSON report writer.
//!
//! The report document is a pretty-printed JSON array of consolidated hop
//! records; this is the contract with downstream consumers of the stats.

use crate::parser::schema::ConsolidatedHop;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write the consolidated hop table to a JSON file
///
/// **Public** - main entry point for report output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - empty path or existing directory
pub fn write_report(
    hops: &[ConsolidatedHop],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("writing report to {}", output_path.display());
    validate_output_path(output_path)?;
    ensure_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, hops).map_err(OutputError::SerializationFailed)?;

    info!("report written ({} hops)", hops.len());
    Ok(())
}

/// Read a consolidated hop table back from a JSON file
///
/// **Public** - used by the validate command and tests
pub fn read_report(input_path: impl AsRef<Path>) -> Result<Vec<ConsolidatedHop>, OutputError> {
    let input_path = input_path.as_ref();
    debug!("reading report from {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let hops: Vec<ConsolidatedHop> =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!("report loaded ({} hops)", hops.len());
    Ok(hops)
}

/// Reject empty paths and existing directories
///
/// **Private** - shared with the SVG writer
pub(super) fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("path is empty".to_string()));
    }
    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "path is a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Create missing parent directories
///
/// **Private** - shared with the SVG writer
pub(super) fn ensure_parent_dirs(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() && !parent.as_os_str().is_empty() {
            debug!("creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::Responder;
    use tempfile::NamedTempFile;

    fn sample_report() -> Vec<ConsolidatedHop> {
        vec![ConsolidatedHop {
            hop: 1,
            min: 1.111,
            max: 3.333,
            avg: 2.222,
            med: 2.222,
            hosts: vec![Responder::new("10.0.0.1", "(host1)")],
        }]
    }

    #[test]
    fn test_write_and_read_report() {
        let report = sample_report();
        let temp_file = NamedTempFile::new().unwrap();

        write_report(&report, temp_file.path()).unwrap();
        let loaded = read_report(temp_file.path()).unwrap();

        assert_eq!(loaded, report);
    }

    #[test]
    fn test_report_is_a_json_array() {
        let temp_file = NamedTempFile::new().unwrap();
        write_report(&sample_report(), temp_file.path()).unwrap();

        let text = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(text.trim_start().starts_with('['));
        assert!(text.contains("\"hop\": 1"));
    }

    #[test]
    fn test_validate_output_path_empty() {
        assert!(validate_output_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_output_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("nested/dirs/report.json");

        write_report(&sample_report(), &nested).unwrap();
        assert!(nested.exists());
    }
}
