//! SVG chart output writer.

use super::json::{ensure_parent_dirs, validate_output_path};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write rendered SVG content to a file
///
/// **Public** - main entry point for chart output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - empty path or existing directory
pub fn write_chart(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("writing chart to {}", output_path.display());
    validate_output_path(output_path)?;
    ensure_parent_dirs(output_path)?;

    if output_path.extension().is_some_and(|ext| ext != "svg") {
        debug!("chart path has a non-svg extension: {}", output_path.display());
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(svg_content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("chart written ({} bytes)", svg_content.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"></svg>"#;

    #[test]
    fn test_write_chart() {
        let temp_file = NamedTempFile::new().unwrap();
        write_chart(SVG, temp_file.path()).unwrap();
        assert_eq!(std::fs::read_to_string(temp_file.path()).unwrap(), SVG);
    }

    #[test]
    fn test_write_chart_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("charts/latency.svg");
        write_chart(SVG, &nested).unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn test_write_chart_rejects_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(write_chart(SVG, temp_dir.path()).is_err());
    }
}
