//! Persisting analysis results
//!
//! The text transcript is what the interactive session offers to save; the
//! CSV companion file is an optional field/value dump written next to it.

use crate::display::transcript;
use crate::types::AnalysisReport;
use crate::Result;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(feature = "csv")]
use crate::{display::location_fields, error::MetaxError};

/// File name used when the user just presses enter at the save prompt
pub const DEFAULT_OUTPUT_FILE: &str = "location_output.txt";

/// Resolve the user's answer to the filename prompt
pub fn resolve_output_path(input: &str) -> PathBuf {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        PathBuf::from(DEFAULT_OUTPUT_FILE)
    } else {
        PathBuf::from(trimmed)
    }
}

/// Write the report transcript to `path`, replacing any existing file
pub fn save_transcript(report: &AnalysisReport, path: &Path) -> Result<PathBuf> {
    let text = transcript(report);
    fs::write(path, text.as_bytes())
        .with_context(|| format!("Failed to write transcript: {path:?}"))?;
    debug!("Wrote {} bytes to {:?}", text.len(), path);
    Ok(path.to_path_buf())
}

/// `<stem>.csv` alongside a saved transcript
pub fn csv_companion_path(transcript_path: &Path) -> PathBuf {
    transcript_path.with_extension("csv")
}

/// Export every tag and derived location value as `field,value` rows
#[cfg(feature = "csv")]
pub fn export_to_csv(report: &AnalysisReport, output_path: &Path) -> Result<PathBuf> {
    let mut writer = csv::Writer::from_path(output_path)
        .map_err(|e| MetaxError::Export(format!("{output_path:?}: {e}")))?;

    let write_err = |e: csv::Error| MetaxError::Export(format!("{output_path:?}: {e}"));

    writer.write_record(["field", "value"]).map_err(write_err)?;
    for (name, value) in report.tags.iter() {
        writer
            .write_record([name, value.to_string().as_str()])
            .map_err(write_err)?;
    }
    if let Some(location) = &report.location {
        for (field, value) in location_fields(location) {
            writer.write_record([field, value.as_str()]).map_err(write_err)?;
        }
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush CSV file: {output_path:?}"))?;
    debug!("Exported CSV to {:?}", output_path);
    Ok(output_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_output_path() {
        assert_eq!(resolve_output_path(""), PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(resolve_output_path("   \n"), PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(resolve_output_path(" trip.txt\n"), PathBuf::from("trip.txt"));
    }

    #[test]
    fn test_csv_companion_path() {
        assert_eq!(
            csv_companion_path(Path::new("/trips/location_output.txt")),
            PathBuf::from("/trips/location_output.csv")
        );
        assert_eq!(
            csv_companion_path(Path::new("notes")),
            PathBuf::from("notes.csv")
        );
    }
}
