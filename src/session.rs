//! Interactive prompt loop
//!
//! Asks for image paths until the user types `exit` (or input ends), printing
//! a full report for each image and offering to save it. Nothing that happens
//! to a single image ends the loop; only I/O errors on the terminal streams
//! are returned.

use crate::analysis::analyze_image;
use crate::display::print_report;
use crate::export::{resolve_output_path, save_transcript};
use crate::geocode::ReverseGeocoder;
use crate::types::AnalysisReport;
use crate::Result;
use console::style;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, warn};

#[cfg(feature = "csv")]
use crate::export::{csv_companion_path, export_to_csv};

const PATH_PROMPT: &str = "Enter image path or type EXIT:";
const SAVE_PROMPT: &str = "Save output to text file? (y/n):";
const FILENAME_PROMPT: &str = "Enter filename:";
const AGAIN_PROMPT: &str = "Analyze another image? (y/n):";

/// Per-run behavior switches
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Write a `field,value` CSV beside every saved transcript
    pub csv_export: bool,
}

/// Drive the prompt loop over arbitrary line input and output streams
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    options: &SessionOptions,
    geocoder: &dyn ReverseGeocoder,
) -> Result<()> {
    print_banner(output)?;

    loop {
        let Some(line) = prompt(input, output, PATH_PROMPT)? else {
            break;
        };
        let entry = line.trim();
        if entry.eq_ignore_ascii_case("exit") {
            break;
        }
        if entry.is_empty() {
            continue;
        }

        let path = Path::new(entry);
        if !path.is_file() {
            debug!("Rejected path {:?}", path);
            writeln!(output, "{}", style("File not found.").red())?;
            continue;
        }

        match analyze_image(path, geocoder) {
            Ok(report) => {
                writeln!(output)?;
                print_report(output, &report)?;
                writeln!(output)?;
                if !offer_save(input, output, options, &report)? {
                    break;
                }
            }
            Err(e) => {
                warn!("Analysis of {:?} failed: {:#}", path, e);
                writeln!(
                    output,
                    "{} {:#}",
                    style("Could not read image metadata:").red(),
                    e
                )?;
            }
        }

        match prompt(input, output, AGAIN_PROMPT)? {
            Some(answer) if is_yes(&answer) => continue,
            _ => break,
        }
    }

    writeln!(output, "Goodbye.")?;
    output.flush()?;
    Ok(())
}

fn print_banner<W: Write>(output: &mut W) -> Result<()> {
    let rule = "=".repeat(40);
    writeln!(output, "{}", style(&rule).cyan())?;
    writeln!(
        output,
        "{}",
        style(format!("   ExiF MeTaX v{}", env!("CARGO_PKG_VERSION"))).bold()
    )?;
    writeln!(output, "   EXIF metadata & GPS location inspector")?;
    writeln!(output, "{}", style(&rule).cyan())?;
    Ok(())
}

/// Print `text`, then read one line. `None` means input is exhausted.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{} ", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }
    Ok(Some(line))
}

fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Returns `false` when input ran out mid-prompt
fn offer_save<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    options: &SessionOptions,
    report: &AnalysisReport,
) -> Result<bool> {
    let Some(answer) = prompt(input, output, SAVE_PROMPT)? else {
        return Ok(false);
    };
    if !is_yes(&answer) {
        return Ok(true);
    }
    let Some(name) = prompt(input, output, FILENAME_PROMPT)? else {
        return Ok(false);
    };

    let target = resolve_output_path(&name);
    match save_transcript(report, &target) {
        Ok(saved) => {
            let message = format!("Saved to {}", saved.display());
            writeln!(output, "{}", style(message).green())?;
            if options.csv_export {
                save_csv(output, report, &saved)?;
            }
        }
        Err(e) => {
            warn!("{:#}", e);
            writeln!(output, "{}", style("Error saving file.").red())?;
        }
    }
    Ok(true)
}

#[cfg(feature = "csv")]
fn save_csv<W: Write>(output: &mut W, report: &AnalysisReport, saved: &Path) -> Result<()> {
    match export_to_csv(report, &csv_companion_path(saved)) {
        Ok(csv_path) => writeln!(output, "CSV saved to {}", csv_path.display())?,
        Err(e) => {
            warn!("{:#}", e);
            writeln!(output, "{}", style("Error saving CSV file.").red())?;
        }
    }
    Ok(())
}

#[cfg(not(feature = "csv"))]
fn save_csv<W: Write>(_output: &mut W, _report: &AnalysisReport, _saved: &Path) -> Result<()> {
    warn!("CSV export requested but the csv feature is disabled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::Offline;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(script: &str, options: &SessionOptions) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_session(&mut input, &mut output, options, &Offline).unwrap();
        console::strip_ansi_codes(&String::from_utf8(output).unwrap()).to_string()
    }

    fn bare_jpeg(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("bare.jpg");
        fs::write(&path, [0xFF, 0xD8, 0xFF, 0xD9]).unwrap();
        path
    }

    #[test]
    fn test_exit_is_case_insensitive() {
        let text = run("ExIt\n", &SessionOptions::default());
        assert!(text.contains("ExiF MeTaX"));
        assert!(text.contains(PATH_PROMPT));
        assert!(text.trim_end().ends_with("Goodbye."));
    }

    #[test]
    fn test_eof_ends_session() {
        let text = run("", &SessionOptions::default());
        assert!(text.trim_end().ends_with("Goodbye."));
    }

    #[test]
    fn test_missing_file_keeps_prompting() {
        let text = run("/definitely/not/here.jpg\n\nexit\n", &SessionOptions::default());
        assert_eq!(text.matches("File not found.").count(), 1);
        assert_eq!(text.matches(PATH_PROMPT).count(), 3);
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = TempDir::new().unwrap();
        let script = format!("{}\nexit\n", dir.path().display());
        let text = run(&script, &SessionOptions::default());
        assert!(text.contains("File not found."));
    }

    #[test]
    fn test_image_without_metadata_then_stop() {
        let dir = TempDir::new().unwrap();
        let image = bare_jpeg(&dir);
        let script = format!("{}\nn\nn\n", image.display());

        let text = run(&script, &SessionOptions::default());

        assert!(text.contains("=== DEVICE INFO ==="));
        assert!(text.contains("Make: N/A"));
        assert!(text.contains("No GPS coordinates found."));
        assert!(text.contains(AGAIN_PROMPT));
        assert!(text.trim_end().ends_with("Goodbye."));
    }

    #[test]
    fn test_unreadable_image_reports_and_continues() {
        let dir = TempDir::new().unwrap();
        let junk = dir.path().join("junk.jpg");
        fs::write(&junk, b"not an image at all").unwrap();
        let script = format!("{}\ny\nexit\n", junk.display());

        let text = run(&script, &SessionOptions::default());

        assert!(text.contains("Could not read image metadata:"));
        assert_eq!(text.matches(PATH_PROMPT).count(), 2);
    }

    #[test]
    fn test_save_transcript_to_named_file() {
        let dir = TempDir::new().unwrap();
        let image = bare_jpeg(&dir);
        let target = dir.path().join("out.txt");
        let script = format!("{}\ny\n{}\nn\n", image.display(), target.display());

        let text = run(&script, &SessionOptions::default());

        assert!(text.contains(&format!("Saved to {}", target.display())));
        assert!(target.exists());
        assert!(!dir.path().join("out.csv").exists());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let image = bare_jpeg(&dir);
        let target = dir.path().join("missing_dir").join("out.txt");
        let script = format!("{}\ny\n{}\nn\n", image.display(), target.display());

        let text = run(&script, &SessionOptions::default());

        assert!(text.contains("Error saving file."));
        assert!(text.contains(AGAIN_PROMPT));
    }

    #[cfg(feature = "csv")]
    #[test]
    fn test_csv_companion_written() {
        let dir = TempDir::new().unwrap();
        let image = bare_jpeg(&dir);
        let target = dir.path().join("trip.txt");
        let script = format!("{}\ny\n{}\nn\n", image.display(), target.display());

        let text = run(&script, &SessionOptions { csv_export: true });

        let csv_path = dir.path().join("trip.csv");
        assert!(text.contains("CSV saved to"));
        let csv = fs::read_to_string(csv_path).unwrap();
        assert!(csv.starts_with("field,value"));
    }
}
