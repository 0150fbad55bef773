//! CLI output formatting.
//!
//! Human-readable progress lines for a batch run: resolved paths, discovered
//! files, per-file before/after dimensions and sizes, and a final tally.
//! Not machine-parseable and not a stable contract — the JSON report is the
//! structured surface.
//!
//! Each concern has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::batch::{BatchEvent, BatchOutcome, BatchReport, FileStatus};
use std::path::Path;

/// Format a byte count as kilobytes with two decimals, e.g. `234.56 KB`.
fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Filename portion of a path, for compact per-file lines.
fn short_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format the run header: working directory and resolved folders.
pub fn format_run_header(cwd: &Path, input_dir: &Path, output_dir: &Path) -> Vec<String> {
    vec![
        format!("Working directory: {}", cwd.display()),
        format!("Input folder: {}", input_dir.display()),
        format!("Output folder: {}", output_dir.display()),
    ]
}

/// Format one progress event from the batch loop.
pub fn format_batch_event(event: &BatchEvent) -> Vec<String> {
    match event {
        BatchEvent::Discovered { files } => {
            let mut lines = vec![format!("Found {} image(s) to process", files.len())];
            for file in files {
                lines.push(format!("    {}", short_name(file)));
            }
            lines
        }
        BatchEvent::FileFinished(report) => match &report.status {
            FileStatus::Resized(outcome) => vec![
                short_name(&report.source),
                format!(
                    "    {}x{} -> {}x{}",
                    outcome.original.width,
                    outcome.original.height,
                    outcome.resized.width,
                    outcome.resized.height
                ),
                format!(
                    "    {} -> {}",
                    format_kb(outcome.original_bytes),
                    format_kb(outcome.resized_bytes)
                ),
                format!("    Saved: {}", report.output.display()),
            ],
            FileStatus::Failed { error } => vec![
                short_name(&report.source),
                format!("    FAILED: {error}"),
            ],
        },
    }
}

/// Format the end-of-run summary for a report.
pub fn format_summary(report: &BatchReport) -> Vec<String> {
    match &report.outcome {
        BatchOutcome::InputDirMissing => vec![format!(
            "Error: input folder '{}' does not exist",
            report.input_dir.display()
        )],
        BatchOutcome::NoMatchingFiles => {
            vec!["No image files found in the input folder".to_string()]
        }
        BatchOutcome::Completed { .. } => {
            let (resized, failed) = report.tally();
            vec![format!("{resized} resized, {failed} failed")]
        }
    }
}

pub fn print_run_header(cwd: &Path, input_dir: &Path, output_dir: &Path) {
    for line in format_run_header(cwd, input_dir, output_dir) {
        println!("{line}");
    }
}

pub fn print_batch_event(event: &BatchEvent) {
    for line in format_batch_event(event) {
        println!("{line}");
    }
}

pub fn print_summary(report: &BatchReport) {
    for line in format_summary(report) {
        println!("{line}");
    }
}
