//! Folder processing: discovery, the per-file resize loop, and the batch report.
//!
//! This is the orchestration layer over [`crate::imaging`]. One call to
//! [`run`] handles a whole folder:
//!
//! 1. Resolve input/output directories to absolute paths.
//! 2. Bail out early (non-fatally) if the input directory is missing.
//! 3. Ensure the output directory exists.
//! 4. Discover candidate files by extension — direct children only, no
//!    recursion.
//! 5. Resize each file through the backend, isolating failures per file.
//!
//! A failing file is recorded in the report and the batch continues; one
//! corrupt image never aborts the rest of the run. The returned
//! [`BatchReport`] is serializable, so the CLI can write it as JSON.
//!
//! Execution is fully sequential: one file is decoded, resized, and written
//! before the next is started.

use crate::config::JobConfig;
use crate::imaging::{ImageBackend, Quality, ResizeOutcome, ResizeParams, parse_output_format};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extensions considered image candidates. Matched case-sensitively, as the
/// literal patterns: `photo.JPG` is skipped.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Result of one batch run.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    /// Input directory, resolved to absolute form.
    pub input_dir: PathBuf,
    /// Output directory, resolved to absolute form.
    pub output_dir: PathBuf,
    pub outcome: BatchOutcome,
}

/// How the run ended. The first two are recovered conditions, not errors:
/// the run reports them and performs no (further) writes.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BatchOutcome {
    /// The input directory does not exist. Nothing was written — not even
    /// the output directory.
    InputDirMissing,
    /// The input directory exists but holds no files with a supported
    /// extension.
    NoMatchingFiles,
    /// The per-file loop ran to completion (individual files may still have
    /// failed; see each [`FileReport`]).
    Completed { files: Vec<FileReport> },
}

/// Per-file outcome within a completed batch.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub status: FileStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Resized(ResizeOutcome),
    Failed { error: String },
}

impl BatchReport {
    /// (resized, failed) counts. Both zero for early-return outcomes.
    pub fn tally(&self) -> (usize, usize) {
        match &self.outcome {
            BatchOutcome::Completed { files } => {
                let resized = files
                    .iter()
                    .filter(|f| matches!(f.status, FileStatus::Resized(_)))
                    .count();
                (resized, files.len() - resized)
            }
            _ => (0, 0),
        }
    }
}

/// Progress events emitted during a run, for live CLI output.
#[derive(Debug)]
pub enum BatchEvent {
    /// Discovery finished; these files will be processed, in this order.
    Discovered { files: Vec<PathBuf> },
    /// One file finished (successfully or not).
    FileFinished(FileReport),
}

/// Process a whole folder according to `config`, using `backend` for the
/// pixel work. Progress events are sent to `progress` when given.
///
/// `Err` is reserved for environment-level IO failures (unreadable input
/// directory listing, output directory creation). Everything about
/// individual files lives in the report.
pub fn run(
    config: &JobConfig,
    backend: &impl ImageBackend,
    progress: Option<Sender<BatchEvent>>,
) -> Result<BatchReport, BatchError> {
    let input_dir = std::path::absolute(&config.input_dir)?;
    let output_dir = std::path::absolute(&config.output_dir)?;

    if !input_dir.exists() {
        return Ok(BatchReport {
            input_dir,
            output_dir,
            outcome: BatchOutcome::InputDirMissing,
        });
    }

    fs::create_dir_all(&output_dir)?;

    let files = discover_images(&input_dir)?;
    if files.is_empty() {
        return Ok(BatchReport {
            input_dir,
            output_dir,
            outcome: BatchOutcome::NoMatchingFiles,
        });
    }

    if let Some(tx) = &progress {
        tx.send(BatchEvent::Discovered {
            files: files.clone(),
        })
        .ok();
    }

    let format = config.format.as_deref().and_then(parse_output_format);
    let quality = Quality::new(config.quality);

    let mut reports = Vec::new();
    for source in files {
        let output = output_dir.join(output_file_name(&source, config.format.as_deref()));

        let params = ResizeParams {
            source: source.clone(),
            output: output.clone(),
            max_width: config.max_width,
            max_height: config.max_height,
            format,
            quality,
        };

        // Per-file error boundary: log-and-continue, never abort the batch
        let status = match backend.resize(&params) {
            Ok(outcome) => FileStatus::Resized(outcome),
            Err(e) => FileStatus::Failed {
                error: e.to_string(),
            },
        };

        let report = FileReport {
            source,
            output,
            status,
        };
        if let Some(tx) = &progress {
            tx.send(BatchEvent::FileFinished(report.clone())).ok();
        }
        reports.push(report);
    }

    Ok(BatchReport {
        input_dir,
        output_dir,
        outcome: BatchOutcome::Completed { files: reports },
    })
}

/// List candidate image files directly inside `dir`, sorted by filename.
fn discover_images(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && has_image_extension(p))
        .collect();

    files.sort();
    Ok(files)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
}

/// Output filename: same stem as the input; the extension is the requested
/// format lowercased, or the original extension when no format was given.
fn output_file_name(source: &Path, format: Option<&str>) -> PathBuf {
    match format {
        Some(f) => {
            let stem = source.file_stem().unwrap_or_default().to_string_lossy();
            PathBuf::from(format!("{}.{}", stem, f.to_lowercase()))
        }
        None => PathBuf::from(source.file_name().unwrap_or_default()),
    }
}
