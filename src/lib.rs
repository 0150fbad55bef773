//! # imgfit
//!
//! Batch-resize every image in a folder to fit within maximum width/height
//! bounds, preserving aspect ratio, and write the results — optionally
//! re-encoded to a different format/quality — to an output folder. Built for
//! shrinking large photos for size-constrained use: web upload, storage,
//! sharing.
//!
//! # Architecture
//!
//! One call chain, fully sequential:
//!
//! ```text
//! batch::run  →  (per discovered file)  →  ImageBackend::resize  →  image crate
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `JobConfig` — dirs, bounds, format, quality; `imgfit.toml` loading and validation |
//! | [`batch`] | Folder processor — discovery, per-file loop with error isolation, [`batch::BatchReport`] |
//! | [`imaging`] | Dimension math, the [`imaging::ImageBackend`] seam, and the pure-Rust backend |
//! | [`output`] | CLI diagnostics — pure `format_*` functions + `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Fit by the longer axis
//!
//! The resize clamps only the driving axis (width for landscape, height for
//! portrait/square); the other axis follows from the aspect ratio. Images
//! are never upscaled. See [`imaging::fit_dimensions`] for the exact policy,
//! including the documented single-axis asymmetry.
//!
//! ## Per-file error isolation
//!
//! A corrupt or unwritable file is recorded in the batch report and the run
//! continues. The report carries a per-file status list plus a final tally,
//! and serializes to JSON for scripting (`--report`).
//!
//! ## Decode limits stay on
//!
//! The `image` crate's decompression-bomb guard is active by default;
//! `--unlimited-decode` is the explicit opt-in for trusted oversized inputs.
//!
//! ## Pure-Rust imaging
//!
//! Decode, Lanczos3 resample, and encode all go through the `image` crate —
//! no ImageMagick, no system libraries. The binary is fully self-contained.

pub mod batch;
pub mod config;
pub mod imaging;
pub mod output;
