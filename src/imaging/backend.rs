//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait has a single operation: [`resize`](ImageBackend::resize),
//! which decodes one file, fits it within the requested bounds, and encodes
//! the result. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, everything
//! statically linked into the binary.

use super::params::ResizeParams;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Encode failed: {0}")]
    Encode(String),
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// What one resize actually did — surfaced in diagnostics and the batch report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResizeOutcome {
    pub original: Dimensions,
    pub resized: Dimensions,
    /// Input file size in bytes.
    pub original_bytes: u64,
    /// Output file size in bytes, after encoding.
    pub resized_bytes: u64,
}

/// Trait for image processing backends.
///
/// The batch loop is backend-agnostic: it hands each file's [`ResizeParams`]
/// to whatever backend it was given, so tests can drive the loop with a mock
/// that never touches pixels.
pub trait ImageBackend: Sync {
    /// Decode `params.source`, fit it within the bounds, encode to
    /// `params.output` (overwriting), and report what happened.
    fn resize(&self, params: &ResizeParams) -> Result<ResizeOutcome, BackendError>;
}
