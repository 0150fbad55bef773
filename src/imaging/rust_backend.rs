//! Pure Rust image processing backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, WebP) | `image` crate (pure Rust decoders) |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → JPEG | `JpegEncoder::new_with_quality` (quality applies) |
//! | Encode → PNG | `PngEncoder` at maximum compression (quality ignored) |
//! | Encode → WebP | `WebPEncoder::new_lossless` (quality ignored — the `image` crate ships no lossy WebP encoder) |
//!
//! Decode resource limits (the decompression-bomb guard) are on by default;
//! [`RustBackend::with_unlimited_decode`] lifts them for trusted inputs.

use super::backend::{BackendError, Dimensions, ImageBackend, ResizeOutcome};
use super::calculations::fit_dimensions;
use super::params::ResizeParams;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs;
use std::io::BufWriter;
use std::path::Path;

/// Resolve a user-supplied format name ("jpg", "PNG", ...) to an encoder
/// identifier. Lowercases first, so "JPG" and "jpg" both map to
/// [`ImageFormat::Jpeg`].
pub fn parse_output_format(name: &str) -> Option<ImageFormat> {
    ImageFormat::from_extension(name.to_ascii_lowercase())
}

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend {
    unlimited_decode: bool,
}

impl RustBackend {
    /// Backend with the `image` crate's default decode limits in place.
    pub fn new() -> Self {
        Self {
            unlimited_decode: false,
        }
    }

    /// Backend with decode resource limits lifted. Only for inputs you
    /// trust: a crafted file can otherwise allocate pathological amounts of
    /// memory during decode.
    pub fn with_unlimited_decode() -> Self {
        Self {
            unlimited_decode: true,
        }
    }

    /// Load and decode an image from disk, keeping the detected format.
    fn load_image(&self, path: &Path) -> Result<(DynamicImage, Option<ImageFormat>), BackendError> {
        let mut reader = ImageReader::open(path)
            .map_err(BackendError::Io)?
            .with_guessed_format()
            .map_err(BackendError::Io)?;
        if self.unlimited_decode {
            reader.no_limits();
        }
        let format = reader.format();
        let img = reader
            .decode()
            .map_err(|e| BackendError::Decode(format!("{}: {}", path.display(), e)))?;
        Ok((img, format))
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Last-resort format resolution from the input file's extension, for files
/// whose content the decoder could not classify.
fn format_from_extension(path: &Path) -> Option<ImageFormat> {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(parse_output_format)
}

/// Encode and write to `path` (overwriting), returning the written byte size.
fn save_image(
    img: &DynamicImage,
    path: &Path,
    format: ImageFormat,
    quality: u32,
) -> Result<u64, BackendError> {
    let encode_err =
        |e: image::ImageError| BackendError::Encode(format!("{}: {}", path.display(), e));

    match format {
        ImageFormat::Jpeg => {
            let file = fs::File::create(path).map_err(BackendError::Io)?;
            let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), quality as u8);
            // JPEG has no alpha channel
            img.to_rgb8().write_with_encoder(encoder).map_err(encode_err)?;
        }
        ImageFormat::Png => {
            let file = fs::File::create(path).map_err(BackendError::Io)?;
            let encoder = PngEncoder::new_with_quality(
                BufWriter::new(file),
                CompressionType::Best,
                PngFilterType::Adaptive,
            );
            img.write_with_encoder(encoder).map_err(encode_err)?;
        }
        ImageFormat::WebP => {
            let file = fs::File::create(path).map_err(BackendError::Io)?;
            let encoder = WebPEncoder::new_lossless(BufWriter::new(file));
            // The lossless encoder accepts 8-bit RGB/RGBA only
            if img.color().has_alpha() {
                img.to_rgba8().write_with_encoder(encoder).map_err(encode_err)?;
            } else {
                img.to_rgb8().write_with_encoder(encoder).map_err(encode_err)?;
            }
        }
        other => {
            // Whatever other encoders are compiled in
            img.save_with_format(path, other).map_err(encode_err)?;
        }
    }

    Ok(fs::metadata(path).map_err(BackendError::Io)?.len())
}

impl ImageBackend for RustBackend {
    fn resize(&self, params: &ResizeParams) -> Result<ResizeOutcome, BackendError> {
        let original_bytes = fs::metadata(&params.source)
            .map_err(BackendError::Io)?
            .len();

        let (img, detected) = self.load_image(&params.source)?;
        let original = Dimensions {
            width: img.width(),
            height: img.height(),
        };

        let (new_w, new_h) = fit_dimensions(
            (original.width, original.height),
            (params.max_width, params.max_height),
        );
        let resized = img.resize_exact(new_w, new_h, FilterType::Lanczos3);

        // Format priority: explicit override → detected format → extension
        let format = params
            .format
            .or(detected)
            .or_else(|| format_from_extension(&params.source))
            .ok_or_else(|| {
                BackendError::Encode(format!(
                    "cannot determine output format for {}",
                    params.source.display()
                ))
            })?;

        let resized_bytes = save_image(&resized, &params.output, format, params.quality.value())?;

        Ok(ResizeOutcome {
            original,
            resized: Dimensions {
                width: new_w,
                height: new_h,
            },
            original_bytes,
            resized_bytes,
        })
    }
}
