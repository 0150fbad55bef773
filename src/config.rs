//! Job configuration module.
//!
//! Handles loading and validating `imgfit.toml`. One flat config struct
//! drives a whole run; CLI flags override file values (the merge lives in
//! `main.rs`).
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! input_dir = "."           # Folder to read images from (non-recursive)
//! output_dir = "."          # Folder to write resized images to
//! max_width = 800           # Maximum output width in pixels
//! max_height = 600          # Maximum output height in pixels
//! # format = "jpg"          # Re-encode everything to this format (omit to keep per-file formats)
//! quality = 85              # Lossy encoding quality (1-100)
//! unlimited_decode = false  # Lift the decoder's pixel-count safety cap (trusted inputs only)
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use crate::imaging::parse_output_format;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config filename looked up in the working directory.
pub const CONFIG_FILE: &str = "imgfit.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// One batch run's parameters, loaded from `imgfit.toml` and/or CLI flags.
///
/// All fields have defaults matching the classic invocation: current
/// directory in and out, 800×600 bounds, per-file formats, quality 85.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobConfig {
    /// Folder to read images from (non-recursive).
    pub input_dir: PathBuf,
    /// Folder to write resized images to. Created if missing.
    pub output_dir: PathBuf,
    /// Maximum output width in pixels.
    pub max_width: u32,
    /// Maximum output height in pixels.
    pub max_height: u32,
    /// Target codec name ("jpg", "png", ...). `None` keeps each file's
    /// source format.
    pub format: Option<String>,
    /// Lossy encoding quality (1-100). Ignored by lossless formats.
    pub quality: u32,
    /// Lift the decoder's resource limits. Off by default so a crafted
    /// input cannot allocate pathological amounts of memory.
    pub unlimited_decode: bool,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            max_width: 800,
            max_height: 600,
            format: None,
            quality: 85,
            unlimited_decode: false,
        }
    }
}

impl JobConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_width == 0 || self.max_height == 0 {
            return Err(ConfigError::Validation(
                "max_width and max_height must be positive".into(),
            ));
        }
        if self.quality < 1 || self.quality > 100 {
            return Err(ConfigError::Validation("quality must be 1-100".into()));
        }
        if let Some(name) = &self.format {
            if parse_output_format(name).is_none() {
                return Err(ConfigError::Validation(format!(
                    "unknown output format: {name}"
                )));
            }
        }
        Ok(())
    }
}

/// Load a config file. The file must exist and parse.
pub fn load_config(path: &Path) -> Result<JobConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: JobConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Resolve the effective config: an explicitly given file must exist;
/// otherwise `imgfit.toml` in the working directory is used when present,
/// and stock defaults when not.
pub fn resolve_config(explicit: Option<&Path>) -> Result<JobConfig, ConfigError> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if default_path.exists() {
                load_config(default_path)
            } else {
                Ok(JobConfig::default())
            }
        }
    }
}
