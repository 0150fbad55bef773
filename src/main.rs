use clap::Parser;
use imgfit::imaging::RustBackend;
use imgfit::{batch, config, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imgfit")]
#[command(about = "Batch-resize images in a folder to fit within bounds")]
#[command(long_about = "\
Batch-resize images in a folder to fit within bounds

Reads every image (jpg, jpeg, png, webp) directly inside the input folder,
shrinks each one to fit within --max-width / --max-height while preserving
aspect ratio, and writes the result to the output folder. Images already
within bounds are never upscaled.

Defaults can be placed in imgfit.toml; command-line flags override it.
Run with --report to also write a machine-readable JSON summary.")]
#[command(version)]
struct Cli {
    /// Config file (default: ./imgfit.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Folder to read images from (non-recursive)
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Folder to write resized images to (created if missing)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Maximum output width in pixels
    #[arg(long)]
    max_width: Option<u32>,

    /// Maximum output height in pixels
    #[arg(long)]
    max_height: Option<u32>,

    /// Re-encode everything to this format (jpg, png, webp, ...).
    /// Omit to keep each file's own format.
    #[arg(long)]
    format: Option<String>,

    /// Lossy encoding quality, 1-100
    #[arg(long)]
    quality: Option<u32>,

    /// Lift the decoder's pixel-count safety cap (trusted inputs only)
    #[arg(long)]
    unlimited_decode: bool,

    /// Write the batch report as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of the file/default config.
    fn apply_to(&self, config: &mut config::JobConfig) {
        if let Some(dir) = &self.input_dir {
            config.input_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(w) = self.max_width {
            config.max_width = w;
        }
        if let Some(h) = self.max_height {
            config.max_height = h;
        }
        if let Some(f) = &self.format {
            config.format = Some(f.clone());
        }
        if let Some(q) = self.quality {
            config.quality = q;
        }
        if self.unlimited_decode {
            config.unlimited_decode = true;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut job = config::resolve_config(cli.config.as_deref())?;
    cli.apply_to(&mut job);
    job.validate()?;

    let cwd = std::env::current_dir()?;
    output::print_run_header(
        &cwd,
        &std::path::absolute(&job.input_dir)?,
        &std::path::absolute(&job.output_dir)?,
    );

    let backend = if job.unlimited_decode {
        RustBackend::with_unlimited_decode()
    } else {
        RustBackend::new()
    };

    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_batch_event(&event);
        }
    });

    let report = batch::run(&job, &backend, Some(tx))?;
    printer.join().expect("printer thread panicked");

    output::print_summary(&report);

    if let Some(report_path) = &cli.report {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(report_path, json)?;
        println!("Report written to {}", report_path.display());
    }

    Ok(())
}
