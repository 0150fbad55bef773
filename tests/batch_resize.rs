//! End-to-end batch runs against the real backend, with synthetic images.

use image::codecs::jpeg::JpegEncoder;
use image::{ImageEncoder, ImageFormat, ImageReader, RgbImage};
use imgfit::batch::{self, BatchOutcome, FileStatus};
use imgfit::config::JobConfig;
use imgfit::imaging::RustBackend;
use std::fs;
use std::io::BufWriter;
use std::path::Path;
use tempfile::TempDir;

fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = fs::File::create(path).unwrap();
    JpegEncoder::new(BufWriter::new(file))
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, 200, (y % 256) as u8])
    });
    img.save_with_format(path, ImageFormat::Png).unwrap();
}

fn job(tmp: &TempDir) -> JobConfig {
    JobConfig {
        input_dir: tmp.path().join("in"),
        output_dir: tmp.path().join("out"),
        ..Default::default()
    }
}

fn detected_format(path: &Path) -> Option<ImageFormat> {
    ImageReader::open(path)
        .unwrap()
        .with_guessed_format()
        .unwrap()
        .format()
}

#[test]
fn full_batch_resizes_landscape_portrait_and_compliant() {
    let tmp = TempDir::new().unwrap();
    let config = job(&tmp);
    fs::create_dir(&config.input_dir).unwrap();
    create_test_jpeg(&config.input_dir.join("landscape.jpg"), 1600, 1200);
    create_test_jpeg(&config.input_dir.join("portrait.jpg"), 600, 1200);
    create_test_jpeg(&config.input_dir.join("small.jpg"), 400, 300);

    let report = batch::run(&config, &RustBackend::new(), None).unwrap();
    assert_eq!(report.tally(), (3, 0));

    let out = tmp.path().join("out");
    assert_eq!(
        image::image_dimensions(out.join("landscape.jpg")).unwrap(),
        (800, 600)
    );
    assert_eq!(
        image::image_dimensions(out.join("portrait.jpg")).unwrap(),
        (300, 600)
    );
    // Already compliant: dimensions unchanged, never upscaled
    assert_eq!(
        image::image_dimensions(out.join("small.jpg")).unwrap(),
        (400, 300)
    );
}

#[test]
fn format_override_converts_png_batch_to_jpeg() {
    let tmp = TempDir::new().unwrap();
    let mut config = job(&tmp);
    config.format = Some("jpg".into());
    fs::create_dir(&config.input_dir).unwrap();
    create_test_png(&config.input_dir.join("one.png"), 1000, 500);
    create_test_png(&config.input_dir.join("two.png"), 200, 100);

    let report = batch::run(&config, &RustBackend::new(), None).unwrap();
    assert_eq!(report.tally(), (2, 0));

    let out = tmp.path().join("out");
    assert!(out.join("one.jpg").exists());
    assert!(out.join("two.jpg").exists());
    assert!(!out.join("one.png").exists());
    assert_eq!(detected_format(&out.join("one.jpg")), Some(ImageFormat::Jpeg));
}

#[test]
fn formats_are_preserved_per_file_without_override() {
    let tmp = TempDir::new().unwrap();
    let config = job(&tmp);
    fs::create_dir(&config.input_dir).unwrap();
    create_test_jpeg(&config.input_dir.join("photo.jpg"), 900, 450);
    create_test_png(&config.input_dir.join("chart.png"), 900, 450);

    batch::run(&config, &RustBackend::new(), None).unwrap();

    let out = tmp.path().join("out");
    assert_eq!(
        detected_format(&out.join("photo.jpg")),
        Some(ImageFormat::Jpeg)
    );
    assert_eq!(
        detected_format(&out.join("chart.png")),
        Some(ImageFormat::Png)
    );
}

#[test]
fn corrupt_file_is_isolated_and_reported() {
    let tmp = TempDir::new().unwrap();
    let config = job(&tmp);
    fs::create_dir(&config.input_dir).unwrap();
    create_test_jpeg(&config.input_dir.join("a.jpg"), 1600, 1200);
    fs::write(config.input_dir.join("b.jpg"), b"not an image at all").unwrap();
    create_test_jpeg(&config.input_dir.join("c.jpg"), 600, 1200);

    let report = batch::run(&config, &RustBackend::new(), None).unwrap();
    assert_eq!(report.tally(), (2, 1));

    let BatchOutcome::Completed { files } = &report.outcome else {
        panic!("expected completed outcome");
    };
    assert!(matches!(&files[1].status, FileStatus::Failed { error } if error.contains("Decode")));

    // The files around the corrupt one still got written
    let out = tmp.path().join("out");
    assert!(out.join("a.jpg").exists());
    assert!(out.join("c.jpg").exists());
    assert!(!out.join("b.jpg").exists());
}

#[test]
fn empty_input_dir_creates_empty_output_dir() {
    let tmp = TempDir::new().unwrap();
    let config = job(&tmp);
    fs::create_dir(&config.input_dir).unwrap();

    let report = batch::run(&config, &RustBackend::new(), None).unwrap();
    assert!(matches!(report.outcome, BatchOutcome::NoMatchingFiles));

    let out = tmp.path().join("out");
    assert!(out.exists());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn missing_input_dir_creates_nothing() {
    let tmp = TempDir::new().unwrap();
    let config = job(&tmp);

    let report = batch::run(&config, &RustBackend::new(), None).unwrap();
    assert!(matches!(report.outcome, BatchOutcome::InputDirMissing));
    assert!(!tmp.path().join("out").exists());
}

#[test]
fn rerun_reproduces_dimensions() {
    let tmp = TempDir::new().unwrap();
    let config = job(&tmp);
    fs::create_dir(&config.input_dir).unwrap();
    create_test_jpeg(&config.input_dir.join("photo.jpg"), 1600, 1200);

    let backend = RustBackend::new();
    batch::run(&config, &backend, None).unwrap();
    let first = image::image_dimensions(tmp.path().join("out/photo.jpg")).unwrap();

    batch::run(&config, &backend, None).unwrap();
    let second = image::image_dimensions(tmp.path().join("out/photo.jpg")).unwrap();

    assert_eq!(first, (800, 600));
    assert_eq!(first, second);
}
