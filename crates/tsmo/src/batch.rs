//! Batch thresholding over files and directories.
//!
//! Every image is an independent task: a failure is recorded in that
//! image's [`ImageReport`] and never stops the rest of the batch. With the
//! `rayon` feature the images are processed in parallel; reports always come
//! back in input order.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use tsmo_core::MultilevelThresholder;

use crate::detect::{threshold_path, DetectError};
use crate::report::ImageReport;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// File extensions picked up when scanning directories (lowercase).
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "tif", "tiff", "gif", "pgm", "pnm", "ppm", "webp",
];

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn scan_dir(dir: &Path, recursive: bool, out: &mut Vec<PathBuf>) -> Result<(), DetectError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            if recursive {
                scan_dir(&path, recursive, out)?;
            }
        } else if is_supported(&path) {
            out.push(path);
        }
    }
    Ok(())
}

/// Expand files and directories into a list of image paths.
///
/// Files given explicitly are kept regardless of extension. Directory
/// entries are filtered by [`SUPPORTED_EXTENSIONS`] and sorted so output
/// order is stable across platforms.
pub fn collect_image_paths(
    inputs: &[PathBuf],
    recursive: bool,
) -> Result<Vec<PathBuf>, DetectError> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found = Vec::new();
            scan_dir(input, recursive, &mut found)?;
            found.sort();
            paths.extend(found);
        } else {
            paths.push(input.clone());
        }
    }
    Ok(paths)
}

fn run_one(path: &Path, thresholder: &MultilevelThresholder) -> ImageReport {
    match threshold_path(path, thresholder) {
        Ok(res) => ImageReport::success(path, &res),
        Err(err) => {
            warn!("{}: {err}", path.display());
            ImageReport::failure(path, err)
        }
    }
}

/// Threshold every path independently.
pub fn run_batch(paths: &[PathBuf], thresholder: &MultilevelThresholder) -> Vec<ImageReport> {
    info!("thresholding {} images", paths.len());

    #[cfg(feature = "rayon")]
    let reports: Vec<ImageReport> = paths
        .par_iter()
        .map(|p| run_one(p, thresholder))
        .collect();

    #[cfg(not(feature = "rayon"))]
    let reports: Vec<ImageReport> = paths.iter().map(|p| run_one(p, thresholder)).collect();

    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use tsmo_core::ThresholdParams;

    fn write_png(dir: &Path, name: &str, split: u8) -> PathBuf {
        let path = dir.join(name);
        let img = GrayImage::from_fn(24, 24, |x, y| {
            if (x + y) % 3 == 0 {
                Luma([split / 4])
            } else {
                Luma([split])
            }
        });
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn collects_sorted_supported_files() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "b.png", 200);
        let lower = write_png(dir.path(), "a.png", 200);
        fs::rename(&lower, dir.path().join("a.PNG")).unwrap();
        fs::write(dir.path().join("notes.txt"), "skip me").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        write_png(&dir.path().join("nested"), "c.png", 200);

        let flat = collect_image_paths(&[dir.path().to_path_buf()], false).unwrap();
        let names: Vec<_> = flat
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.PNG", "b.png"]);

        let deep = collect_image_paths(&[dir.path().to_path_buf()], true).unwrap();
        assert_eq!(deep.len(), 3);
    }

    #[test]
    fn failures_do_not_abort_siblings() {
        let dir = tempfile::tempdir().unwrap();
        let good_a = write_png(dir.path(), "a.png", 200);
        let broken = dir.path().join("b.png");
        fs::write(&broken, b"not a png").unwrap();
        let good_c = write_png(dir.path(), "c.png", 160);

        let thresholder = MultilevelThresholder::new(ThresholdParams::default()).unwrap();
        let reports = run_batch(&[good_a.clone(), broken, good_c.clone()], &thresholder);

        assert_eq!(reports.len(), 3);
        assert!(reports[0].is_ok());
        assert!(!reports[1].is_ok());
        assert!(reports[2].is_ok());
        assert_eq!(reports[0].path, good_a.display().to_string());
        assert_eq!(reports[2].path, good_c.display().to_string());
    }
}
