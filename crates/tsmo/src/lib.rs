//! Automatic multilevel thresholding for grayscale images.
//!
//! This crate provides:
//! - re-exports of the pure algorithm in `tsmo-core`
//! - (feature `image`) helpers that decode image files and threshold them
//! - (feature `image`) a batch runner over files and directories
//! - JSON config/report types and the plain-text report format
//! - (feature `cli`) the `tsmo` command-line tool
//!
//! ## Quickstart
//!
//! ```no_run
//! use tsmo::detect;
//! use tsmo::{MultilevelThresholder, ThresholdParams};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let thresholder = MultilevelThresholder::new(ThresholdParams::default())?;
//! let result = detect::threshold_path("scan.png", &thresholder)?;
//! for (i, t) in result.thresholds.iter().enumerate() {
//!     println!("Threshold[{i}] - {t}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `tsmo::core`: histogram, normalization, valley detection, windows, Otsu.
//! - `tsmo::report`: `ThresholdConfig`, `BatchReport`, text rendering.
//! - `tsmo::detect` (feature `image`): thresholds from `image::GrayImage` or files.
//! - `tsmo::batch` (feature `image`): directory expansion and batch runs.

pub use tsmo_core as core;

pub use tsmo_core::{
    MultilevelThresholder, ThresholdError, ThresholdParams, ThresholdResult, Window,
};

pub mod report;

#[cfg(feature = "image")]
pub mod batch;
#[cfg(feature = "image")]
pub mod detect;
