//! Core of the two-stage multilevel Otsu (TSMO) thresholder.
//!
//! The pipeline turns an 8-bit grayscale image into an ordered list of
//! intensity thresholds:
//!
//! 1. [`Histogram::from_image`] counts raw intensity levels;
//! 2. [`normalize_histogram`] groups them into coarse bins scaled to 0–100;
//! 3. [`find_valleys`] scores bin shapes and flags cluster boundaries;
//! 4. [`valley_windows`] maps each valley back to a clamped raw-level window;
//! 5. [`otsu_index`] finds the bilevel split inside each window.
//!
//! [`MultilevelThresholder`] runs all of them behind a validated
//! [`ThresholdParams`]. This crate does no image decoding and no I/O; see the
//! `tsmo` crate for that.
//!
//! ```
//! use tsmo_core::{GrayImage, MultilevelThresholder, ThresholdParams};
//!
//! let mut data = vec![20u8; 32 * 32];
//! data[..512].fill(180);
//! let img = GrayImage::new(32, 32, data);
//!
//! let thresholder = MultilevelThresholder::new(ThresholdParams::default())?;
//! let thresholds = thresholder.thresholds(&img.view())?;
//! assert!(thresholds.windows(2).all(|p| p[0] < p[1]));
//! # Ok::<(), tsmo_core::ThresholdError>(())
//! ```

mod error;
mod histogram;
mod image;
mod logger;
mod normalize;
mod otsu;
mod params;
mod pipeline;
mod region;
mod valley;
mod window;

pub use error::{InvalidImageKind, ThresholdError};
pub use histogram::Histogram;
pub use image::{GrayImage, GrayImageView};
pub use normalize::{normalize_histogram, NormalizedHistogram};
pub use otsu::otsu_index;
pub use params::ThresholdParams;
pub use pipeline::{multilevel_thresholds, MultilevelThresholder, ThresholdResult};
pub use region::{threshold_valley_regions, threshold_window, valley_windows};
pub use valley::{
    find_valleys, flag_valleys, score_bins, BinShape, ELEVATED_WEIGHT, FALLING_SHOULDER_WEIGHT,
    RISING_SHOULDER_WEIGHT, TROUGH_WEIGHT, VALLEY_SUPPORT,
};
pub use window::Window;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{log_directives, LOG_TARGETS};
