use std::path::Path;

use image::{GrayImage, ImageReader};
use tsmo_core::{GrayImageView, MultilevelThresholder, ThresholdError, ThresholdResult};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the image-level helpers.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error("invalid grayscale image buffer length (expected {expected} bytes, got {got})")]
    InvalidGrayBuffer { expected: usize, got: usize },

    #[error("invalid grayscale image dimensions (width={width}, height={height})")]
    InvalidGrayDimensions { width: u32, height: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Threshold(#[from] ThresholdError),
}

/// Convert an `image::GrayImage` into the lightweight `tsmo-core` view type.
pub fn gray_view(img: &GrayImage) -> GrayImageView<'_> {
    GrayImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Decode any supported image file and convert it to 8-bit luma.
pub fn load_gray(path: impl AsRef<Path>) -> Result<GrayImage, DetectError> {
    Ok(ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?
        .to_luma8())
}

/// Run the thresholder on a decoded grayscale image.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(img, thresholder),
        fields(width = img.width(), height = img.height())
    )
)]
pub fn threshold_image(
    img: &GrayImage,
    thresholder: &MultilevelThresholder,
) -> Result<ThresholdResult, DetectError> {
    Ok(thresholder.run(&gray_view(img))?)
}

/// Load an image from disk and threshold it.
pub fn threshold_path(
    path: impl AsRef<Path>,
    thresholder: &MultilevelThresholder,
) -> Result<ThresholdResult, DetectError> {
    let img = load_gray(path)?;
    threshold_image(&img, thresholder)
}

/// Build an `image::GrayImage` from a raw grayscale buffer.
pub fn gray_image_from_slice(
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<GrayImage, DetectError> {
    let w = usize::try_from(width).ok();
    let h = usize::try_from(height).ok();
    let Some((w, h)) = w.zip(h) else {
        return Err(DetectError::InvalidGrayDimensions { width, height });
    };
    let Some(expected) = w.checked_mul(h) else {
        return Err(DetectError::InvalidGrayDimensions { width, height });
    };
    if pixels.len() != expected {
        return Err(DetectError::InvalidGrayBuffer {
            expected,
            got: pixels.len(),
        });
    }
    GrayImage::from_raw(width, height, pixels.to_vec())
        .ok_or(DetectError::InvalidGrayDimensions { width, height })
}

/// Threshold a raw row-major grayscale buffer.
pub fn thresholds_from_gray_u8(
    width: u32,
    height: u32,
    pixels: &[u8],
    thresholder: &MultilevelThresholder,
) -> Result<Vec<usize>, DetectError> {
    let img = gray_image_from_slice(width, height, pixels)?;
    Ok(threshold_image(&img, thresholder)?.thresholds)
}
