use crate::{InvalidImageKind, ThresholdError};

/// Borrowed 8-bit grayscale image, row-major.
#[derive(Clone, Copy, Debug)]
pub struct GrayImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h
}

/// Owned 8-bit grayscale image, row-major.
#[derive(Clone, Debug)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl<'a> GrayImageView<'a> {
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Check that the grid is non-empty and the buffer matches its dimensions.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        let expected = self
            .width
            .checked_mul(self.height)
            .ok_or(InvalidImageKind::BufferLength {
                expected: usize::MAX,
                got: self.data.len(),
            })?;
        if expected == 0 || self.data.is_empty() {
            return Err(InvalidImageKind::Empty.into());
        }
        if self.data.len() != expected {
            return Err(InvalidImageKind::BufferLength {
                expected,
                got: self.data.len(),
            }
            .into());
        }
        Ok(())
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Iterate over image rows.
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> {
        self.data.chunks_exact(self.width.max(1))
    }
}

impl GrayImage {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Build an image filled with a single intensity.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self::new(width, height, vec![value; width * height])
    }

    pub fn view(&self) -> GrayImageView<'_> {
        GrayImageView::new(self.width, self.height, &self.data)
    }
}
