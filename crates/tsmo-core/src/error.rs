/// Why an input image was rejected before histogram construction.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidImageKind {
    #[error("image has no samples")]
    Empty,
    #[error("buffer length mismatch (expected {expected} samples, got {got})")]
    BufferLength { expected: usize, got: usize },
    #[error("sample value {value} outside a {levels}-level range")]
    SampleOutOfRange { value: u8, levels: usize },
}

/// Errors returned by the thresholding pipeline.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ThresholdError {
    #[error("invalid image: {0}")]
    InvalidImage(InvalidImageKind),
    #[error("invalid configuration (bins={bins}, levels={levels}): {reason}")]
    Config {
        bins: usize,
        levels: usize,
        reason: &'static str,
    },
    #[error("histogram has no mass to normalize")]
    EmptyHistogram,
    #[error("window [{start}, {end}) falls outside [0, {levels})")]
    IndexOutOfRange {
        start: isize,
        end: isize,
        levels: usize,
    },
}

impl From<InvalidImageKind> for ThresholdError {
    fn from(kind: InvalidImageKind) -> Self {
        Self::InvalidImage(kind)
    }
}
