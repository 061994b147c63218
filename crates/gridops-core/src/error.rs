use std::error::Error;
use std::fmt;

/// Errors raised by the grid algorithms before any computation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Kernel exceeds the image in at least one axis, or an axis is zero.
    InvalidDimensions {
        image: (usize, usize),
        kernel: (usize, usize),
    },
    /// Sliding window length of zero.
    InvalidWindowSize { len: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { image, kernel } => write!(
                f,
                "kernel {}x{} does not fit image {}x{}",
                kernel.0, kernel.1, image.0, image.1
            ),
            GridError::InvalidWindowSize { len } => write!(
                f,
                "window size must be positive (source length {})",
                len
            ),
        }
    }
}

impl Error for GridError {}
