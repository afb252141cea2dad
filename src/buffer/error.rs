//! Error types for pixel buffer construction.

use std::path::PathBuf;

/// Errors that can occur while creating a [`super::PixelBuffer`].
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    /// `width * height * channels` does not fit in memory addressing
    #[error("buffer size overflows: {width}x{height}x{channels}")]
    Overflow {
        width: u32,
        height: u32,
        channels: u32,
    },

    /// The allocator could not satisfy the request
    #[error("failed to allocate {bytes} bytes")]
    Allocation { bytes: usize },

    /// Source slice is shorter than the declared dimensions
    #[error("source holds {actual} bytes, {expected} required")]
    ShortSource { expected: usize, actual: usize },

    /// Image file missing, corrupt or in an unsupported format
    #[error("failed to load image '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl BufferError {
    /// True for the allocation-failure family (overflow or allocator refusal).
    pub fn is_allocation(&self) -> bool {
        matches!(self, BufferError::Overflow { .. } | BufferError::Allocation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BufferError::Allocation { bytes: 42 };
        assert_eq!(err.to_string(), "failed to allocate 42 bytes");

        let err = BufferError::ShortSource {
            expected: 12,
            actual: 3,
        };
        assert_eq!(err.to_string(), "source holds 3 bytes, 12 required");

        let err = BufferError::Overflow {
            width: 1,
            height: 2,
            channels: 3,
        };
        assert!(err.to_string().contains("1x2x3"));
    }

    #[test]
    fn test_is_allocation() {
        assert!(BufferError::Allocation { bytes: 1 }.is_allocation());
        assert!(BufferError::Overflow {
            width: 0,
            height: 0,
            channels: 0
        }
        .is_allocation());
        assert!(!BufferError::ShortSource {
            expected: 1,
            actual: 0
        }
        .is_allocation());
    }
}
