//! Error types for the badge extraction pipeline.
//!
//! The pipeline stages themselves never fail: an empty scan yields an empty
//! crop list, a degenerate contour falls back to a (0, 0) centroid, and
//! padding that would leave the image is clamped. Errors only arise at the
//! boundary: decoding the input image, writing crops to disk, or rejecting
//! an invalid configuration.

use thiserror::Error;

/// Enum representing the errors that can occur at the pipeline boundary.
#[derive(Error, Debug)]
pub enum BadgeCutError {
    /// Error occurred while loading the source image.
    #[error("image load")]
    ImageLoad(#[source] image::ImageError),

    /// Error occurred while encoding a crop to disk.
    #[error("failed to save crop to {path}")]
    ImageSave {
        /// The destination path of the failed write.
        path: String,
        /// The underlying encoder error.
        #[source]
        source: image::ImageError,
    },

    /// Error indicating invalid input.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

impl BadgeCutError {
    /// Creates a configuration error with the given message.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Creates an invalid-input error with the given message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Convenient result alias for badge extraction operations.
pub type CutResult<T> = Result<T, BadgeCutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = BadgeCutError::invalid_input("empty image: scan.png");
        assert_eq!(err.to_string(), "invalid input: empty image: scan.png");
    }

    #[test]
    fn test_config_error_message() {
        let err = BadgeCutError::config_error("max_outputs must be positive");
        assert_eq!(
            err.to_string(),
            "configuration: max_outputs must be positive"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: BadgeCutError = io.into();
        assert!(matches!(err, BadgeCutError::Io(_)));
    }
}
