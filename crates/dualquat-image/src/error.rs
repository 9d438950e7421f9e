//! Image conversion error types.

use thiserror::Error;

use crate::pixel::{PixelFormat, PixelType};

/// Errors that can occur while converting images to or from bytes.
#[derive(Error, Debug)]
pub enum ImageError {
    /// The converter can't encode this pixel format.
    #[error("{operation}(): unsupported image format {format:?}")]
    UnsupportedFormat {
        /// Converter operation that rejected the image.
        operation: &'static str,
        /// The rejected format.
        format: PixelFormat,
    },

    /// The converter can't encode this pixel type.
    #[error("{operation}(): unsupported image type {pixel_type:?}")]
    UnsupportedType {
        /// Converter operation that rejected the image.
        operation: &'static str,
        /// The rejected type.
        pixel_type: PixelType,
    },

    /// Pixel data doesn't match the image dimensions.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Decoded file uses a color layout with no raw counterpart.
    #[error("unsupported decoded color type: {0}")]
    UnsupportedColorType(String),

    /// Encoder or decoder failure.
    #[error("image codec error: {0}")]
    CodecError(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A specialized Result type for image conversion.
pub type ImageResult<T> = std::result::Result<T, ImageError>;
