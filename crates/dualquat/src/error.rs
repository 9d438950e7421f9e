//! Error type of the facade crate.

use thiserror::Error;

use dualquat_core::MathError;
use dualquat_image::ImageError;

/// Any error surfaced by dualquat-rs.
#[derive(Error, Debug)]
pub enum Error {
    /// Algebra error, including options parsing.
    #[error(transparent)]
    Math(#[from] MathError),

    /// Image conversion error.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for dualquat-rs operations.
pub type Result<T> = std::result::Result<T, Error>;
