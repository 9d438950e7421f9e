//! Image converter collaborator for dualquat-rs.
//!
//! Converts raw pixel buffers to encoded file bytes and back:
//! - [`ImageConverter`] is the conversion interface
//! - [`TgaImageConverter`] implements it for uncompressed TGA
//! - [`ImageView`] and [`Image`] describe raw pixel data

pub mod converter;
pub mod error;
pub mod pixel;
pub mod tga;

pub use converter::ImageConverter;
pub use error::{ImageError, ImageResult};
pub use pixel::{pixel_size, Image, ImageView, PixelFormat, PixelType};
pub use tga::TgaImageConverter;
