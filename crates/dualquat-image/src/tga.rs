//! TGA conversion backed by the `image` crate.

use image::codecs::tga::TgaEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageFormat};

use crate::converter::ImageConverter;
use crate::error::{ImageError, ImageResult};
use crate::pixel::{Image, ImageView, PixelFormat, PixelType};

/// Uncompressed TGA converter.
///
/// Encodes 8-bit grayscale, RGB, BGR, RGBA and BGRA images. Decoding yields
/// `Red`, `Bgr` or `Bgra` data, the native TGA channel orders.
#[derive(Debug, Clone, Copy, Default)]
pub struct TgaImageConverter;

impl TgaImageConverter {
    /// Creates a converter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Swaps the first and third channel of every pixel in place.
fn swap_red_blue(data: &mut [u8], channels: usize) {
    for pixel in data.chunks_exact_mut(channels) {
        pixel.swap(0, 2);
    }
}

impl ImageConverter for TgaImageConverter {
    fn name(&self) -> &'static str {
        "TgaImageConverter"
    }

    fn export_to_data(&self, image: &ImageView<'_>) -> ImageResult<Vec<u8>> {
        let color_type = match image.format {
            PixelFormat::Red => ExtendedColorType::L8,
            PixelFormat::Rgb | PixelFormat::Bgr => ExtendedColorType::Rgb8,
            PixelFormat::Rgba | PixelFormat::Bgra => ExtendedColorType::Rgba8,
            PixelFormat::Rg => {
                return Err(ImageError::UnsupportedFormat {
                    operation: "TgaImageConverter::export_to_data",
                    format: image.format,
                })
            }
        };
        if image.pixel_type != PixelType::UnsignedByte {
            return Err(ImageError::UnsupportedType {
                operation: "TgaImageConverter::export_to_data",
                pixel_type: image.pixel_type,
            });
        }
        if image.data.len() != image.expected_len() {
            return Err(ImageError::SizeMismatch {
                expected: image.expected_len(),
                actual: image.data.len(),
            });
        }

        // The encoder takes red-first data
        let mut pixels = image.data.to_vec();
        if matches!(image.format, PixelFormat::Bgr | PixelFormat::Bgra) {
            swap_red_blue(&mut pixels, image.format.channel_count());
        }

        let mut bytes = Vec::new();
        TgaEncoder::new(&mut bytes).write_image(&pixels, image.width, image.height, color_type)?;

        log::debug!(
            "{}: encoded {}x{} {:?} image into {} bytes",
            self.name(),
            image.width,
            image.height,
            image.format,
            bytes.len()
        );
        Ok(bytes)
    }

    fn import_from_data(&self, data: &[u8]) -> ImageResult<Image> {
        let decoded = image::load_from_memory_with_format(data, ImageFormat::Tga)?;
        let (width, height) = (decoded.width(), decoded.height());

        let (format, data) = match decoded {
            DynamicImage::ImageLuma8(buffer) => (PixelFormat::Red, buffer.into_raw()),
            DynamicImage::ImageRgb8(buffer) => {
                let mut data = buffer.into_raw();
                swap_red_blue(&mut data, 3);
                (PixelFormat::Bgr, data)
            }
            DynamicImage::ImageRgba8(buffer) => {
                let mut data = buffer.into_raw();
                swap_red_blue(&mut data, 4);
                (PixelFormat::Bgra, data)
            }
            other => {
                return Err(ImageError::UnsupportedColorType(format!("{:?}", other.color())));
            }
        };

        Ok(Image {
            width,
            height,
            format,
            pixel_type: PixelType::UnsignedByte,
            data,
        })
    }
}
