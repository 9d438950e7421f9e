//! Raw pixel buffers and their layout descriptors.

/// Channel layout of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Single channel.
    Red,
    /// Two channels.
    Rg,
    /// Three channels, red first.
    Rgb,
    /// Three channels, blue first.
    Bgr,
    /// Four channels, red first.
    Rgba,
    /// Four channels, blue first.
    Bgra,
}

impl PixelFormat {
    /// Number of channels.
    #[must_use]
    pub fn channel_count(self) -> usize {
        match self {
            Self::Red => 1,
            Self::Rg => 2,
            Self::Rgb | Self::Bgr => 3,
            Self::Rgba | Self::Bgra => 4,
        }
    }
}

/// Storage type of a single channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelType {
    UnsignedByte,
    Byte,
    UnsignedShort,
    Short,
    UnsignedInt,
    Int,
    Float,
}

impl PixelType {
    /// Size of one channel in bytes.
    #[must_use]
    pub fn size(self) -> usize {
        match self {
            Self::UnsignedByte | Self::Byte => 1,
            Self::UnsignedShort | Self::Short => 2,
            Self::UnsignedInt | Self::Int | Self::Float => 4,
        }
    }
}

/// Size of one pixel in bytes.
#[must_use]
pub fn pixel_size(format: PixelFormat, pixel_type: PixelType) -> usize {
    format.channel_count() * pixel_type.size()
}

/// Borrowed, tightly packed pixel data with its layout.
///
/// Rows follow each other without padding.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a> {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Channel layout.
    pub format: PixelFormat,
    /// Channel storage type.
    pub pixel_type: PixelType,
    /// Pixel data.
    pub data: &'a [u8],
}

impl<'a> ImageView<'a> {
    /// Creates a view over `data`.
    #[must_use]
    pub fn new(
        width: u32,
        height: u32,
        format: PixelFormat,
        pixel_type: PixelType,
        data: &'a [u8],
    ) -> Self {
        Self {
            width,
            height,
            format,
            pixel_type,
            data,
        }
    }

    /// Number of bytes the data should have for the given dimensions and layout.
    #[must_use]
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * pixel_size(self.format, self.pixel_type)
    }
}

/// Owned, tightly packed pixel data, as produced by an importer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Channel layout.
    pub format: PixelFormat,
    /// Channel storage type.
    pub pixel_type: PixelType,
    /// Pixel data.
    pub data: Vec<u8>,
}

impl Image {
    /// Borrows the image as a view.
    #[must_use]
    pub fn as_view(&self) -> ImageView<'_> {
        ImageView::new(self.width, self.height, self.format, self.pixel_type, &self.data)
    }
}
