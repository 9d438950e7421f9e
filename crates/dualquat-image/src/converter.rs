//! The raw-pixels-to-bytes converter interface.

use std::path::Path;

use crate::error::ImageResult;
use crate::pixel::{Image, ImageView};

/// Converts raw pixel buffers to encoded file bytes and back.
pub trait ImageConverter {
    /// Name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Encodes `image` into file bytes.
    fn export_to_data(&self, image: &ImageView<'_>) -> ImageResult<Vec<u8>>;

    /// Decodes file bytes into raw pixels.
    fn import_from_data(&self, data: &[u8]) -> ImageResult<Image>;

    /// Encodes `image` and writes it to `path`.
    fn export_to_file(&self, image: &ImageView<'_>, path: &Path) -> ImageResult<()> {
        let data = self.export_to_data(image)?;
        std::fs::write(path, data)?;
        log::debug!("{}: wrote {}", self.name(), path.display());
        Ok(())
    }

    /// Reads `path` and decodes it.
    fn import_from_file(&self, path: &Path) -> ImageResult<Image> {
        let data = std::fs::read(path)?;
        self.import_from_data(&data)
    }
}
