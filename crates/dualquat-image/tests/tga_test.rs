//! Integration tests for the TGA converter.

use dualquat_image::*;

/// 2x3 BGR image.
const BGR_DATA: [u8; 18] = [1, 2, 3, 2, 3, 4, 3, 4, 5, 4, 5, 6, 5, 6, 7, 6, 7, 8];

fn bgr_view() -> ImageView<'static> {
    ImageView::new(2, 3, PixelFormat::Bgr, PixelType::UnsignedByte, &BGR_DATA)
}

#[test]
fn test_wrong_format() {
    let data = [0_u8; 4];
    let view = ImageView::new(1, 1, PixelFormat::Rg, PixelType::UnsignedByte, &data);
    let err = TgaImageConverter::new().export_to_data(&view).unwrap_err();
    assert_eq!(
        err.to_string(),
        "TgaImageConverter::export_to_data(): unsupported image format Rg"
    );
}

#[test]
fn test_wrong_type() {
    let data = [0_u8; 4];
    let view = ImageView::new(1, 1, PixelFormat::Red, PixelType::Float, &data);
    let err = TgaImageConverter::new().export_to_data(&view).unwrap_err();
    assert_eq!(
        err.to_string(),
        "TgaImageConverter::export_to_data(): unsupported image type Float"
    );
}

#[test]
fn test_data_round_trip() {
    let converter = TgaImageConverter::new();
    let bytes = converter.export_to_data(&bgr_view()).unwrap();

    let image = converter.import_from_data(&bytes).unwrap();
    assert_eq!((image.width, image.height), (2, 3));
    assert_eq!(image.format, PixelFormat::Bgr);
    assert_eq!(image.pixel_type, PixelType::UnsignedByte);
    assert_eq!(image.data, BGR_DATA);
}

#[test]
fn test_rgb_is_stored_as_bgr() {
    let rgb: Vec<u8> = BGR_DATA
        .chunks_exact(3)
        .flat_map(|pixel| [pixel[2], pixel[1], pixel[0]])
        .collect();
    let view = ImageView::new(2, 3, PixelFormat::Rgb, PixelType::UnsignedByte, &rgb);

    let converter = TgaImageConverter::new();
    let image = converter
        .import_from_data(&converter.export_to_data(&view).unwrap())
        .unwrap();
    assert_eq!(image.format, PixelFormat::Bgr);
    assert_eq!(image.data, BGR_DATA);
}

#[test]
fn test_bgra_round_trip() {
    let data: Vec<u8> = (0..24).collect();
    let view = ImageView::new(3, 2, PixelFormat::Bgra, PixelType::UnsignedByte, &data);

    let converter = TgaImageConverter::new();
    let image = converter
        .import_from_data(&converter.export_to_data(&view).unwrap())
        .unwrap();
    assert_eq!(image.format, PixelFormat::Bgra);
    assert_eq!(image.data, data);
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.tga");

    let converter = TgaImageConverter::new();
    converter.export_to_file(&bgr_view(), &path).unwrap();
    assert_eq!(
        std::fs::read(&path).unwrap(),
        converter.export_to_data(&bgr_view()).unwrap()
    );

    let image = converter.import_from_file(&path).unwrap();
    assert_eq!(image.as_view().expected_len(), BGR_DATA.len());
    assert_eq!(image.data, BGR_DATA);
}

#[test]
fn test_import_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = TgaImageConverter::new()
        .import_from_file(&dir.path().join("missing.tga"))
        .unwrap_err();
    assert!(matches!(err, ImageError::IoError(_)));
}
