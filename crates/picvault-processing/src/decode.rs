//! Decoder stage: raw bytes + extension hint → pixel buffer + typed format.

use crate::format::SourceFormat;
use image::{DynamicImage, ImageReader};
use picvault_core::AppError;
use std::io::Cursor;

/// A decoded image together with the format it was stored in.
pub struct DecodedImage {
    pub image: DynamicImage,
    pub format: SourceFormat,
}

/// Decode `data` into a pixel buffer.
///
/// The lowercase extension hint is consulted only to route HEIC to its
/// dedicated container decoder; everything else is decoded by sniffing the
/// byte stream's own format marker, ignoring the hint.
pub fn decode(data: &[u8], extension: &str) -> Result<DecodedImage, AppError> {
    if extension.eq_ignore_ascii_case("heic") {
        return decode_heic(data);
    }

    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| AppError::Decode(e.to_string()))?;

    let guessed = reader
        .format()
        .ok_or_else(|| AppError::Decode("unrecognized image format".to_string()))?;

    let format = SourceFormat::from_image_format(guessed)
        .ok_or_else(|| AppError::Decode(format!("unsupported image format: {:?}", guessed)))?;

    let image = reader
        .decode()
        .map_err(|e| AppError::Decode(e.to_string()))?;

    tracing::debug!(format = ?format, width = image.width(), height = image.height(), "Decoded image");

    Ok(DecodedImage { image, format })
}

#[cfg(feature = "heic")]
fn decode_heic(data: &[u8]) -> Result<DecodedImage, AppError> {
    crate::heic::decode(data)
}

#[cfg(not(feature = "heic"))]
fn decode_heic(_data: &[u8]) -> Result<DecodedImage, AppError> {
    Err(AppError::Decode(
        "heic support not enabled (build with the `heic` feature)".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};

    fn encode_fixture(format: ImageFormat) -> Vec<u8> {
        let img = RgbImage::from_pixel(8, 4, Rgb([200, 40, 40]));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), format).unwrap();
        buffer
    }

    #[test]
    fn decodes_by_sniffing_not_extension() {
        // PNG bytes behind a .jpg hint still decode as PNG
        let data = encode_fixture(ImageFormat::Png);
        let decoded = decode(&data, "jpg").unwrap();
        assert_eq!(decoded.format, SourceFormat::Png);
        assert_eq!(decoded.image.width(), 8);
        assert_eq!(decoded.image.height(), 4);
    }

    #[test]
    fn decodes_jpeg() {
        let data = encode_fixture(ImageFormat::Jpeg);
        let decoded = decode(&data, "jpeg").unwrap();
        assert_eq!(decoded.format, SourceFormat::Jpeg);
    }

    #[test]
    fn corrupt_stream_is_a_decode_error() {
        let result = decode(b"definitely not an image", "png");
        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[test]
    fn truncated_stream_is_a_decode_error() {
        let mut data = encode_fixture(ImageFormat::Png);
        data.truncate(data.len() / 2);
        let result = decode(&data, "png");
        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[cfg(not(feature = "heic"))]
    #[test]
    fn heic_hint_without_feature_fails_cleanly() {
        let data = encode_fixture(ImageFormat::Png);
        let result = decode(&data, "heic");
        assert!(matches!(result, Err(AppError::Decode(_))));
    }
}
