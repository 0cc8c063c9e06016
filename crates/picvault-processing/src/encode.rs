//! Encoder stage: final pixel buffer → output byte stream.
//!
//! The output container follows the decoded source format: PNG sources are
//! re-encoded lossless with no quality parameter, everything else becomes
//! JPEG at the resolved quality.

use crate::color::Quality;
use crate::format::{OutputFormat, SourceFormat};
use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use picvault_core::AppError;
use std::io::Cursor;

/// Encoded response body plus its media type.
pub struct EncodedImage {
    pub bytes: Bytes,
    pub media_type: &'static str,
}

/// Serialize the buffer in the format dictated by the source format.
pub fn encode(
    image: DynamicImage,
    source: SourceFormat,
    quality: Quality,
) -> Result<EncodedImage, AppError> {
    let output = OutputFormat::for_source(source);
    let bytes = match output {
        OutputFormat::Png => encode_png(image)?,
        OutputFormat::Jpeg => encode_jpeg(image, quality)?,
    };

    Ok(EncodedImage {
        bytes,
        media_type: output.media_type(),
    })
}

fn encode_png(image: DynamicImage) -> Result<Bytes, AppError> {
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
        .map_err(|e| AppError::Encode(e.to_string()))?;
    Ok(Bytes::from(buffer))
}

fn encode_jpeg(image: DynamicImage, quality: Quality) -> Result<Bytes, AppError> {
    let mut buffer = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(Cursor::new(&mut buffer), quality.value());

    // JPEG takes L8 and RGB8; flatten alpha and deep channels first.
    let result = match image {
        DynamicImage::ImageLuma8(gray) => encoder.encode_image(&gray),
        DynamicImage::ImageRgb8(rgb) => encoder.encode_image(&rgb),
        other => encoder.encode_image(&other.to_rgb8()),
    };
    result.map_err(|e| AppError::Encode(e.to_string()))?;

    Ok(Bytes::from(buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G'];
    const JPEG_MAGIC: &[u8] = &[0xff, 0xd8];

    fn rgb_image() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, Rgb([120, 30, 200])))
    }

    #[test]
    fn png_source_stays_png() {
        let out = encode(rgb_image(), SourceFormat::Png, Quality::resolve(Some("10"))).unwrap();
        assert_eq!(out.media_type, "image/png");
        assert_eq!(&out.bytes[..4], PNG_MAGIC);
    }

    #[test]
    fn lossy_sources_become_jpeg() {
        for source in [SourceFormat::Jpeg, SourceFormat::Gif, SourceFormat::Heic] {
            let out = encode(rgb_image(), source, Quality::DEFAULT).unwrap();
            assert_eq!(out.media_type, "image/jpeg");
            assert_eq!(&out.bytes[..2], JPEG_MAGIC);
        }
    }

    #[test]
    fn quality_changes_jpeg_size() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(64, 64, |x, y| {
            Rgb([(x * 4) as u8, (y * 4) as u8, ((x + y) * 2) as u8])
        }));
        let low = encode(img.clone(), SourceFormat::Jpeg, Quality::resolve(Some("10"))).unwrap();
        let high = encode(img, SourceFormat::Jpeg, Quality::resolve(Some("95"))).unwrap();
        assert!(low.bytes.len() < high.bytes.len());
    }

    #[test]
    fn rgba_buffer_encodes_as_jpeg_after_flattening() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 128])));
        let out = encode(img, SourceFormat::Jpeg, Quality::DEFAULT).unwrap();
        assert_eq!(out.media_type, "image/jpeg");
        assert_eq!(&out.bytes[..2], JPEG_MAGIC);
    }

    #[test]
    fn grayscale_buffer_encodes_in_both_containers() {
        let gray = crate::color::to_grayscale(rgb_image());
        let jpeg = encode(gray.clone(), SourceFormat::Jpeg, Quality::DEFAULT).unwrap();
        assert_eq!(&jpeg.bytes[..2], JPEG_MAGIC);
        let png = encode(gray, SourceFormat::Png, Quality::DEFAULT).unwrap();
        assert_eq!(&png.bytes[..4], PNG_MAGIC);
    }
}
