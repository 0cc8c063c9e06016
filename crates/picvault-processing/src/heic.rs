//! Dedicated HEIC container decoder.
//!
//! HEIC is the one format where the extension hint is trusted: the container
//! is handed straight to libheif, which extracts size and interleaved RGB
//! pixel data, and the result is wrapped into the pipeline's buffer type.

use crate::decode::DecodedImage;
use crate::format::SourceFormat;
use image::{DynamicImage, RgbImage};
use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};
use picvault_core::AppError;

pub fn decode(data: &[u8]) -> Result<DecodedImage, AppError> {
    let lib_heif = LibHeif::new();
    let context = HeifContext::read_from_bytes(data)
        .map_err(|e| AppError::Decode(format!("heic container: {}", e)))?;
    let handle = context
        .primary_image_handle()
        .map_err(|e| AppError::Decode(format!("heic primary image: {}", e)))?;

    let decoded = lib_heif
        .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgb), None)
        .map_err(|e| AppError::Decode(format!("heic decode: {}", e)))?;

    let planes = decoded.planes();
    let plane = planes
        .interleaved
        .ok_or_else(|| AppError::Decode("heic: missing interleaved plane".to_string()))?;

    let width = plane.width;
    let height = plane.height;
    let stride = plane.stride;
    let row_bytes = width as usize * 3;

    // Rows may be padded to `stride`; copy them out tightly.
    let mut pixels = Vec::with_capacity(row_bytes * height as usize);
    for row in 0..height as usize {
        let start = row * stride;
        pixels.extend_from_slice(&plane.data[start..start + row_bytes]);
    }

    let buffer = RgbImage::from_raw(width, height, pixels)
        .ok_or_else(|| AppError::Decode("heic: pixel buffer size mismatch".to_string()))?;

    tracing::debug!(width, height, "Decoded HEIC image");

    Ok(DecodedImage {
        image: DynamicImage::ImageRgb8(buffer),
        format: SourceFormat::Heic,
    })
}
