//! Shared fixtures for pipeline tests.

use image::{Rgb, RgbImage};
use img_parts::{jpeg::Jpeg, ImageEXIF};
use std::io::Cursor;

/// Minimal little-endian TIFF block with a single orientation entry, in the
/// shape img-parts expects for a JPEG APP1 payload.
pub(crate) fn exif_orientation_payload(orientation: u16) -> Vec<u8> {
    let mut raw = vec![
        0x49, 0x49, 0x2a, 0x00, // II, 42
        0x08, 0x00, 0x00, 0x00, // IFD offset 8
        0x01, 0x00, // one entry
        0x12, 0x01, // tag 0x0112 (Orientation)
        0x03, 0x00, // type SHORT
        0x01, 0x00, 0x00, 0x00, // count 1
    ];
    raw.extend_from_slice(&orientation.to_le_bytes());
    raw.extend_from_slice(&[0x00, 0x00]); // value padding
    raw.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // no next IFD
    raw
}

/// JPEG fixture of the given size carrying the given EXIF orientation tag.
pub(crate) fn jpeg_with_orientation(width: u32, height: u32, orientation: u16) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([10, 120, 240]));
    let mut plain = Vec::new();
    img.write_to(&mut Cursor::new(&mut plain), image::ImageFormat::Jpeg)
        .unwrap();

    let mut jpeg = Jpeg::from_bytes(plain.into()).unwrap();
    jpeg.set_exif(Some(exif_orientation_payload(orientation).into()));
    jpeg.encoder().bytes().to_vec()
}

/// Plain fixture with no EXIF in the requested container format.
pub(crate) fn plain_image(width: u32, height: u32, format: image::ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([64, 160, 96]));
    let mut data = Vec::new();
    img.write_to(&mut Cursor::new(&mut data), format).unwrap();
    data
}
