//! EXIF orientation correction.
//!
//! The accessor returns `Option<Orientation>`: absent or malformed metadata
//! is `None` and means "no correction", never an error. The correction
//! mapping follows the EXIF convention (tag 6 needs a 90° clockwise turn to
//! display upright, tag 8 a 270° turn), which is also what the original
//! pillow calls amounted to in counter-clockwise degrees.

use image::DynamicImage;
use std::io::Cursor;

/// EXIF orientation values the corrector acts on, named as in the EXIF
/// specification by where the stored row/column origin sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Tag 3: stored upside down; correct with a 180° turn.
    BottomRight,
    /// Tag 6: correct with a 90° clockwise turn.
    RightTop,
    /// Tag 8: correct with a 270° clockwise turn.
    LeftBottom,
}

impl Orientation {
    /// Tag values other than 3, 6, and 8 (including 1, "normal") need no
    /// correction and map to `None`.
    pub fn from_exif_value(value: u32) -> Option<Self> {
        match value {
            3 => Some(Orientation::BottomRight),
            6 => Some(Orientation::RightTop),
            8 => Some(Orientation::LeftBottom),
            _ => None,
        }
    }
}

/// Read the orientation tag from the image's embedded metadata.
pub fn read_orientation(data: &[u8]) -> Option<Orientation> {
    let exif = exif::Reader::new()
        .read_from_container(&mut Cursor::new(data))
        .ok()?;
    let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
    let value = field.value.get_uint(0)?;
    Orientation::from_exif_value(value)
}

/// Apply the correction, expanding the canvas to exactly bound the rotated
/// content (90°/270° turns swap width and height).
pub fn correct(image: DynamicImage, orientation: Option<Orientation>) -> DynamicImage {
    match orientation {
        None => image,
        Some(Orientation::BottomRight) => image.rotate180(),
        Some(Orientation::RightTop) => image.rotate90(),
        Some(Orientation::LeftBottom) => image.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::jpeg_with_orientation;
    use image::{Rgb, RgbImage};

    #[test]
    fn tag_values_map_to_corrections() {
        assert_eq!(Orientation::from_exif_value(3), Some(Orientation::BottomRight));
        assert_eq!(Orientation::from_exif_value(6), Some(Orientation::RightTop));
        assert_eq!(Orientation::from_exif_value(8), Some(Orientation::LeftBottom));
        assert_eq!(Orientation::from_exif_value(1), None);
        assert_eq!(Orientation::from_exif_value(2), None);
        assert_eq!(Orientation::from_exif_value(0), None);
        assert_eq!(Orientation::from_exif_value(99), None);
    }

    #[test]
    fn missing_exif_reads_as_none() {
        let img = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        let mut data = Vec::new();
        img.write_to(&mut Cursor::new(&mut data), image::ImageFormat::Jpeg)
            .unwrap();
        assert_eq!(read_orientation(&data), None);
    }

    #[test]
    fn malformed_exif_reads_as_none() {
        assert_eq!(read_orientation(b"garbage"), None);
        assert_eq!(read_orientation(&[]), None);
    }

    #[test]
    fn embedded_orientation_is_read_back() {
        let data = jpeg_with_orientation(10, 6, 6);
        assert_eq!(read_orientation(&data), Some(Orientation::RightTop));

        let data = jpeg_with_orientation(10, 6, 3);
        assert_eq!(read_orientation(&data), Some(Orientation::BottomRight));

        let data = jpeg_with_orientation(10, 6, 1);
        assert_eq!(read_orientation(&data), None);
    }

    #[test]
    fn quarter_turns_swap_dimensions() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(100, 50, Rgb([1, 2, 3])));

        let corrected = correct(img.clone(), Some(Orientation::RightTop));
        assert_eq!((corrected.width(), corrected.height()), (50, 100));

        let corrected = correct(img.clone(), Some(Orientation::LeftBottom));
        assert_eq!((corrected.width(), corrected.height()), (50, 100));

        let corrected = correct(img.clone(), Some(Orientation::BottomRight));
        assert_eq!((corrected.width(), corrected.height()), (100, 50));

        let corrected = correct(img, None);
        assert_eq!((corrected.width(), corrected.height()), (100, 50));
    }

    #[test]
    fn rotation_moves_pixels_the_conventional_way() {
        // 2x1 image: red on the left, blue on the right. A 90° clockwise
        // turn puts red at the top.
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 0, 255]));
        let img = DynamicImage::ImageRgb8(img);

        let corrected = correct(img, Some(Orientation::RightTop)).to_rgb8();
        assert_eq!(corrected.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(corrected.get_pixel(0, 1), &Rgb([0, 0, 255]));
    }
}
