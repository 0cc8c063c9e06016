//! Color-mode conversion and quality resolution.

use image::DynamicImage;

/// Convert the buffer to single-channel luminance. Color channels are gone
/// for this response only; the stored object is untouched.
pub fn to_grayscale(image: DynamicImage) -> DynamicImage {
    DynamicImage::ImageLuma8(image.to_luma8())
}

/// Lossy-encoding quality, always within `[1, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub const DEFAULT: Quality = Quality(75);

    /// Resolve the raw `q` query value. Only a non-empty digit string in
    /// `[1, 100]` is honored; anything else falls back to the default.
    pub fn resolve(raw: Option<&str>) -> Quality {
        let Some(s) = raw else {
            return Quality::DEFAULT;
        };
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Quality::DEFAULT;
        }
        match s.parse::<u32>() {
            Ok(v) if (1..=100).contains(&v) => Quality(v as u8),
            _ => Quality::DEFAULT,
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Quality::DEFAULT
    }
}
