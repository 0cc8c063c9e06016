//! Geometry resizer.
//!
//! With one dimension given the other is derived from the original aspect
//! ratio and the image is resized to exactly that box. With both given the
//! box is treated as bounds: the output is the largest size that fits inside
//! while keeping the original ratio (thumbnail semantics), never a stretch.

use image::imageops::FilterType;
use image::DynamicImage;

/// Resolve the target box for the given optional dimensions.
/// Returns `None` when no resize was requested.
pub fn resolve_target(
    orig_width: u32,
    orig_height: u32,
    width: Option<u32>,
    height: Option<u32>,
) -> Option<(u32, u32)> {
    match (width, height) {
        (None, None) => None,
        (Some(w), None) => {
            let ratio = orig_height as f64 / orig_width as f64;
            let h = (w as f64 * ratio).round() as u32;
            Some((w, h.max(1)))
        }
        (None, Some(h)) => {
            let ratio = orig_width as f64 / orig_height as f64;
            let w = (h as f64 * ratio).round() as u32;
            Some((w.max(1), h))
        }
        (Some(w), Some(h)) => Some((w, h)),
    }
}

/// Pick a resampling filter by downscale ratio: cheap filters for heavy
/// reductions, Lanczos when sizes are close.
pub fn select_filter(orig_width: u32, orig_height: u32, new_width: u32, new_height: u32) -> FilterType {
    let width_ratio = orig_width as f32 / new_width as f32;
    let height_ratio = orig_height as f32 / new_height as f32;
    let max_ratio = width_ratio.max(height_ratio);

    if max_ratio > 2.0 {
        FilterType::Triangle
    } else if max_ratio > 1.5 {
        FilterType::CatmullRom
    } else {
        FilterType::Lanczos3
    }
}

/// Apply the resize stage. Passes the buffer through untouched when neither
/// dimension is set.
pub fn apply(image: DynamicImage, width: Option<u32>, height: Option<u32>) -> DynamicImage {
    let (orig_width, orig_height) = (image.width(), image.height());
    let Some((w, h)) = resolve_target(orig_width, orig_height, width, height) else {
        return image;
    };

    let filter = select_filter(orig_width, orig_height, w, h);
    tracing::debug!(orig_width, orig_height, target_width = w, target_height = h, "Resizing");

    let both_given = width.is_some() && height.is_some();
    if both_given {
        // Bounding-box fit; `resize` keeps the aspect ratio within (w, h).
        image.resize(w, h, filter)
    } else {
        // The derived box is already proportional; hit it exactly so the
        // requested dimension is honored to the pixel.
        image.resize_exact(w, h, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn image_of(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([9, 9, 9])))
    }

    #[test]
    fn no_dimensions_passes_through() {
        assert_eq!(resolve_target(100, 50, None, None), None);
        let out = apply(image_of(100, 50), None, None);
        assert_eq!((out.width(), out.height()), (100, 50));
    }

    #[test]
    fn width_only_derives_height() {
        // h = 50/100 * 200 = 100
        assert_eq!(resolve_target(100, 50, Some(200), None), Some((200, 100)));
        let out = apply(image_of(100, 50), Some(200), None);
        assert_eq!((out.width(), out.height()), (200, 100));
    }

    #[test]
    fn height_only_derives_width() {
        // w = 100/50 * 100 = 200
        assert_eq!(resolve_target(100, 50, None, Some(100)), Some((200, 100)));
        let out = apply(image_of(100, 50), None, Some(100));
        assert_eq!((out.width(), out.height()), (200, 100));
    }

    #[test]
    fn derived_dimension_rounds() {
        // h = 200/300 * 100 = 66.67 → 67
        assert_eq!(resolve_target(300, 200, Some(100), None), Some((100, 67)));
    }

    #[test]
    fn derived_dimension_never_collapses_to_zero() {
        assert_eq!(resolve_target(1000, 2, Some(100), None), Some((100, 1)));
    }

    #[test]
    fn both_dimensions_fit_within_box_preserving_ratio() {
        // 100x50 into a 60x60 box: largest fit is 60x30
        let out = apply(image_of(100, 50), Some(60), Some(60));
        assert!(out.width() <= 60 && out.height() <= 60);
        assert_eq!((out.width(), out.height()), (60, 30));

        // Tall image into a wide box
        let out = apply(image_of(50, 100), Some(80), Some(40));
        assert!(out.width() <= 80 && out.height() <= 40);
        assert_eq!((out.width(), out.height()), (20, 40));
    }

    #[test]
    fn aspect_ratio_preserved_within_rounding() {
        let out = apply(image_of(640, 480), Some(123), None);
        let ratio = out.height() as f64 / out.width() as f64;
        assert!((ratio - 0.75).abs() < 0.02);
    }

    #[test]
    fn filter_selection_by_ratio() {
        assert_eq!(select_filter(1000, 1000, 100, 100), FilterType::Triangle);
        assert_eq!(select_filter(180, 180, 100, 100), FilterType::CatmullRom);
        assert_eq!(select_filter(110, 110, 100, 100), FilterType::Lanczos3);
    }
}
