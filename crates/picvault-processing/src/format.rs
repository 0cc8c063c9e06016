//! Image format types.
//!
//! The source format is resolved exactly once, at decode time, and carried
//! through the pipeline as a typed field; no stage re-inspects extension or
//! magic-byte strings.

/// Format of the decoded source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Jpeg,
    Png,
    Gif,
    WebP,
    Tiff,
    Bmp,
    Heic,
}

impl SourceFormat {
    /// Map the sniffing decoder's format to ours. Returns `None` for formats
    /// the pipeline does not handle.
    pub fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Jpeg => Some(SourceFormat::Jpeg),
            image::ImageFormat::Png => Some(SourceFormat::Png),
            image::ImageFormat::Gif => Some(SourceFormat::Gif),
            image::ImageFormat::WebP => Some(SourceFormat::WebP),
            image::ImageFormat::Tiff => Some(SourceFormat::Tiff),
            image::ImageFormat::Bmp => Some(SourceFormat::Bmp),
            _ => None,
        }
    }

    /// Whether re-encoding in this container preserves exact pixel values.
    pub fn is_lossless(self) -> bool {
        matches!(self, SourceFormat::Png)
    }
}

/// Output container chosen by the encoder. PNG sources stay PNG (lossless,
/// no quality parameter); everything else is re-encoded as JPEG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    /// Output format is sticky to the decoded source format, not to the
    /// request's file extension.
    pub fn for_source(source: SourceFormat) -> Self {
        if source.is_lossless() {
            OutputFormat::Png
        } else {
            OutputFormat::Jpeg
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
        }
    }

    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            OutputFormat::Jpeg => image::ImageFormat::Jpeg,
            OutputFormat::Png => image::ImageFormat::Png,
        }
    }
}
