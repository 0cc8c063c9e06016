//! The picvault transform pipeline.
//!
//! Raw object bytes go in, encoded response bytes come out:
//! decode → EXIF orientation correction → resize → grayscale/quality →
//! format-aware encode. Every stage consumes its input buffer and produces a
//! new one; nothing here is shared across requests.
//!
//! HEIC decoding sits behind the off-by-default `heic` feature because it
//! links against the system libheif. Without the feature, `.heic` requests
//! fail with a typed decode error.

pub mod color;
pub mod decode;
pub mod encode;
pub mod format;
#[cfg(feature = "heic")]
mod heic;
pub mod orientation;
pub mod pipeline;
pub mod resize;
#[cfg(test)]
pub(crate) mod testutil;

pub use color::Quality;
pub use decode::DecodedImage;
pub use encode::EncodedImage;
pub use format::{OutputFormat, SourceFormat};
pub use orientation::Orientation;
pub use pipeline::{process, TransformRequest};
