//! The per-request transform pipeline.
//!
//! Wires the stages in sequence for one fetched object. Synchronous and
//! CPU-bound by design; the HTTP layer runs it on a blocking worker so it
//! never stalls the I/O threads.

use crate::color::{self, Quality};
use crate::decode;
use crate::encode::{self, EncodedImage};
use crate::orientation;
use crate::resize;
use picvault_core::AppError;

/// Parsed transform parameters for one request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformRequest {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub grayscale: bool,
    pub quality: Quality,
}

/// Run the full pipeline: decode, correct orientation, resize, convert,
/// encode. The output format follows the decoded source format.
pub fn process(
    data: &[u8],
    extension: &str,
    request: &TransformRequest,
) -> Result<EncodedImage, AppError> {
    let decoded = decode::decode(data, extension)?;
    let source = decoded.format;

    let tag = orientation::read_orientation(data);
    let mut image = orientation::correct(decoded.image, tag);

    image = resize::apply(image, request.width, request.height);

    if request.grayscale {
        image = color::to_grayscale(image);
    }

    tracing::debug!(
        source = ?source,
        orientation = ?tag,
        width = image.width(),
        height = image.height(),
        grayscale = request.grayscale,
        quality = request.quality.value(),
        "Encoding transformed image"
    );

    encode::encode(image, source, request.quality)
}
