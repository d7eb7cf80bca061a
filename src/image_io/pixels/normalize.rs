//! Normalization of decoded pixel buffers into the float RGBA image

use tracing::debug;

use crate::image_io::common::error::{ImageIoError, Result};
use crate::image_io::pixels::types::{Bounds, FloatRgbaImage, RGBA_CHANNELS, RawPixelBuffer};

/// Converts a decoded buffer into the four-channel float representation.
///
/// Four-channel sources are copied verbatim. Three-channel sources get a
/// synthesized opaque alpha: the format carries none, and a zero default
/// would read as fully transparent under compositing. No scaling, gamma, or
/// clamping happens on read.
pub fn normalize(buffer: &RawPixelBuffer) -> Result<FloatRgbaImage> {
    let bounds = Bounds::at_origin(buffer.width(), buffer.height());

    match buffer.channels() {
        4 => FloatRgbaImage::from_pix(bounds, buffer.samples().to_vec()),
        3 => {
            let mut pix = Vec::with_capacity(buffer.width() * buffer.height() * RGBA_CHANNELS);
            for rgb in buffer.samples().chunks_exact(3) {
                pix.extend_from_slice(rgb);
                pix.push(1.0);
            }
            FloatRgbaImage::from_pix(bounds, pix)
        }
        count => {
            debug!("Rejecting decoded buffer with {} channels", count);
            Err(ImageIoError::UnsupportedChannelCount(count))
        }
    }
}
