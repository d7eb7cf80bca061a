//! Image file reader implementation using the `image` crate.
//!
//! Decodes any container format the `image` crate recognizes (PNG, JPEG,
//! OpenEXR, Radiance HDR, TIFF, and the rest) and exposes the decoded
//! samples as floats with the file's own channel count. LDR sources come
//! back scaled to [0, 1]; float sources (EXR, HDR) keep their full range.

use std::path::Path;

use image::ImageReader;
use tracing::debug;

use crate::image_io::codec::reader::ImageFileReader;
use crate::image_io::common::error::{ImageIoError, Result};
use crate::image_io::pixels::types::RawPixelBuffer;

/// Reader backed by the `image` crate's format auto-detection.
pub struct ImageRsReader;

impl ImageFileReader for ImageRsReader {
    /// Opens and decodes an image file into a flat float buffer.
    ///
    /// The channel count mirrors the file's colour type; rejecting counts
    /// the pipeline cannot represent is the normalization step's call, so
    /// one- and two-channel sources are passed through as-is.
    fn read_image(&self, path: &Path) -> Result<RawPixelBuffer> {
        debug!("Decoding image file {}", path.display());

        let decoded = ImageReader::open(path)
            .map_err(|e| ImageIoError::DecodeError(format!("{}: {}", path.display(), e)))?
            .with_guessed_format()
            .map_err(|e| ImageIoError::DecodeError(format!("{}: {}", path.display(), e)))?
            .decode()
            .map_err(|e| ImageIoError::DecodeError(e.to_string()))?;

        let width = decoded.width() as usize;
        let height = decoded.height() as usize;

        let (channels, data) = match decoded.color().channel_count() {
            1 => (1, decoded.to_luma32f().into_raw()),
            2 => (2, decoded.to_luma_alpha32f().into_raw()),
            3 => (3, decoded.to_rgb32f().into_raw()),
            _ => (4, decoded.to_rgba32f().into_raw()),
        };

        debug!("Decoded image: {}x{}, {} channels", width, height, channels);

        RawPixelBuffer::from_samples(width, height, channels, data)
    }
}
