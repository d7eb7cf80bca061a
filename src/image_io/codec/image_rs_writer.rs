//! Image file writer implementation using the `image` crate.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::hdr::HdrEncoder;
use image::{DynamicImage, ImageFormat, Rgb, Rgba32FImage, RgbaImage};
use tracing::debug;

use crate::image_io::codec::writer::ImageFileWriter;
use crate::image_io::common::error::{ImageIoError, Result};
use crate::image_io::pixels::types::{RGBA_CHANNELS, RawPixelBuffer};
use crate::image_io::range::DynamicRange;

/// Writer backed by the `image` crate's encoders.
///
/// HDR destinations are written as 32-bit float data (OpenEXR, or Radiance
/// HDR through its RGBE encoder); LDR destinations are written as 8-bit
/// data, assuming the caller already gamma-encoded the samples into [0, 1].
pub struct ImageRsWriter;

impl ImageFileWriter for ImageRsWriter {
    fn write_image(
        &self,
        path: &Path,
        buffer: &RawPixelBuffer,
        range: DynamicRange,
    ) -> Result<()> {
        debug!(
            "Encoding image file {}: {}x{}, {:?}",
            path.display(),
            buffer.width(),
            buffer.height(),
            range
        );

        let format = ImageFormat::from_path(path)
            .map_err(|_| ImageIoError::UnsupportedFormat(path.display().to_string()))?;

        match range {
            DynamicRange::Hdr => write_float(path, buffer, format),
            DynamicRange::Ldr => write_eight_bit(path, buffer, format),
        }
    }
}

fn size_mismatch(buffer: &RawPixelBuffer) -> ImageIoError {
    ImageIoError::BufferSizeMismatch {
        expected: buffer.width() * buffer.height() * RGBA_CHANNELS,
        actual: buffer.samples().len(),
    }
}

fn write_float(path: &Path, buffer: &RawPixelBuffer, format: ImageFormat) -> Result<()> {
    let width = buffer.width() as u32;
    let height = buffer.height() as u32;

    let pixels = Rgba32FImage::from_raw(width, height, buffer.samples().to_vec())
        .ok_or_else(|| size_mismatch(buffer))?;

    match format {
        ImageFormat::Hdr => {
            // Radiance HDR stores RGB only; alpha does not survive
            let rgb: Vec<Rgb<f32>> = DynamicImage::ImageRgba32F(pixels)
                .to_rgb32f()
                .pixels()
                .copied()
                .collect();
            let file = File::create(path)
                .map_err(|e| ImageIoError::EncodeError(format!("{}: {}", path.display(), e)))?;
            HdrEncoder::new(BufWriter::new(file))
                .encode(&rgb, width as usize, height as usize)
                .map_err(|e| ImageIoError::EncodeError(e.to_string()))
        }
        _ => pixels
            .save_with_format(path, format)
            .map_err(|e| ImageIoError::EncodeError(e.to_string())),
    }
}

fn write_eight_bit(path: &Path, buffer: &RawPixelBuffer, format: ImageFormat) -> Result<()> {
    let width = buffer.width() as u32;
    let height = buffer.height() as u32;

    let data: Vec<u8> = buffer
        .samples()
        .iter()
        .map(|&v| (v * 255.0 + 0.5) as u8)
        .collect();
    let pixels = RgbaImage::from_raw(width, height, data).ok_or_else(|| size_mismatch(buffer))?;

    // The JPEG and PNM encoders reject an alpha channel
    let out = match format {
        ImageFormat::Jpeg | ImageFormat::Pnm => {
            DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(pixels).to_rgb8())
        }
        _ => DynamicImage::ImageRgba8(pixels),
    };

    out.save_with_format(path, format)
        .map_err(|e| ImageIoError::EncodeError(e.to_string()))
}
