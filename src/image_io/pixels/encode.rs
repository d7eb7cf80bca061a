//! Encoding of in-memory images into codec-bound pixel buffers

use crate::image_io::pixels::types::{RGBA_CHANNELS, RawPixelBuffer, WriteSource};
use crate::image_io::range::DynamicRange;

const U16_SCALE: f32 = u16::MAX as f32;

/// Flattens a source image into the four-channel buffer handed to the
/// encoder, applying the encoding transform the destination range needs.
///
/// HDR destinations receive linear samples verbatim, including values
/// outside [0, 1]. LDR destinations receive gamma-encoded R, G, B clamped to
/// [0, 1]; alpha is clamped but never gamma-encoded. Generic sources bypass
/// the transform entirely and are copied at 16-bit precision, so they lose
/// sub-16-bit detail and any out-of-range values.
pub fn rasterize(source: WriteSource<'_>, range: DynamicRange, gamma: f32) -> RawPixelBuffer {
    let bounds = source.bounds();
    let mut buffer = RawPixelBuffer::new(bounds.width, bounds.height, RGBA_CHANNELS);

    match source {
        WriteSource::Float(image) => {
            for row in 0..bounds.height {
                let y = bounds.y + row as i64;
                for col in 0..bounds.width {
                    let x = bounds.x + col as i64;
                    let [r, g, b, a] = image.rgba_at(x, y);
                    let out = buffer.pixel_mut(col, row);
                    match range {
                        DynamicRange::Hdr => {
                            out.copy_from_slice(&[r, g, b, a]);
                        }
                        DynamicRange::Ldr => {
                            out[0] = encode_gamma(r, gamma);
                            out[1] = encode_gamma(g, gamma);
                            out[2] = encode_gamma(b, gamma);
                            out[3] = a.clamp(0.0, 1.0);
                        }
                    }
                }
            }
        }
        WriteSource::Generic(image) => {
            for row in 0..bounds.height {
                let y = bounds.y + row as i64;
                for col in 0..bounds.width {
                    let x = bounds.x + col as i64;
                    let [r, g, b, a] = image.rgba16_at(x, y);
                    let out = buffer.pixel_mut(col, row);
                    out[0] = r as f32 / U16_SCALE;
                    out[1] = g as f32 / U16_SCALE;
                    out[2] = b as f32 / U16_SCALE;
                    out[3] = a as f32 / U16_SCALE;
                }
            }
        }
    }

    buffer
}

/// Display-referred encoding for LDR output: clamp, then `v^(1/gamma)`.
fn encode_gamma(value: f32, gamma: f32) -> f32 {
    value.clamp(0.0, 1.0).powf(1.0 / gamma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_io::common::config::DEFAULT_GAMMA;
    use crate::image_io::pixels::normalize::normalize;
    use crate::image_io::pixels::types::{Bounds, FloatRgbaImage, Rgba16Image};

    #[test]
    fn ldr_encoding_clamps_and_gamma_encodes_color() {
        let mut image = FloatRgbaImage::new(2, 1);
        image.put_rgba(0, 0, [-0.5, 2.0, 0.5, 1.5]);
        image.put_rgba(1, 0, [0.0, 1.0, 0.25, 0.5]);

        let buffer = rasterize(WriteSource::Float(&image), DynamicRange::Ldr, DEFAULT_GAMMA);

        let px = buffer.pixel(0, 0);
        assert_eq!(px[0], 0.0);
        assert_eq!(px[1], 1.0);
        assert!((px[2] - 0.5f32.powf(1.0 / 2.2)).abs() < 1e-6);
        assert!((px[2] - 0.7297).abs() < 1e-3);
        // Alpha is clamped but never gamma-encoded
        assert_eq!(px[3], 1.0);

        assert_eq!(buffer.pixel(1, 0)[3], 0.5);
    }

    #[test]
    fn hdr_encoding_passes_samples_through() {
        let mut image = FloatRgbaImage::new(1, 1);
        image.put_rgba(0, 0, [-0.5, 2.0, 1e6, 0.25]);

        let buffer = rasterize(WriteSource::Float(&image), DynamicRange::Hdr, DEFAULT_GAMMA);

        assert_eq!(buffer.pixel(0, 0), &[-0.5, 2.0, 1e6, 0.25]);
    }

    #[test]
    fn round_trip_under_hdr_is_identity() {
        let data: Vec<f32> = (0..32).map(|v| (v as f32 - 8.0) * 0.75).collect();
        let buffer = RawPixelBuffer::from_samples(4, 2, 4, data.clone()).unwrap();

        let image = normalize(&buffer).unwrap();
        let back = rasterize(WriteSource::Float(&image), DynamicRange::Hdr, DEFAULT_GAMMA);

        assert_eq!(back.samples(), data.as_slice());
    }

    #[test]
    fn rasterize_honours_bounds_origin() {
        let mut image = FloatRgbaImage::with_bounds(Bounds::new(10, 20, 2, 2));
        image.put_rgba(11, 21, [1.0, 2.0, 3.0, 4.0]);

        let buffer = rasterize(WriteSource::Float(&image), DynamicRange::Hdr, DEFAULT_GAMMA);

        assert_eq!(buffer.pixel(1, 1), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(buffer.pixel(0, 0), &[0.0, 0.0, 0.0, 0.0]);
    }

    struct TwoPixelSource;

    impl Rgba16Image for TwoPixelSource {
        fn bounds(&self) -> Bounds {
            Bounds::at_origin(2, 1)
        }

        fn rgba16_at(&self, x: i64, _y: i64) -> [u16; 4] {
            if x == 0 {
                [0, 65535, 32768, 65535]
            } else {
                [257, 514, 771, 1028]
            }
        }
    }

    #[test]
    fn generic_sources_copy_at_sixteen_bit_precision() {
        // Gamma and clamping are skipped for generic sources even under LDR
        let buffer = rasterize(
            WriteSource::Generic(&TwoPixelSource),
            DynamicRange::Ldr,
            DEFAULT_GAMMA,
        );

        assert_eq!(buffer.pixel(0, 0), &[0.0, 1.0, 32768.0 / 65535.0, 1.0]);

        let px = buffer.pixel(1, 0);
        assert!((px[0] - 257.0 / 65535.0).abs() < 1e-7);
        assert!((px[3] - 1028.0 / 65535.0).abs() < 1e-7);
    }
}
