//! Pixel buffer types exchanged with callers and with the codec boundary

use crate::image_io::common::error::{ImageIoError, Result};

/// Channels in the in-memory representation (R, G, B, A).
pub const RGBA_CHANNELS: usize = 4;

/// Origin and size of a pixel rectangle.
///
/// Pixel coordinates are addressed relative to the origin, so images whose
/// rectangle does not start at (0, 0) still map to a flat buffer starting at
/// index zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: i64,
    pub y: i64,
    pub width: usize,
    pub height: usize,
}

impl Bounds {
    pub fn new(x: i64, y: i64, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn at_origin(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }
}

/// In-memory linear-float RGBA image.
///
/// Samples are row-major R, G, B, A and are not clamped: values above 1.0
/// and below 0.0 are legitimate and survive untouched until an LDR encode
/// asks for clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatRgbaImage {
    pub bounds: Bounds,
    /// Flat samples, `bounds.width * bounds.height * 4` long
    pub pix: Vec<f32>,
}

impl FloatRgbaImage {
    /// Allocates a zeroed image with its origin at (0, 0).
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_bounds(Bounds::at_origin(width, height))
    }

    pub fn with_bounds(bounds: Bounds) -> Self {
        let pix = vec![0.0; bounds.width * bounds.height * RGBA_CHANNELS];
        Self { bounds, pix }
    }

    /// Wraps an existing sample buffer, validating its length.
    pub fn from_pix(bounds: Bounds, pix: Vec<f32>) -> Result<Self> {
        let expected = bounds.width * bounds.height * RGBA_CHANNELS;
        if pix.len() != expected {
            return Err(ImageIoError::BufferSizeMismatch {
                expected,
                actual: pix.len(),
            });
        }
        Ok(Self { bounds, pix })
    }

    pub fn width(&self) -> usize {
        self.bounds.width
    }

    pub fn height(&self) -> usize {
        self.bounds.height
    }

    fn index_of(&self, x: i64, y: i64) -> usize {
        let col = (x - self.bounds.x) as usize;
        let row = (y - self.bounds.y) as usize;
        (row * self.bounds.width + col) * RGBA_CHANNELS
    }

    /// R, G, B, A at `(x, y)` in bounds coordinates.
    pub fn rgba_at(&self, x: i64, y: i64) -> [f32; 4] {
        let idx = self.index_of(x, y);
        [
            self.pix[idx],
            self.pix[idx + 1],
            self.pix[idx + 2],
            self.pix[idx + 3],
        ]
    }

    pub fn put_rgba(&mut self, x: i64, y: i64, rgba: [f32; 4]) {
        let idx = self.index_of(x, y);
        self.pix[idx..idx + RGBA_CHANNELS].copy_from_slice(&rgba);
    }
}

/// Flat sample buffer exchanged with the codec boundary.
///
/// Row-major with `channels` interleaved samples per pixel. The buffer owns
/// its samples and releases them on drop, so a buffer acquired for a decode
/// or encode call never outlives that call.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPixelBuffer {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<f32>,
}

impl RawPixelBuffer {
    /// Allocates a zeroed buffer.
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
            data: vec![0.0; width * height * channels],
        }
    }

    /// Wraps an existing sample vector, validating its length.
    pub fn from_samples(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<f32>,
    ) -> Result<Self> {
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(ImageIoError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Samples per row.
    pub fn stride(&self) -> usize {
        self.width * self.channels
    }

    pub fn samples(&self) -> &[f32] {
        &self.data
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.data
    }

    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride();
        &self.data[start..start + self.stride()]
    }

    /// All channel samples of the pixel at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> &[f32] {
        let idx = (y * self.width + x) * self.channels;
        &self.data[idx..idx + self.channels]
    }

    pub fn pixel_mut(&mut self, x: usize, y: usize) -> &mut [f32] {
        let idx = (y * self.width + x) * self.channels;
        &mut self.data[idx..idx + self.channels]
    }

    pub fn sample(&self, x: usize, y: usize, channel: usize) -> f32 {
        self.data[(y * self.width + x) * self.channels + channel]
    }
}

/// Per-pixel access at 16-bit precision, for writing image types the
/// pipeline does not otherwise know.
///
/// Channel values are normalized to the full `u16` range: 0 is black or
/// fully transparent, 65535 is full intensity or fully opaque.
pub trait Rgba16Image {
    fn bounds(&self) -> Bounds;

    /// R, G, B, A at `(x, y)`, each in `0..=65535`.
    fn rgba16_at(&self, x: i64, y: i64) -> [u16; 4];
}

/// Source image for a write call.
///
/// `Float` keeps full precision and range-aware encoding. `Generic` routes
/// arbitrary images through the 16-bit accessor, which loses sub-16-bit
/// precision and skips the HDR/LDR encoding transform.
#[derive(Clone, Copy)]
pub enum WriteSource<'a> {
    Float(&'a FloatRgbaImage),
    Generic(&'a dyn Rgba16Image),
}

impl WriteSource<'_> {
    pub fn bounds(&self) -> Bounds {
        match self {
            WriteSource::Float(image) => image.bounds,
            WriteSource::Generic(image) => image.bounds(),
        }
    }
}

impl<'a> From<&'a FloatRgbaImage> for WriteSource<'a> {
    fn from(image: &'a FloatRgbaImage) -> Self {
        WriteSource::Float(image)
    }
}
