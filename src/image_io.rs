//! Image file I/O for linear-float pixel data
//!
//! This module reads image files into a four-channel float representation
//! and writes that representation back out, with separate modules for the
//! codec boundary, pixel marshalling, and orchestration.

pub mod codec;
pub mod common;
pub mod pipeline;
pub mod pixels;
pub mod range;


pub use common::{
    ImageIoError,
    IoConfig,
    IoConfigBuilder,
    Result,
};

pub use range::DynamicRange;

pub use pixels::{
    Bounds,
    FloatRgbaImage,
    RawPixelBuffer,
    Rgba16Image,
    WriteSource,
    normalize,
    rasterize,
};

pub use codec::{
    ImageFileReader,
    ImageFileWriter,
    ImageRsReader,
    ImageRsWriter,
};

pub use pipeline::ImageIo;
