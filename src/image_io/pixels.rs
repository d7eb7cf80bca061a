//! Pixel buffer types and the marshalling between them
//!
//! This module owns the in-memory float image, the flat buffer exchanged
//! with the codec boundary, and the conversions in both directions.

mod encode;
mod normalize;
pub mod types;

pub use encode::rasterize;
pub use normalize::normalize;
pub use types::{Bounds, FloatRgbaImage, RawPixelBuffer, Rgba16Image, WriteSource};
