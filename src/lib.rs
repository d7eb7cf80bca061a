//! Linear-float image file I/O.
//!
//! Reads image files into a linear-float RGBA representation and writes that
//! representation back out, gamma-encoding for low-dynamic-range destinations
//! and passing linear values through untouched for HDR ones.

pub mod image_io;
pub mod logger;
