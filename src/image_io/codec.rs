//! Codec boundary module
//!
//! This module defines the reader/writer seams to the external codec
//! library and the `image`-crate-backed implementations of both.

mod image_rs_reader;
mod image_rs_writer;
mod reader;
mod writer;

pub use image_rs_reader::ImageRsReader;
pub use image_rs_writer::ImageRsWriter;
pub use reader::ImageFileReader;
pub use writer::ImageFileWriter;
