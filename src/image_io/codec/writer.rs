use std::path::Path;

use crate::image_io::common::error::Result;
use crate::image_io::pixels::types::RawPixelBuffer;
use crate::image_io::range::DynamicRange;

pub trait ImageFileWriter {
    fn write_image(&self, path: &Path, buffer: &RawPixelBuffer, range: DynamicRange)
    -> Result<()>;
}
