use std::path::Path;

use crate::image_io::common::error::Result;
use crate::image_io::pixels::types::RawPixelBuffer;

pub trait ImageFileReader {
    fn read_image(&self, path: &Path) -> Result<RawPixelBuffer>;
}
