use std::path::Path;

use tracing::{info, instrument};

use crate::image_io::{
    codec::{ImageFileReader, ImageFileWriter, ImageRsReader, ImageRsWriter},
    common::config::IoConfig,
    common::error::{ImageIoError, Result},
    pixels::{FloatRgbaImage, WriteSource, normalize, rasterize},
    range::DynamicRange,
};

/// Facade over the decode/normalize and rasterize/encode paths.
///
/// Holds no state across calls beyond its configuration, so one instance can
/// serve concurrent reads and writes.
pub struct ImageIo<R: ImageFileReader, W: ImageFileWriter> {
    reader: R,
    writer: W,
    config: IoConfig,
}

impl ImageIo<ImageRsReader, ImageRsWriter> {
    pub fn new(config: IoConfig) -> Self {
        Self {
            reader: ImageRsReader,
            writer: ImageRsWriter,
            config,
        }
    }
}

impl<R: ImageFileReader, W: ImageFileWriter> ImageIo<R, W> {
    pub fn with_custom(reader: R, writer: W, config: IoConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ImageIoError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                return Err(ImageIoError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Reads an image file into the linear-float RGBA representation.
    ///
    /// The decoded boundary buffer lives only for the duration of this call;
    /// it is dropped before returning on success and failure alike.
    #[instrument(skip(self, path))]
    pub fn read_image<P: AsRef<Path>>(&self, path: P) -> Result<FloatRgbaImage> {
        let path = path.as_ref();
        info!(input = %path.display(), "Reading image");

        let raw = {
            let _span = tracing::info_span!("decode_image").entered();
            self.reader.read_image(path)?
        };

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = raw.width(),
                height = raw.height()
            )
            .entered();
            self.validate_dimensions(raw.width(), raw.height())?;
        }

        let image = {
            let _span = tracing::info_span!("normalize_pixels").entered();
            normalize(&raw)?
        };

        info!(
            width = image.width(),
            height = image.height(),
            "Read complete"
        );
        Ok(image)
    }

    /// Writes an image to a file, encoding for the range the destination
    /// extension implies.
    ///
    /// The marshalled boundary buffer lives only for the duration of this
    /// call; it is dropped before returning on success and failure alike.
    #[instrument(skip(self, path, image))]
    pub fn write_image<'a, P, S>(&self, path: P, image: S) -> Result<()>
    where
        P: AsRef<Path>,
        S: Into<WriteSource<'a>>,
    {
        let path = path.as_ref();
        let source = image.into();
        let bounds = source.bounds();

        let range = DynamicRange::from_path(path);
        info!(output = %path.display(), hdr = range.is_hdr(), "Writing image");

        self.validate_dimensions(bounds.width, bounds.height)?;

        let raw = {
            let _span = tracing::info_span!("rasterize_pixels").entered();
            rasterize(source, range, self.config.gamma)
        };

        {
            let _span = tracing::info_span!("encode_image").entered();
            self.writer.write_image(path, &raw, range)?;
        }

        info!(
            width = bounds.width,
            height = bounds.height,
            "Write complete"
        );
        Ok(())
    }

    /// Reads `input_path` and writes it back out to `output_path`.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let image = self.read_image(input_path)?;
        self.write_image(output_path, &image)
    }

    pub fn config(&self) -> &IoConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: IoConfig) {
        self.config = config;
    }
}
