use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageIoError {
    #[error("failed to decode image: {0}")]
    DecodeError(String),

    #[error("failed to encode image: {0}")]
    EncodeError(String),

    #[error("unsupported number of channels: {0}")]
    UnsupportedChannelCount(usize),

    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("pixel buffer has {actual} samples, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImageIoError>;
