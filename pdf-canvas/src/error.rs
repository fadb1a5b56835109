use std::io;

use thiserror::Error;

/// Reasons an image cannot be embedded.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("image data too short to detect format ({0} bytes)")]
    TooShort(usize),

    #[error("unsupported image format (expected JPEG or PNG)")]
    UnknownFormat,

    #[error("malformed JPEG: {0}")]
    Jpeg(&'static str),

    #[error("unsupported JPEG component count: {0} (expected 1 or 3)")]
    JpegComponents(u8),

    #[error("PNG decode error: {0}")]
    Png(#[from] png::DecodingError),

    #[error("unsupported PNG color type: {0:?}")]
    UnsupportedColor(png::ColorType),
}

/// Errors raised while building or writing a canvas.
#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("image error: {0}")]
    Image(#[from] ImageError),

    /// An `ImageId` handed to a canvas that never loaded it.
    #[error("image {0} was not loaded on this canvas")]
    UnknownImage(String),
}

pub type Result<T> = std::result::Result<T, CanvasError>;
