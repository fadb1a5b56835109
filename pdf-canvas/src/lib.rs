//! Single-page PDF canvas.
//!
//! Absolute-positioned drawing against the PDF default coordinate
//! space: Helvetica text, filled and stroked paths, and PNG or JPEG
//! images. The result is a self-contained PDF 1.7 file with a classic
//! cross-reference table.

pub mod canvas;
pub mod error;
pub mod fonts;
pub mod graphics;
pub mod images;
pub mod objects;
pub mod writer;

pub use canvas::Canvas;
pub use error::{CanvasError, ImageError};
pub use fonts::{winansi_code, BuiltinFont, FontMetrics, TextStyle};
pub use graphics::{Color, PageSize, Rect};
pub use images::ImageId;
