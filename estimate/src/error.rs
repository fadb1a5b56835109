use std::path::PathBuf;

use pdf_canvas::CanvasError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// The output file could not be created or written.
    #[error("cannot write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: CanvasError,
    },

    /// A logo file exists but is not a PNG or JPEG we can embed.
    #[error("logo {} is not a usable image: {source}", .path.display())]
    Logo {
        path: PathBuf,
        #[source]
        source: CanvasError,
    },

    #[error(transparent)]
    Canvas(#[from] CanvasError),
}
