//! Error types for icon generation

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for icon generation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or packaging icons
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem operation failed
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Built without the `svg` feature
    #[cfg_attr(feature = "svg", allow(dead_code))]
    #[error("SVG renderer not available (built without the `svg` feature)")]
    VectorUnavailable,

    /// The generated SVG document could not be parsed
    #[cfg_attr(not(feature = "svg"), allow(dead_code))]
    #[error("SVG parsing failed: {0}")]
    Svg(String),

    /// Pixmap allocation or drawing failed
    #[error("Rendering failed: {0}")]
    Render(String),

    /// PNG encoding failed or produced no data
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// A produced PNG could not be read back
    #[error("Image decoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// The native icon compiler is missing or returned an error
    #[error("Icon compiler failed: {0}")]
    IconCompiler(String),

    /// The .ico container could not be assembled
    #[error("ICO encoding failed: {0}")]
    Ico(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
