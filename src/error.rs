use mosaic_core::{MosaicError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Mosaic error: {0}")]
    Mosaic(#[from] MosaicError),

    #[error("Render task failed: {0}")]
    Task(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    #[error("Invalid palette '{name}': {source}")]
    Palette {
        name: String,
        #[source]
        source: PaletteError,
    },
}
