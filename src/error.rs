use std::path::PathBuf;
use thiserror::Error;

use crate::bbox::BoundingBox;

#[derive(Error, Debug)]
pub enum CropError {
    #[error("Input folder '{}' does not exist", .0.display())]
    InputDirMissing(PathBuf),

    #[error("Failed to create output folder '{}': {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Processing failed: {0}")]
    Processing(String),

    #[error("Bounding box {bbox} lies outside a {width}x{height} image")]
    OutOfBounds {
        bbox: BoundingBox,
        width: u32,
        height: u32,
    },

    #[error("Failed to save {}: {reason}", path.display())]
    Save { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CropError {
    /// Whether the error aborts the whole run rather than a single image
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InputDirMissing(_) | Self::OutputDir { .. })
    }
}
