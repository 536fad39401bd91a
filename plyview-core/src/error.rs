//! Error types for plyview

use thiserror::Error;

/// Main error type for plyview operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Non-finite bounds: center {center:?}, extents {extents:?}")]
    NonFiniteBounds {
        center: [f32; 3],
        extents: [f32; 3],
    },

    #[error("Negative extents: {0:?}")]
    NegativeExtents([f32; 3]),

    #[error("Vertical field of view must lie in (0, pi) radians, got {0}")]
    FovOutOfRange(f32),

    #[error("Visualization error: {0}")]
    Visualization(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for plyview operations
pub type Result<T> = std::result::Result<T, Error>;
