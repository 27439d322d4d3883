//! Error types for the oxo crate

use thiserror::Error;

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("square ({x}, {y}) is already occupied")]
    SquareOccupied { x: usize, y: usize },

    #[error("coordinate ({x}, {y}) is out of bounds (components must be 0-2)")]
    InvalidCoordinate { x: usize, y: usize },

    #[error("square index {index} is out of bounds (must be 0-8)")]
    InvalidIndex { index: usize },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
