//! Filter error types.

use thiserror::Error;

/// Errors that can occur while applying or configuring filters.
///
/// Buffer and range errors are always reported before any byte of the
/// caller's buffer is written.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Buffer length is not a whole number of pixels for the layout.
    #[error("corrupted buffer: {len} bytes is not a multiple of {stride} bytes per pixel")]
    CorruptedBuffer { len: usize, stride: usize },

    /// Pixel range is empty, reversed, or past the end of the buffer.
    #[error("incorrect bounds passed: [{from}, {to}) for a buffer of {pixels} pixels")]
    InvalidRange { from: usize, to: usize, pixels: usize },

    /// Region handed to a spatial filter does not split into whole rows.
    #[error("region of {pixels} pixels does not split into rows of {width} pixels")]
    RowMismatch { pixels: usize, width: usize },

    /// Preset step names a filter the catalog doesn't know.
    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    /// Malformed preset configuration.
    #[error("invalid preset configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = FilterError> = std::result::Result<T, E>;
