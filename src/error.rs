//! WebM-specific error types.
//!
//! Structurally absent sections (missing Segment/Info/TimecodeScale) are not
//! errors; they are reported through [`crate::fixer::FixStatus`]. The variants
//! here cover the cases where the byte stream itself cannot be framed, plus
//! I/O failures while reading a source buffer.

use thiserror::Error;

/// WebM-specific error types.
#[derive(Error, Debug)]
pub enum WebmError {
    /// Invalid variable-length integer (leading byte has no marker bit).
    #[error("Invalid VINT encoding at offset {offset}")]
    InvalidVint {
        /// Byte offset of the offending leading byte.
        offset: usize,
    },

    /// Element ID wider than the 4 bytes the format allows.
    #[error("Invalid element ID at offset {offset}")]
    InvalidElementId {
        /// Byte offset where the invalid ID was found.
        offset: usize,
    },

    /// Buffer ended inside an element's ID or size field.
    #[error("Truncated element header at offset {offset}")]
    TruncatedHeader {
        /// Byte offset where the header started.
        offset: usize,
    },

    /// Container nesting deeper than the parser allows.
    #[error("Recursion limit exceeded at depth {depth}")]
    RecursionLimit {
        /// Nesting depth at which parsing stopped.
        depth: u32,
    },

    /// I/O error while reading the source buffer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for WebM operations.
pub type Result<T> = std::result::Result<T, WebmError>;
