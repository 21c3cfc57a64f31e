//! Error types for exconv library.

use std::io;
use thiserror::Error;

/// Result type alias for exconv operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while transforming content.
///
/// Parsing heuristics never produce errors; they degrade to default or mock
/// data instead. Only content-type dispatch and JSON decoding can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// A transformation received a content type it has no parser for.
    #[error("Unsupported content type for {operation}: {content_type}")]
    UnsupportedContentType {
        /// Transformation that rejected the input (e.g. "data visualization")
        operation: &'static str,
        /// The declared content type tag
        content_type: String,
    },

    /// The content was declared as JSON but failed to decode.
    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A content type tag that does not name any known format.
    #[error("Unknown content type: {0}")]
    UnknownContentType(String),

    /// A transformation name that is not registered.
    #[error("Unknown transformation: {0}")]
    UnknownTransformation(String),

    /// Error while serializing a descriptor.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Returns true for the two failure kinds raised by the transformation core.
    pub fn is_transformation_error(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedContentType { .. } | Error::MalformedJson(_)
        )
    }
}
