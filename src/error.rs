//! Error types for unlayout library.

use std::io;
use thiserror::Error;

use crate::analysis::OperationStatus;

/// Result type alias for unlayout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rebuilding a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The analysis payload could not be decoded.
    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is neither an analysis result nor an operation envelope.
    #[error("Unknown payload format: not a layout analysis result")]
    UnknownFormat,

    /// The analysis operation has not finished successfully.
    #[error("Analysis operation is {0}, expected succeeded")]
    OperationNotSucceeded(OperationStatus),

    /// A succeeded operation envelope carried no result.
    #[error("Operation envelope has no analyzeResult")]
    MissingAnalyzeResult,

    /// A section names an element that does not exist.
    #[error("Missing reference: {0}")]
    MissingReference(String),

    /// An element reference uses an unknown collection prefix.
    #[error("Unrecognized reference kind: {0}")]
    UnrecognizedReferenceKind(String),

    /// A table's cells are inconsistent with its header or dimensions.
    #[error("Malformed table {table}: {reason}")]
    MalformedTable {
        /// Path identifier of the table
        table: String,
        /// What is wrong with it
        reason: String,
    },

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Shorthand for a [`Error::MalformedTable`].
    pub fn malformed_table(table: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedTable {
            table: table.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error points at broken references in the input.
    pub fn is_integrity_error(&self) -> bool {
        matches!(
            self,
            Error::MissingReference(_)
                | Error::UnrecognizedReferenceKind(_)
                | Error::MalformedTable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingReference("/paragraphs/7".to_string());
        assert_eq!(err.to_string(), "Missing reference: /paragraphs/7");

        let err = Error::malformed_table("/tables/0", "column 3 has no header");
        assert_eq!(
            err.to_string(),
            "Malformed table /tables/0: column 3 has no header"
        );

        let err = Error::OperationNotSucceeded(OperationStatus::Running);
        assert_eq!(
            err.to_string(),
            "Analysis operation is running, expected succeeded"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_integrity_errors() {
        assert!(Error::UnrecognizedReferenceKind("/figures/0".into()).is_integrity_error());
        assert!(!Error::UnknownFormat.is_integrity_error());
    }
}
