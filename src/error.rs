//! Error types for xon
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using xon Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for xon operations
#[derive(Error, Debug)]
pub enum Error {
    /// XML parsing error from the underlying XML reader
    #[error("XML error: {0}")]
    Xml(String),

    /// Structural usage error in an encoder input document
    #[error("document error: {0}")]
    Document(String),

    /// Type error for a value that cannot be rendered as XML text
    #[error("type error for key '{key}': {message}")]
    Type {
        /// The composite key holding the offending value
        key: String,
        /// What went wrong
        message: String,
    },

    /// I/O error from a stream wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a type error for the given composite key
    pub fn type_error(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Type {
            key: key.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_error_display() {
        let err = Error::type_error("@id", "value 10 is not a string");
        let msg = format!("{}", err);
        assert!(msg.contains("'@id'"));
        assert!(msg.contains("not a string"));
    }

    #[test]
    fn test_document_error_display() {
        let err = Error::Document("document has 2 keys, expected exactly one".to_string());
        assert!(format!("{}", err).starts_with("document error:"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
