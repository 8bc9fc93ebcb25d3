//! Error types for ungdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for ungdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or converting documents.
///
/// Rendering itself never fails on malformed cross references; errors only
/// surface at the boundaries (decoding, I/O, store lookups, output encoding).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid document JSON.
    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON is well-formed but does not describe a document.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// The requested document does not exist in the store.
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// The document store failed for another reason.
    #[error("Document store error: {0}")]
    Store(String),

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
