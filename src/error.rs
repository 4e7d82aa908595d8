//! Error types for arxtract operations.

use thiserror::Error;

/// Errors that can occur during document extraction or free-text parsing.
///
/// Missing optional structure (no abstract, no bibliography, a section id
/// that resolves to nothing) is not an error: those paths degrade to empty
/// values. The variants here are hard failures.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unrecognized node in markup tree: {0}")]
    UnrecognizedNode(String),

    #[error("malformed {what} in free text: {input:?}")]
    MalformedLiteral { what: &'static str, input: String },
}

pub type Result<T> = std::result::Result<T, Error>;
