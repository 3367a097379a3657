use std::io;
use thiserror::Error;

/// Error type shared by every stage of a fix run
#[derive(Error, Debug)]
pub enum FixError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("Invalid UTF-8 in file: {path}")]
    InvalidUtf8 { path: String },

    #[error("Failed to write '{path}': {source}")]
    Write { path: String, source: io::Error },

    #[error("Refusing to overwrite the source document: {path}")]
    SameInputOutput { path: String },

    #[error("Replacement pattern must not be empty")]
    EmptyPattern,

    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}
