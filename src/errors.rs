use thiserror::Error;

/// Errors that can occur when reading a file for scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The file's bytes are not valid UTF-8 text.
    #[error("Decode error: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// A specialized `Result` type for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;
