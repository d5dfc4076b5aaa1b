//! Source file intake
//!
//! Reads a source unit off disk, enforces the compile-time size limits, and
//! splits it into lines for the validator.

pub mod processor;

pub use processor::{process_file, FileMetadata, SourceUnit};

use crate::logging::codes::{file_processing, Code};
use thiserror::Error;

/// Errors raised while reading a source unit
#[derive(Debug, Error)]
pub enum FileProcessorError {
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("file size {size} exceeds limit {limit}")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("file is not valid UTF-8: {path}")]
    InvalidEncoding { path: String },

    #[error("line count {count} exceeds limit {limit}")]
    TooManyLines { count: usize, limit: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl FileProcessorError {
    pub fn error_code(&self) -> Code {
        match self {
            FileProcessorError::FileNotFound { .. } => file_processing::FILE_NOT_FOUND,
            FileProcessorError::PermissionDenied { .. } => file_processing::PERMISSION_DENIED,
            FileProcessorError::FileTooLarge { .. } => file_processing::FILE_TOO_LARGE,
            FileProcessorError::InvalidEncoding { .. } => file_processing::INVALID_ENCODING,
            FileProcessorError::TooManyLines { .. } => file_processing::TOO_MANY_LINES,
            FileProcessorError::Io(_) => file_processing::IO_ERROR,
        }
    }

    /// File-level failures always stop the run
    pub fn should_halt(&self) -> bool {
        crate::logging::codes::requires_halt(self.error_code().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = FileProcessorError::FileNotFound {
            path: "code.txt".to_string(),
        };
        assert_eq!(err.error_code().as_str(), "E005");
        assert!(err.should_halt());

        let err = FileProcessorError::FileTooLarge {
            size: 20_000_000,
            limit: 10_485_760,
        };
        assert_eq!(err.error_code().as_str(), "E007");
    }
}
