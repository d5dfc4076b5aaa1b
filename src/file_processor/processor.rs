//! File reading and line splitting

use super::FileProcessorError;
use crate::config::compile_time::file_processing::{MAX_FILE_SIZE, MAX_LINE_COUNT};
use crate::logging::codes;
use crate::{log_error, log_success};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Metadata captured while reading a source unit
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub path: PathBuf,
    pub size: u64,
    pub line_count: usize,
}

/// A source unit split into lines, ready for validation
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub metadata: FileMetadata,
    pub lines: Vec<String>,
}

/// Read a source file and split it into lines.
///
/// Size is checked against the compile-time limit before the file is read so
/// an oversized file is rejected without buffering it.
pub fn process_file<P: AsRef<Path>>(path: P) -> Result<SourceUnit, FileProcessorError> {
    let path = path.as_ref();

    let metadata = std::fs::metadata(path).map_err(|e| map_io_error(e, path))?;
    let size = metadata.len();

    if size > MAX_FILE_SIZE {
        log_error!(
            codes::file_processing::FILE_TOO_LARGE,
            "Source file exceeds size limit",
            "size" => size,
            "limit" => MAX_FILE_SIZE
        );
        return Err(FileProcessorError::FileTooLarge {
            size,
            limit: MAX_FILE_SIZE,
        });
    }

    let bytes = std::fs::read(path).map_err(|e| map_io_error(e, path))?;
    let contents =
        String::from_utf8(bytes).map_err(|_| FileProcessorError::InvalidEncoding {
            path: path.display().to_string(),
        })?;

    let lines: Vec<String> = contents.lines().map(|line| line.to_string()).collect();

    if lines.len() > MAX_LINE_COUNT {
        return Err(FileProcessorError::TooManyLines {
            count: lines.len(),
            limit: MAX_LINE_COUNT,
        });
    }

    log_success!(
        codes::success::FILE_PROCESSING_SUCCESS,
        "Source file read",
        "size_bytes" => size,
        "lines" => lines.len()
    );

    Ok(SourceUnit {
        metadata: FileMetadata {
            path: path.to_path_buf(),
            size,
            line_count: lines.len(),
        },
        lines,
    })
}

fn map_io_error(error: std::io::Error, path: &Path) -> FileProcessorError {
    match error.kind() {
        ErrorKind::NotFound => FileProcessorError::FileNotFound {
            path: path.display().to_string(),
        },
        ErrorKind::PermissionDenied => FileProcessorError::PermissionDenied {
            path: path.display().to_string(),
        },
        _ => FileProcessorError::Io(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_process_simple_file() {
        let file = write_temp("declare x\nx = 5\n");
        let unit = process_file(file.path()).unwrap();

        assert_eq!(unit.lines, vec!["declare x", "x = 5"]);
        assert_eq!(unit.metadata.line_count, 2);
        assert_eq!(unit.metadata.size, 16);
    }

    #[test]
    fn test_no_trailing_newline() {
        let file = write_temp("declare x");
        let unit = process_file(file.path()).unwrap();
        assert_eq!(unit.lines, vec!["declare x"]);
    }

    #[test]
    fn test_empty_file() {
        let file = write_temp("");
        let unit = process_file(file.path()).unwrap();
        assert!(unit.lines.is_empty());
    }

    #[test]
    fn test_blank_lines_preserved() {
        // The validator decides what to do with blank lines, not the reader
        let file = write_temp("declare x\n\nx = 5\n");
        let unit = process_file(file.path()).unwrap();
        assert_eq!(unit.lines.len(), 3);
        assert_eq!(unit.lines[1], "");
    }

    #[test]
    fn test_missing_file() {
        let err = process_file("/nonexistent/code.txt").unwrap_err();
        assert_matches!(err, FileProcessorError::FileNotFound { .. });
    }

    #[test]
    fn test_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        let err = process_file(file.path()).unwrap_err();
        assert_matches!(err, FileProcessorError::InvalidEncoding { .. });
    }
}
