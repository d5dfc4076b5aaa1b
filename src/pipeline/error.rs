//! Pipeline error types

use crate::file_processor::FileProcessorError;
use crate::grammar::GrammarError;
use crate::logging::codes::Code;
use crate::syntax::SyntaxError;
use thiserror::Error;

/// Errors that stop a validation run before a verdict is reached.
///
/// Per-line lexical and syntax failures are verdicts, not errors; they land
/// in the `ValidationReport`. These variants cover the stages around the
/// per-line loop.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("file processing failed: {0}")]
    FileProcessor(#[from] FileProcessorError),

    #[error("grammar profile error: {0}")]
    Grammar(#[from] GrammarError),

    #[error("recognition aborted: {0}")]
    Syntax(#[from] SyntaxError),
}

impl PipelineError {
    pub fn error_code(&self) -> Code {
        match self {
            PipelineError::FileProcessor(e) => e.error_code(),
            PipelineError::Grammar(e) => e.error_code(),
            PipelineError::Syntax(e) => e.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_passthrough() {
        let err = PipelineError::from(FileProcessorError::FileNotFound {
            path: "code.txt".to_string(),
        });
        assert_eq!(err.error_code().as_str(), "E005");

        let err = PipelineError::from(SyntaxError::ChartOverflow {
            items: 2,
            limit: 1,
        });
        assert_eq!(err.error_code().as_str(), "E041");
    }
}
