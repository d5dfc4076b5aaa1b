//! Validation outcomes and user-facing diagnostics

use serde::{Deserialize, Serialize};

/// Message printed when every line of the source unit is accepted
pub const SUCCESS_MESSAGE: &str = "Compilation Was Successful. No Errors";

/// How a single line fared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineOutcome {
    Accepted,
    /// No token pattern matched at `offset`
    LexFailure { offset: usize },
    /// Tokenized cleanly but has no derivation from the start symbol
    SyntaxFailure,
}

/// A line number paired with its outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineResult {
    /// 1-based line number within the source unit
    pub line_number: u32,
    pub outcome: LineOutcome,
}

impl LineResult {
    /// The exact diagnostic printed for this line
    pub fn diagnostic(&self) -> Option<String> {
        match self.outcome {
            LineOutcome::Accepted => None,
            LineOutcome::LexFailure { .. } => {
                Some(format!("Unrecognized token at Line: {}", self.line_number))
            }
            LineOutcome::SyntaxFailure => {
                Some(format!("Syntax error at Line: {}", self.line_number))
            }
        }
    }
}

/// Result of validating a source unit.
///
/// Validation is fail-fast: at most one failing line is recorded, and it is
/// always the earliest one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Non-blank lines examined, including the failing line if any
    pub lines_validated: usize,
    pub failure: Option<LineResult>,
}

impl ValidationReport {
    pub fn success(lines_validated: usize) -> Self {
        Self {
            lines_validated,
            failure: None,
        }
    }

    pub fn failure(lines_validated: usize, result: LineResult) -> Self {
        Self {
            lines_validated,
            failure: Some(result),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// The single message printed for this run
    pub fn message(&self) -> String {
        match &self.failure {
            None => SUCCESS_MESSAGE.to_string(),
            Some(result) => result
                .diagnostic()
                .unwrap_or_else(|| SUCCESS_MESSAGE.to_string()),
        }
    }
}
