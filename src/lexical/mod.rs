//! Lexical analysis
//!
//! Scans one line at a time against a prioritized pattern set and produces
//! classified tokens, failing at the first position no pattern matches.

pub mod analyzer;

pub use analyzer::{Lexer, LexicalMetrics};

use crate::logging::codes::{lexical, Code};
use thiserror::Error;

/// Errors produced during tokenization of a single line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexerError {
    #[error("unrecognized token at offset {offset}")]
    UnrecognizedToken { offset: usize },

    #[error("line length {length} exceeds limit {limit}")]
    LineTooLong { length: usize, limit: usize },

    #[error("token count {count} exceeds limit {limit}")]
    TooManyTokens { count: usize, limit: usize },
}

impl LexerError {
    pub fn error_code(&self) -> Code {
        match self {
            LexerError::UnrecognizedToken { .. } => lexical::UNRECOGNIZED_TOKEN,
            LexerError::LineTooLong { .. } => lexical::LINE_TOO_LONG,
            LexerError::TooManyTokens { .. } => lexical::TOO_MANY_TOKENS,
        }
    }
}

/// Tokenize a single line with the given pattern set using default preferences
pub fn tokenize_line(
    patterns: &crate::tokens::PatternSet,
    line: &str,
) -> Result<Vec<crate::tokens::Token>, LexerError> {
    let mut lexer = Lexer::new(patterns.clone());
    lexer.tokenize(line)
}
