//! Recognition error types

use crate::logging::codes::{syntax, Code};
use thiserror::Error;

/// Errors raised by the recognizer itself.
///
/// An input that simply has no derivation is not an error; that is the
/// `Rejected` outcome. These errors mean recognition could not run to
/// completion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("recognition chart grew to {items} items, limit is {limit}")]
    ChartOverflow { items: usize, limit: usize },
}

impl SyntaxError {
    pub fn error_code(&self) -> Code {
        match self {
            SyntaxError::ChartOverflow { .. } => syntax::CHART_OVERFLOW,
        }
    }
}
