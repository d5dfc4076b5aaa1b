//! Syntax recognition
//!
//! Decides, per line, whether the lexer's token label sequence derives from
//! the active grammar's start symbol.

pub mod error;
pub mod recognizer;

pub use error::SyntaxError;
pub use recognizer::{ParseOutcome, Recognizer};

use crate::grammar::Grammar;

/// Recognize a label sequence against a grammar in one call.
///
/// Convenience for one-off checks; batch validation builds a `Recognizer`
/// once and reuses it across lines.
pub fn recognize<S: AsRef<str>>(
    grammar: &Grammar,
    labels: &[S],
) -> Result<ParseOutcome, SyntaxError> {
    Recognizer::new(grammar).recognize(labels)
}
