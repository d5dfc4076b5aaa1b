// Internal modules. Logging comes first so its macros are in scope for the
// rest of the crate.
#[macro_use]
pub mod logging;

pub mod config;
pub mod file_processor;
pub mod grammar;
pub mod lexical;
pub mod pipeline;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use grammar::{Grammar, LanguageProfile, Symbol};
pub use lexical::{Lexer, LexerError};
pub use pipeline::{LineValidator, PipelineError, ValidationReport, SUCCESS_MESSAGE};
pub use syntax::{ParseOutcome, Recognizer, SyntaxError};
pub use tokens::{PatternSet, Token, TokenPattern};
