//! Built-in language profiles
//!
//! A profile bundles a grammar with the token patterns that feed it. The
//! minimal profile covers declarations and assignments; the extended profile
//! adds conditionals and loops over the same statement shapes.

use super::{Grammar, GrammarError};
use crate::tokens::{PatternSet, EXTENDED_LEXICON, MINIMAL_LEXICON};

/// A grammar paired with the pattern set that produces its terminals
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub name: String,
    pub grammar: Grammar,
    pub patterns: PatternSet,
}

impl LanguageProfile {
    pub fn new(name: &str, grammar: Grammar, patterns: PatternSet) -> Self {
        Self {
            name: name.to_string(),
            grammar,
            patterns,
        }
    }
}

/// The minimal statement language: declarations and assignments.
///
/// TERM is defined through OPERATION, which recurses back into TERM, so
/// expressions like `y + 3 * z` derive without an explicit precedence layer.
pub fn minimal() -> LanguageProfile {
    let grammar = Grammar::from_rules(
        "S",
        &[
            ("S", &[&["DECLARATION"], &["ASSIGNMENT"]]),
            ("DECLARATION", &[&["declare", "identifier"]]),
            ("ASSIGNMENT", &[&["identifier", "equals", "TERM"]]),
            ("TERM", &[&["number"], &["identifier"], &["OPERATION"]]),
            ("OPERATION", &[&["TERM", "operator", "TERM"]]),
        ],
    )
    .unwrap_or_else(|e| panic!("built-in minimal grammar is invalid: {}", e));

    LanguageProfile::new("minimal", grammar, MINIMAL_LEXICON.clone())
}

/// The extended statement language with conditionals and loops
pub fn extended() -> LanguageProfile {
    let grammar = Grammar::from_rules(
        "S",
        &[
            (
                "S",
                &[&["DECLARATION"], &["ASSIGNMENT"], &["CONDITIONAL"]],
            ),
            ("DECLARATION", &[&["declare", "identifier"]]),
            ("ASSIGNMENT", &[&["identifier", "equals", "TERM"]]),
            (
                "CONDITIONAL",
                &[
                    &["if", "lparen", "CONDITION", "rparen", "BLOCK"],
                    &["while", "lparen", "CONDITION", "rparen", "BLOCK"],
                ],
            ),
            ("CONDITION", &[&["identifier", "comparison_op", "TERM"]]),
            ("BLOCK", &[&["lbrace", "ASSIGNMENT", "rbrace"]]),
            ("TERM", &[&["number"], &["identifier"], &["OPERATION"]]),
            ("OPERATION", &[&["TERM", "operator", "TERM"]]),
        ],
    )
    .unwrap_or_else(|e| panic!("built-in extended grammar is invalid: {}", e));

    LanguageProfile::new("extended", grammar, EXTENDED_LEXICON.clone())
}

/// Look up a built-in profile by name
pub fn by_name(name: &str) -> Result<LanguageProfile, GrammarError> {
    match name {
        "minimal" => Ok(minimal()),
        "extended" => Ok(extended()),
        other => Err(GrammarError::UnknownProfile {
            name: other.to_string(),
        }),
    }
}
