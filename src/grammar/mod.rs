//! Grammar as data
//!
//! A `Grammar` is a plain mapping from nonterminal names to alternatives,
//! with one distinguished start symbol. Grammars carry no behavior beyond
//! lookup; recognition lives in the syntax module so grammars can be swapped
//! without touching the engine.

pub mod loader;
pub mod profiles;

pub use loader::load_profile;
pub use profiles::LanguageProfile;

use crate::logging::codes::{grammar, Code};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A grammar symbol, either a terminal (token label) or a nonterminal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Terminal(String),
    Nonterminal(String),
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::Terminal(name) | Symbol::Nonterminal(name) => name,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Terminal(name) => write!(f, "'{}'", name),
            Symbol::Nonterminal(name) => write!(f, "{}", name),
        }
    }
}

/// Errors from grammar construction and profile loading
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("grammar defines no productions")]
    EmptyGrammar,

    #[error("start symbol '{symbol}' has no production")]
    MissingStartSymbol { symbol: String },

    #[error("unknown built-in profile '{name}'")]
    UnknownProfile { name: String },

    #[error("invalid pattern for token '{label}': {source}")]
    InvalidPattern {
        label: String,
        #[source]
        source: regex::Error,
    },

    #[error("profile parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("profile read error: {0}")]
    Io(#[from] std::io::Error),
}

impl GrammarError {
    pub fn error_code(&self) -> Code {
        match self {
            GrammarError::EmptyGrammar => grammar::EMPTY_GRAMMAR,
            GrammarError::MissingStartSymbol { .. } => grammar::MISSING_START_SYMBOL,
            GrammarError::UnknownProfile { .. } => grammar::PROFILE_PARSE_ERROR,
            GrammarError::InvalidPattern { .. } => grammar::INVALID_PATTERN,
            GrammarError::ParseError(_) => grammar::PROFILE_PARSE_ERROR,
            GrammarError::Io(_) => grammar::PROFILE_PARSE_ERROR,
        }
    }
}

/// A context-free grammar keyed by nonterminal name.
///
/// Symbol resolution follows one rule: a name that appears as a production
/// key is a nonterminal, every other name is a terminal. Terminals are
/// matched against token labels during recognition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    start_symbol: String,
    /// Nonterminals in declaration order
    order: Vec<String>,
    productions: HashMap<String, Vec<Vec<Symbol>>>,
}

impl Grammar {
    /// Build a grammar from (nonterminal, alternatives) rules.
    ///
    /// Each alternative is a sequence of symbol names resolved against the
    /// full key set, so forward references between nonterminals work
    /// regardless of rule order.
    pub fn from_rules(
        start_symbol: &str,
        rules: &[(&str, &[&[&str]])],
    ) -> Result<Self, GrammarError> {
        let owned: Vec<(String, Vec<Vec<String>>)> = rules
            .iter()
            .map(|(head, alternatives)| {
                (
                    head.to_string(),
                    alternatives
                        .iter()
                        .map(|alt| alt.iter().map(|s| s.to_string()).collect())
                        .collect(),
                )
            })
            .collect();

        Self::from_owned_rules(start_symbol.to_string(), owned)
    }

    /// Build a grammar from owned rules (used by the profile loader)
    pub fn from_owned_rules(
        start_symbol: String,
        rules: Vec<(String, Vec<Vec<String>>)>,
    ) -> Result<Self, GrammarError> {
        if rules.is_empty() {
            return Err(GrammarError::EmptyGrammar);
        }

        let keys: Vec<String> = rules.iter().map(|(head, _)| head.clone()).collect();

        if !keys.iter().any(|k| k == &start_symbol) {
            return Err(GrammarError::MissingStartSymbol {
                symbol: start_symbol,
            });
        }

        let resolve = |name: &str| -> Symbol {
            if keys.iter().any(|k| k == name) {
                Symbol::Nonterminal(name.to_string())
            } else {
                Symbol::Terminal(name.to_string())
            }
        };

        let mut order = Vec::new();
        let mut productions: HashMap<String, Vec<Vec<Symbol>>> = HashMap::new();

        for (head, alternatives) in rules {
            let resolved: Vec<Vec<Symbol>> = alternatives
                .iter()
                .map(|alt| alt.iter().map(|name| resolve(name)).collect())
                .collect();

            match productions.get_mut(&head) {
                Some(existing) => existing.extend(resolved),
                None => {
                    order.push(head.clone());
                    productions.insert(head, resolved);
                }
            }
        }

        Ok(Self {
            start_symbol,
            order,
            productions,
        })
    }

    pub fn start_symbol(&self) -> &str {
        &self.start_symbol
    }

    /// Nonterminals in declaration order
    pub fn nonterminals(&self) -> &[String] {
        &self.order
    }

    pub fn is_nonterminal(&self, name: &str) -> bool {
        self.productions.contains_key(name)
    }

    /// Alternatives for a nonterminal, in declaration order
    pub fn alternatives(&self, nonterminal: &str) -> Option<&[Vec<Symbol>]> {
        self.productions.get(nonterminal).map(|alts| alts.as_slice())
    }

    /// Total number of alternatives across all nonterminals
    pub fn production_count(&self) -> usize {
        self.productions.values().map(|alts| alts.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grammar() -> Grammar {
        Grammar::from_rules(
            "S",
            &[
                ("S", &[&["A"], &["B"]]),
                ("A", &[&["declare", "identifier"]]),
                ("B", &[&["identifier", "equals", "number"]]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_symbol_resolution() {
        let grammar = sample_grammar();

        let alts = grammar.alternatives("S").unwrap();
        assert_eq!(alts[0], vec![Symbol::Nonterminal("A".to_string())]);

        let alts = grammar.alternatives("A").unwrap();
        assert_eq!(
            alts[0],
            vec![
                Symbol::Terminal("declare".to_string()),
                Symbol::Terminal("identifier".to_string())
            ]
        );
    }

    #[test]
    fn test_forward_reference_resolution() {
        // B is declared after S references it; it must still resolve as a
        // nonterminal
        let grammar = sample_grammar();
        let alts = grammar.alternatives("S").unwrap();
        assert_eq!(alts[1], vec![Symbol::Nonterminal("B".to_string())]);
    }

    #[test]
    fn test_empty_grammar_rejected() {
        let result = Grammar::from_rules("S", &[]);
        assert!(matches!(result, Err(GrammarError::EmptyGrammar)));
    }

    #[test]
    fn test_missing_start_symbol_rejected() {
        let result = Grammar::from_rules("MISSING", &[("S", &[&["number"]])]);
        assert!(matches!(
            result,
            Err(GrammarError::MissingStartSymbol { .. })
        ));
    }

    #[test]
    fn test_duplicate_heads_merge() {
        let grammar = Grammar::from_rules(
            "S",
            &[("S", &[&["number"]]), ("S", &[&["identifier"]])],
        )
        .unwrap();

        assert_eq!(grammar.alternatives("S").unwrap().len(), 2);
        assert_eq!(grammar.nonterminals().len(), 1);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(GrammarError::EmptyGrammar.error_code().as_str(), "E031");
        assert_eq!(
            GrammarError::MissingStartSymbol {
                symbol: "S".to_string()
            }
            .error_code()
            .as_str(),
            "E030"
        );
    }
}
