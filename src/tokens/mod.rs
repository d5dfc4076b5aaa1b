//! Token types and prioritized pattern matching
//!
//! A `PatternSet` holds token patterns in declaration order. Scanning tries
//! patterns in that order at each position and the first pattern that matches
//! wins, so keyword patterns must be declared before the identifier pattern
//! that would otherwise swallow them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A classified lexeme produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Terminal label, matched against grammar terminals during recognition
    pub label: String,
    /// The matched source text
    pub lexeme: String,
    /// Byte offset of the lexeme within its line
    pub offset: usize,
}

impl Token {
    pub fn new(label: &str, lexeme: &str, offset: usize) -> Self {
        Self {
            label: label.to_string(),
            lexeme: lexeme.to_string(),
            offset,
        }
    }

    /// Byte length of the matched lexeme
    pub fn len(&self) -> usize {
        self.lexeme.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.label, self.lexeme)
    }
}

/// A single token pattern with its terminal label
#[derive(Debug, Clone)]
pub struct TokenPattern {
    pub label: String,
    regex: Regex,
    /// Skip patterns consume input without producing a token
    pub skip: bool,
}

impl TokenPattern {
    /// Compile a pattern anchored to the scan position.
    ///
    /// The pattern is wrapped as `^(?:pat)` so a match can only start at the
    /// position being scanned, never further into the line.
    pub fn new(label: &str, pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})", pattern))?;
        Ok(Self {
            label: label.to_string(),
            regex,
            skip: false,
        })
    }

    /// Compile a skip pattern (consumed silently, e.g. whitespace)
    pub fn skip(label: &str, pattern: &str) -> Result<Self, regex::Error> {
        let mut p = Self::new(label, pattern)?;
        p.skip = true;
        Ok(p)
    }

    /// Match this pattern at the start of `rest`, returning the match length
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        self.regex.find(rest).map(|m| m.end())
    }
}

/// Result of matching a pattern set at a scan position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    pub label: String,
    pub len: usize,
    pub skip: bool,
}

/// An ordered collection of token patterns
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<TokenPattern>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    pub fn push(&mut self, pattern: TokenPattern) {
        self.patterns.push(pattern);
    }

    /// Build a pattern set from (label, pattern, skip) triples
    pub fn from_rules(rules: &[(&str, &str, bool)]) -> Result<Self, regex::Error> {
        let mut set = Self::new();
        for (label, pattern, skip) in rules {
            let compiled = if *skip {
                TokenPattern::skip(label, pattern)?
            } else {
                TokenPattern::new(label, pattern)?
            };
            set.push(compiled);
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[TokenPattern] {
        &self.patterns
    }

    /// Try all patterns at `offset` in declaration order.
    ///
    /// Returns the first non-empty match. Zero-length matches are treated as
    /// non-matches so a pattern like `a*` can never stall the scan.
    pub fn match_at(&self, text: &str, offset: usize) -> Option<PatternMatch> {
        let rest = &text[offset..];
        for pattern in &self.patterns {
            if let Some(len) = pattern.match_len(rest) {
                if len == 0 {
                    continue;
                }
                return Some(PatternMatch {
                    label: pattern.label.clone(),
                    len,
                    skip: pattern.skip,
                });
            }
        }
        None
    }
}

// ============================================================================
// BUILT-IN LEXICONS
// ============================================================================

/// Token patterns for the minimal statement language.
///
/// The `declare` keyword is declared before `identifier`; with first-match-wins
/// scanning this is what keeps `declare` from lexing as an identifier.
pub static MINIMAL_LEXICON: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::from_rules(&[
        ("whitespace", r"\s+", true),
        ("declare", r"declare\b", false),
        ("identifier", r"[A-Za-z_][A-Za-z0-9_]*", false),
        ("number", r"\d+(?:\.\d+)?", false),
        ("equals", r"=", false),
        ("operator", r"[+\-*/]", false),
    ])
    .unwrap_or_else(|e| panic!("built-in minimal lexicon failed to compile: {}", e))
});

/// Token patterns for the extended statement language with conditionals.
///
/// `comparison_op` precedes `equals` so `==` lexes as one comparison token
/// rather than two assignment tokens.
pub static EXTENDED_LEXICON: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::from_rules(&[
        ("whitespace", r"\s+", true),
        ("declare", r"declare\b", false),
        ("if", r"if\b", false),
        ("while", r"while\b", false),
        ("identifier", r"[A-Za-z_][A-Za-z0-9_]*", false),
        ("number", r"\d+(?:\.\d+)?", false),
        ("comparison_op", r"[<>]=?|==|!=", false),
        ("equals", r"=", false),
        ("operator", r"[+\-*/]", false),
        ("lparen", r"\(", false),
        ("rparen", r"\)", false),
        ("lbrace", r"\{", false),
        ("rbrace", r"\}", false),
    ])
    .unwrap_or_else(|e| panic!("built-in extended lexicon failed to compile: {}", e))
});
