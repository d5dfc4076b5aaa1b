//! Line-at-a-time lexer with prioritized pattern dispatch

use super::LexerError;
use crate::config::compile_time::lexical::{MAX_LINE_LENGTH, MAX_TOKENS_PER_LINE};
use crate::config::runtime::LexicalPreferences;
use crate::log_error;
use crate::logging::codes;
use crate::tokens::{PatternSet, Token};

/// Metrics collected across tokenize calls
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalMetrics {
    pub lines_scanned: usize,
    pub tokens_produced: usize,
    pub characters_consumed: usize,
}

/// Scans lines into token sequences.
///
/// The lexer is deterministic: the same line and pattern set always produce
/// the same token sequence or the same error.
pub struct Lexer {
    patterns: PatternSet,
    preferences: LexicalPreferences,
    metrics: LexicalMetrics,
}

impl Lexer {
    pub fn new(patterns: PatternSet) -> Self {
        Self::with_preferences(patterns, LexicalPreferences::default())
    }

    pub fn with_preferences(patterns: PatternSet, preferences: LexicalPreferences) -> Self {
        Self {
            patterns,
            preferences,
            metrics: LexicalMetrics::default(),
        }
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Tokenize a single line.
    ///
    /// Patterns are tried in declaration order at each scan position and the
    /// first match wins. Skip patterns advance the cursor without producing a
    /// token. The scan stops at the first position where no pattern matches.
    pub fn tokenize(&mut self, line: &str) -> Result<Vec<Token>, LexerError> {
        if line.len() > MAX_LINE_LENGTH {
            return Err(LexerError::LineTooLong {
                length: line.len(),
                limit: MAX_LINE_LENGTH,
            });
        }

        let mut tokens = Vec::new();
        let mut offset = 0;

        while offset < line.len() {
            match self.patterns.match_at(line, offset) {
                Some(m) => {
                    if !m.skip {
                        if tokens.len() >= MAX_TOKENS_PER_LINE {
                            return Err(LexerError::TooManyTokens {
                                count: tokens.len() + 1,
                                limit: MAX_TOKENS_PER_LINE,
                            });
                        }
                        tokens.push(Token::new(&m.label, &line[offset..offset + m.len], offset));
                    }
                    offset += m.len;
                }
                None => {
                    if self.preferences.include_offset_in_errors {
                        log_error!(
                            codes::lexical::UNRECOGNIZED_TOKEN,
                            "No pattern matches at scan position",
                            "offset" => offset
                        );
                    } else {
                        log_error!(
                            codes::lexical::UNRECOGNIZED_TOKEN,
                            "No pattern matches at scan position"
                        );
                    }
                    return Err(LexerError::UnrecognizedToken { offset });
                }
            }
        }

        if self.preferences.collect_metrics {
            self.metrics.lines_scanned += 1;
            self.metrics.tokens_produced += tokens.len();
            self.metrics.characters_consumed += line.len();
        }

        Ok(tokens)
    }

    /// Tokenize and keep only the terminal labels, the recognizer's input
    pub fn label_sequence(&mut self, line: &str) -> Result<Vec<String>, LexerError> {
        Ok(self
            .tokenize(line)?
            .into_iter()
            .map(|token| token.label)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{EXTENDED_LEXICON, MINIMAL_LEXICON};
    use assert_matches::assert_matches;

    fn minimal_lexer() -> Lexer {
        Lexer::new(MINIMAL_LEXICON.clone())
    }

    #[test]
    fn test_tokenize_assignment() {
        let mut lexer = minimal_lexer();
        let tokens = lexer.tokenize("x = 5").unwrap();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].label, "identifier");
        assert_eq!(tokens[0].lexeme, "x");
        assert_eq!(tokens[0].offset, 0);
        assert_eq!(tokens[1].label, "equals");
        assert_eq!(tokens[1].offset, 2);
        assert_eq!(tokens[2].label, "number");
        assert_eq!(tokens[2].lexeme, "5");
        assert_eq!(tokens[2].offset, 4);
    }

    #[test]
    fn test_tokenize_declaration() {
        let mut lexer = minimal_lexer();
        let labels = lexer.label_sequence("declare counter").unwrap();
        assert_eq!(labels, vec!["declare", "identifier"]);
    }

    #[test]
    fn test_keyword_not_split_from_identifier() {
        let mut lexer = minimal_lexer();
        // `declared` must lex as one identifier, not `declare` + `d`
        let tokens = lexer.tokenize("declared").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].label, "identifier");
    }

    #[test]
    fn test_unrecognized_token_offset() {
        let mut lexer = minimal_lexer();
        let err = lexer.tokenize("x=5$").unwrap_err();
        assert_matches!(err, LexerError::UnrecognizedToken { offset: 3 });
    }

    #[test]
    fn test_unrecognized_leading_character() {
        let mut lexer = minimal_lexer();
        let err = lexer.tokenize("$x = 5").unwrap_err();
        assert_matches!(err, LexerError::UnrecognizedToken { offset: 0 });
    }

    #[test]
    fn test_empty_line_produces_no_tokens() {
        let mut lexer = minimal_lexer();
        assert!(lexer.tokenize("").unwrap().is_empty());
        assert!(lexer.tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut lexer = minimal_lexer();
        let first = lexer.tokenize("x = y + 3").unwrap();
        let second = lexer.tokenize("x = y + 3").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_line_too_long() {
        let mut lexer = minimal_lexer();
        let long_line = "x".repeat(MAX_LINE_LENGTH + 1);
        let err = lexer.tokenize(&long_line).unwrap_err();
        assert_matches!(err, LexerError::LineTooLong { .. });
    }

    #[test]
    fn test_metrics_accumulate() {
        let mut lexer = Lexer::with_preferences(
            MINIMAL_LEXICON.clone(),
            LexicalPreferences {
                collect_metrics: true,
                include_offset_in_errors: true,
            },
        );

        lexer.tokenize("x = 5").unwrap();
        lexer.tokenize("declare y").unwrap();

        assert_eq!(lexer.metrics().lines_scanned, 2);
        assert_eq!(lexer.metrics().tokens_produced, 5);
    }

    #[test]
    fn test_extended_conditional_statement() {
        let mut lexer = Lexer::new(EXTENDED_LEXICON.clone());
        let labels = lexer.label_sequence("if (x > 5) { y = 1 }").unwrap();
        assert_eq!(
            labels,
            vec![
                "if",
                "lparen",
                "identifier",
                "comparison_op",
                "number",
                "rparen",
                "lbrace",
                "identifier",
                "equals",
                "number",
                "rbrace"
            ]
        );
    }
}
