//! Line validation pipeline
//!
//! Drives lexer and recognizer over a source unit one line at a time.
//! Validation is fail-fast: the first failing line ends the run and produces
//! the run's single diagnostic. Blank lines are skipped without a verdict.

pub mod error;
pub mod parallel;
pub mod result;

pub use error::PipelineError;
pub use result::{LineOutcome, LineResult, ValidationReport, SUCCESS_MESSAGE};

use crate::config::runtime::ValidatorPreferences;
use crate::grammar::LanguageProfile;
use crate::lexical::{Lexer, LexerError};
use crate::logging::codes;
use crate::syntax::{ParseOutcome, Recognizer, SyntaxError};
use crate::{log_error, log_success};
use std::path::Path;

/// Validates source units against a language profile.
///
/// The recognizer is built once from the profile's grammar and reused for
/// every line.
pub struct LineValidator {
    profile: LanguageProfile,
    recognizer: Recognizer,
    preferences: ValidatorPreferences,
}

impl LineValidator {
    pub fn new(profile: LanguageProfile) -> Self {
        Self::with_preferences(profile, ValidatorPreferences::default())
    }

    pub fn with_preferences(profile: LanguageProfile, preferences: ValidatorPreferences) -> Self {
        let recognizer = Recognizer::new(&profile.grammar);
        Self {
            profile,
            recognizer,
            preferences,
        }
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    pub fn preferences(&self) -> &ValidatorPreferences {
        &self.preferences
    }

    /// Run lexer and recognizer over one line.
    ///
    /// Lexical failures become a `LineOutcome`; only a recognition abort
    /// (chart overflow) escapes as an error.
    pub(crate) fn check_line(
        &self,
        lexer: &mut Lexer,
        line: &str,
    ) -> Result<LineOutcome, SyntaxError> {
        let labels = match lexer.label_sequence(line) {
            Ok(labels) => labels,
            Err(LexerError::UnrecognizedToken { offset }) => {
                return Ok(LineOutcome::LexFailure { offset });
            }
            // Limit violations surface at the same position granularity as
            // an unmatched character: the line is the diagnostic unit
            Err(LexerError::LineTooLong { .. }) | Err(LexerError::TooManyTokens { .. }) => {
                return Ok(LineOutcome::LexFailure { offset: 0 });
            }
        };

        match self.recognizer.recognize(&labels)? {
            ParseOutcome::Accepted => Ok(LineOutcome::Accepted),
            ParseOutcome::Rejected => Ok(LineOutcome::SyntaxFailure),
        }
    }

    /// Validate lines in order, stopping at the first failure.
    ///
    /// Line numbers are 1-based and count every input line; blank lines keep
    /// their number but receive no verdict.
    pub fn validate_lines<S: AsRef<str>>(
        &self,
        lines: &[S],
    ) -> Result<ValidationReport, PipelineError> {
        let mut lexer = Lexer::new(self.profile.patterns.clone());
        let mut validated = 0usize;

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }

            let line_number = (index + 1) as u32;
            validated += 1;

            match self.check_line(&mut lexer, line)? {
                LineOutcome::Accepted => {
                    if self.preferences.log_accepted_lines {
                        log_success!(
                            codes::success::LINE_ACCEPTED,
                            "Line accepted",
                            "line" => line_number
                        );
                    }
                }
                outcome => {
                    let result = LineResult {
                        line_number,
                        outcome,
                    };
                    match &result.outcome {
                        LineOutcome::LexFailure { offset } => {
                            log_error!(
                                codes::lexical::UNRECOGNIZED_TOKEN,
                                "Line rejected by lexer",
                                "line" => line_number,
                                "offset" => offset
                            );
                        }
                        _ => {
                            log_error!(
                                codes::syntax::NO_DERIVATION,
                                "Line rejected by recognizer",
                                "line" => line_number
                            );
                        }
                    }
                    return Ok(ValidationReport::failure(validated, result));
                }
            }
        }

        log_success!(
            codes::success::VALIDATION_PASSED,
            "All lines accepted",
            "lines" => validated
        );
        Ok(ValidationReport::success(validated))
    }

    /// Validate raw source text
    pub fn validate_source(&self, source: &str) -> Result<ValidationReport, PipelineError> {
        let lines: Vec<&str> = source.lines().collect();
        self.validate_lines(&lines)
    }

    /// Read a file and validate it line by line
    pub fn validate_file<P: AsRef<Path>>(&self, path: P) -> Result<ValidationReport, PipelineError> {
        let path = path.as_ref();
        crate::logging::with_file_context(path.to_path_buf(), 0, || {
            let unit = crate::file_processor::process_file(path)?;
            if self.preferences.parallel_validation {
                parallel::validate_lines_parallel(self, &unit.lines, self.preferences.worker_threads)
            } else {
                self.validate_lines(&unit.lines)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::profiles;
    use std::io::Write;

    fn minimal_validator() -> LineValidator {
        LineValidator::new(profiles::minimal())
    }

    #[test]
    fn test_all_lines_accepted() {
        let validator = minimal_validator();
        let report = validator
            .validate_lines(&["declare x", "x = 5", "y = x + 3"])
            .unwrap();

        assert!(report.is_success());
        assert_eq!(report.lines_validated, 3);
        assert_eq!(report.message(), SUCCESS_MESSAGE);
    }

    #[test]
    fn test_lex_failure_reported_with_line_number() {
        let validator = minimal_validator();
        let report = validator
            .validate_lines(&["declare x", "x = $"])
            .unwrap();

        assert_eq!(report.message(), "Unrecognized token at Line: 2");
    }

    #[test]
    fn test_syntax_failure_reported_with_line_number() {
        let validator = minimal_validator();
        let report = validator
            .validate_lines(&["declare x", "x 5 ="])
            .unwrap();

        assert_eq!(report.message(), "Syntax error at Line: 2");
    }

    #[test]
    fn test_fail_fast_reports_earliest_line() {
        // Line 3 fails lexically, line 4 would fail syntactically; only the
        // earlier failure is reported
        let validator = minimal_validator();
        let report = validator
            .validate_lines(&["declare x", "x = 1", "x = $", "x 5 ="])
            .unwrap();

        assert_eq!(report.message(), "Unrecognized token at Line: 3");
        assert_eq!(report.lines_validated, 3);
    }

    #[test]
    fn test_blank_lines_skipped_but_numbered() {
        let validator = minimal_validator();
        let report = validator
            .validate_lines(&["declare x", "", "   ", "x 5 ="])
            .unwrap();

        // The failing line keeps its original position
        assert_eq!(report.message(), "Syntax error at Line: 4");
        assert_eq!(report.lines_validated, 2);
    }

    #[test]
    fn test_blank_only_source_succeeds() {
        let validator = minimal_validator();
        let report = validator.validate_lines(&["", "  ", "\t"]).unwrap();

        assert!(report.is_success());
        assert_eq!(report.lines_validated, 0);
    }

    #[test]
    fn test_empty_source_succeeds() {
        let validator = minimal_validator();
        let report = validator.validate_lines::<&str>(&[]).unwrap();
        assert!(report.is_success());
    }

    #[test]
    fn test_validation_idempotent() {
        let validator = minimal_validator();
        let lines = ["declare x", "x = y + 3", "x = $"];

        let first = validator.validate_lines(&lines).unwrap();
        let second = validator.validate_lines(&lines).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_validate_source_splits_lines() {
        let validator = minimal_validator();
        let report = validator.validate_source("declare x\nx = 5\n").unwrap();
        assert!(report.is_success());
        assert_eq!(report.lines_validated, 2);
    }

    #[test]
    fn test_validate_file() {
        let validator = minimal_validator();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"declare x\nx = unknown $\n").unwrap();

        let report = validator.validate_file(file.path()).unwrap();
        assert_eq!(report.message(), "Unrecognized token at Line: 2");
    }

    #[test]
    fn test_validate_missing_file() {
        let validator = minimal_validator();
        let err = validator.validate_file("/nonexistent/code.txt").unwrap_err();
        assert!(matches!(err, PipelineError::FileProcessor(_)));
    }

    #[test]
    fn test_extended_profile_conditionals() {
        let validator = LineValidator::new(profiles::extended());
        let report = validator
            .validate_lines(&["declare x", "if (x > 5) { y = 1 }", "while (x < 10) { x = x + 1 }"])
            .unwrap();

        assert!(report.is_success());
    }
}
