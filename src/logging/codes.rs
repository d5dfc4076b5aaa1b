//! Consolidated error codes and classification system
//!
//! Single source of truth for all error codes, their metadata, and
//! classification functions. Code constants and their behavioral metadata
//! live together in this module.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// File processing error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const TOO_MANY_LINES: Code = Code::new("E012");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const UNRECOGNIZED_TOKEN: Code = Code::new("E020");
    pub const LINE_TOO_LONG: Code = Code::new("E021");
    pub const TOO_MANY_TOKENS: Code = Code::new("E022");
}

/// Grammar configuration error codes
pub mod grammar {
    use super::Code;

    pub const MISSING_START_SYMBOL: Code = Code::new("E030");
    pub const EMPTY_GRAMMAR: Code = Code::new("E031");
    pub const INVALID_PATTERN: Code = Code::new("E032");
    pub const PROFILE_PARSE_ERROR: Code = Code::new("E033");
}

/// Syntax recognition error codes
pub mod syntax {
    use super::Code;

    pub const NO_DERIVATION: Code = Code::new("E040");
    pub const CHART_OVERFLOW: Code = Code::new("E041");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I006");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I010");
    pub const LINE_ACCEPTED: Code = Code::new("I011");
    pub const VALIDATION_PASSED: Code = Code::new("I020");
    pub const PROFILE_LOADED: Code = Code::new("I021");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static METADATA_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn metadata_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    METADATA_REGISTRY.get_or_init(|| {
        let entries = [
            ErrorMetadata {
                code: "ERR001",
                category: "System",
                severity: Severity::Critical,
                recoverable: false,
                requires_halt: true,
                description: "Internal error in the validator",
                recommended_action: "Report this as a bug with the input that triggered it",
            },
            ErrorMetadata {
                code: "ERR002",
                category: "System",
                severity: Severity::Critical,
                recoverable: false,
                requires_halt: true,
                description: "Startup initialization failed",
                recommended_action: "Check configuration and environment variables",
            },
            ErrorMetadata {
                code: "E005",
                category: "FileProcessing",
                severity: Severity::High,
                recoverable: false,
                requires_halt: true,
                description: "Source file does not exist",
                recommended_action: "Verify the file path",
            },
            ErrorMetadata {
                code: "E007",
                category: "FileProcessing",
                severity: Severity::High,
                recoverable: false,
                requires_halt: true,
                description: "Source file exceeds the compile-time size limit",
                recommended_action: "Split the source unit into smaller files",
            },
            ErrorMetadata {
                code: "E009",
                category: "FileProcessing",
                severity: Severity::High,
                recoverable: false,
                requires_halt: true,
                description: "Source file is not readable",
                recommended_action: "Check file permissions",
            },
            ErrorMetadata {
                code: "E010",
                category: "FileProcessing",
                severity: Severity::High,
                recoverable: false,
                requires_halt: true,
                description: "Source file is not valid UTF-8",
                recommended_action: "Re-encode the file as UTF-8",
            },
            ErrorMetadata {
                code: "E011",
                category: "FileProcessing",
                severity: Severity::High,
                recoverable: false,
                requires_halt: true,
                description: "I/O error while reading the source file",
                recommended_action: "Retry; check the storage device",
            },
            ErrorMetadata {
                code: "E012",
                category: "FileProcessing",
                severity: Severity::High,
                recoverable: false,
                requires_halt: true,
                description: "Source file exceeds the compile-time line count limit",
                recommended_action: "Split the source unit into smaller files",
            },
            ErrorMetadata {
                code: "E020",
                category: "Lexical",
                severity: Severity::Medium,
                recoverable: true,
                requires_halt: false,
                description: "No token pattern matches at the scan position",
                recommended_action: "Remove or fix the unrecognized character sequence",
            },
            ErrorMetadata {
                code: "E021",
                category: "Lexical",
                severity: Severity::Medium,
                recoverable: true,
                requires_halt: false,
                description: "Line exceeds the compile-time length limit",
                recommended_action: "Shorten the statement",
            },
            ErrorMetadata {
                code: "E022",
                category: "Lexical",
                severity: Severity::Medium,
                recoverable: true,
                requires_halt: false,
                description: "Line produces more tokens than the compile-time limit",
                recommended_action: "Shorten the statement",
            },
            ErrorMetadata {
                code: "E030",
                category: "Grammar",
                severity: Severity::High,
                recoverable: false,
                requires_halt: true,
                description: "Grammar start symbol has no production",
                recommended_action: "Add a production for the start symbol",
            },
            ErrorMetadata {
                code: "E031",
                category: "Grammar",
                severity: Severity::High,
                recoverable: false,
                requires_halt: true,
                description: "Grammar defines no productions",
                recommended_action: "Define at least one production",
            },
            ErrorMetadata {
                code: "E032",
                category: "Grammar",
                severity: Severity::High,
                recoverable: false,
                requires_halt: true,
                description: "Token pattern is not a valid regular expression",
                recommended_action: "Fix the pattern in the profile",
            },
            ErrorMetadata {
                code: "E033",
                category: "Grammar",
                severity: Severity::High,
                recoverable: false,
                requires_halt: true,
                description: "Grammar profile file could not be parsed",
                recommended_action: "Fix the TOML syntax of the profile file",
            },
            ErrorMetadata {
                code: "E040",
                category: "Syntax",
                severity: Severity::Medium,
                recoverable: true,
                requires_halt: false,
                description: "Token sequence has no derivation from the start symbol",
                recommended_action: "Fix the statement to match the grammar",
            },
            ErrorMetadata {
                code: "E041",
                category: "Syntax",
                severity: Severity::Critical,
                recoverable: false,
                requires_halt: true,
                description: "Recognition chart exceeded the compile-time item limit",
                recommended_action: "Simplify the grammar or shorten the statement",
            },
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    metadata_registry().get(code)
}

pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|m| m.description)
        .unwrap_or("Unknown error")
}

pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|m| m.category)
        .unwrap_or("Unknown")
}

pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|m| m.severity)
        .unwrap_or(Severity::Medium)
}

pub fn get_action(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|m| m.recommended_action)
        .unwrap_or("No specific action available")
}

pub fn requires_halt(code: &str) -> bool {
    get_error_metadata(code)
        .map(|m| m.requires_halt)
        .unwrap_or(false)
}

pub fn is_recoverable(code: &str) -> bool {
    get_error_metadata(code)
        .map(|m| m.recoverable)
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display() {
        assert_eq!(lexical::UNRECOGNIZED_TOKEN.to_string(), "E020");
        assert_eq!(lexical::UNRECOGNIZED_TOKEN.as_str(), "E020");
    }

    #[test]
    fn test_every_error_code_has_metadata() {
        let codes = [
            system::INTERNAL_ERROR,
            system::INITIALIZATION_FAILURE,
            file_processing::FILE_NOT_FOUND,
            file_processing::FILE_TOO_LARGE,
            file_processing::PERMISSION_DENIED,
            file_processing::INVALID_ENCODING,
            file_processing::IO_ERROR,
            file_processing::TOO_MANY_LINES,
            lexical::UNRECOGNIZED_TOKEN,
            lexical::LINE_TOO_LONG,
            lexical::TOO_MANY_TOKENS,
            grammar::MISSING_START_SYMBOL,
            grammar::EMPTY_GRAMMAR,
            grammar::INVALID_PATTERN,
            grammar::PROFILE_PARSE_ERROR,
            syntax::NO_DERIVATION,
            syntax::CHART_OVERFLOW,
        ];

        for code in codes {
            assert!(
                get_error_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
            assert_ne!(get_description(code.as_str()), "Unknown error");
        }
    }

    #[test]
    fn test_classification() {
        assert!(requires_halt(system::INTERNAL_ERROR.as_str()));
        assert!(!requires_halt(syntax::NO_DERIVATION.as_str()));
        assert!(is_recoverable(lexical::UNRECOGNIZED_TOKEN.as_str()));
        assert!(!is_recoverable(grammar::INVALID_PATTERN.as_str()));
        assert_eq!(get_category(syntax::NO_DERIVATION.as_str()), "Syntax");
        assert_eq!(
            get_severity(syntax::CHART_OVERFLOW.as_str()),
            Severity::Critical
        );
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(get_description("E999"), "Unknown error");
        assert_eq!(get_category("E999"), "Unknown");
        assert!(!requires_halt("E999"));
    }
}
