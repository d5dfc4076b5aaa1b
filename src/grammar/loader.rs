//! TOML grammar profile loading
//!
//! Profiles are plain TOML files so a language variant can be swapped in
//! without recompiling:
//!
//! ```toml
//! name = "minimal"
//! start_symbol = "S"
//!
//! [productions]
//! S = [["DECLARATION"], ["ASSIGNMENT"]]
//! DECLARATION = [["declare", "identifier"]]
//! ASSIGNMENT = [["identifier", "equals", "number"]]
//!
//! [[patterns]]
//! label = "whitespace"
//! regex = '\s+'
//! skip = true
//!
//! [[patterns]]
//! label = "declare"
//! regex = 'declare\b'
//! ```
//!
//! Pattern order in the file is priority order. Production key order does not
//! matter; a symbol is a nonterminal exactly when it appears as a key.

use super::{Grammar, GrammarError, LanguageProfile};
use crate::log_success;
use crate::logging::codes;
use crate::tokens::{PatternSet, TokenPattern};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ProfileFile {
    name: String,
    start_symbol: String,
    productions: HashMap<String, Vec<Vec<String>>>,
    patterns: Vec<PatternEntry>,
}

#[derive(Debug, Deserialize)]
struct PatternEntry {
    label: String,
    regex: String,
    #[serde(default)]
    skip: bool,
}

/// Load a language profile from a TOML file
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<LanguageProfile, GrammarError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let profile = parse_profile(&contents)?;

    log_success!(
        codes::success::PROFILE_LOADED,
        "Grammar profile loaded",
        "profile" => profile.name,
        "path" => path.as_ref().display()
    );

    Ok(profile)
}

/// Parse a language profile from TOML text
pub fn parse_profile(contents: &str) -> Result<LanguageProfile, GrammarError> {
    let file: ProfileFile = toml::from_str(contents)?;

    // Stable rule order keeps the grammar deterministic across loads even
    // though TOML table order is not preserved
    let mut rules: Vec<(String, Vec<Vec<String>>)> = file.productions.into_iter().collect();
    rules.sort_by(|(a, _), (b, _)| a.cmp(b));

    let grammar = Grammar::from_owned_rules(file.start_symbol, rules)?;

    let mut patterns = PatternSet::new();
    for entry in &file.patterns {
        let compiled = if entry.skip {
            TokenPattern::skip(&entry.label, &entry.regex)
        } else {
            TokenPattern::new(&entry.label, &entry.regex)
        };

        patterns.push(compiled.map_err(|source| GrammarError::InvalidPattern {
            label: entry.label.clone(),
            source,
        })?);
    }

    Ok(LanguageProfile::new(&file.name, grammar, patterns))
}
