//! Parallel line validation
//!
//! Splits the line range across worker threads, each validating its chunk
//! sequentially. Observable behavior matches the sequential validator: the
//! reported failure is always the earliest failing line, regardless of which
//! worker found a failure first.

use super::error::PipelineError;
use super::result::{LineOutcome, LineResult, ValidationReport};
use super::LineValidator;
use crate::config::compile_time::validation::MAX_WORKER_THREADS;
use crate::lexical::Lexer;
use crate::syntax::SyntaxError;
use std::sync::Mutex;

/// The earliest noteworthy event found by any worker
#[derive(Debug)]
enum Finding {
    Failure(LineResult),
    Abort { line_number: u32, error: SyntaxError },
}

impl Finding {
    fn line_number(&self) -> u32 {
        match self {
            Finding::Failure(result) => result.line_number,
            Finding::Abort { line_number, .. } => *line_number,
        }
    }
}

/// Record a finding, keeping only the earliest line across workers
fn merge_finding(shared: &Mutex<Option<Finding>>, finding: Finding) {
    let mut guard = shared.lock().unwrap();
    match guard.as_ref() {
        Some(existing) if existing.line_number() <= finding.line_number() => {}
        _ => *guard = Some(finding),
    }
}

/// Earliest recorded line, used by workers to stop early
fn earliest_line(shared: &Mutex<Option<Finding>>) -> Option<u32> {
    shared.lock().unwrap().as_ref().map(|f| f.line_number())
}

/// Validate lines across worker threads.
///
/// Falls back to the sequential path for small inputs or a single worker.
pub fn validate_lines_parallel<S: AsRef<str> + Sync>(
    validator: &LineValidator,
    lines: &[S],
    requested_threads: usize,
) -> Result<ValidationReport, PipelineError> {
    let workers = requested_threads.clamp(1, MAX_WORKER_THREADS).min(lines.len().max(1));

    if workers <= 1 || lines.len() < workers * 2 {
        return validator.validate_lines(lines);
    }

    let chunk_size = lines.len().div_ceil(workers);
    let shared: Mutex<Option<Finding>> = Mutex::new(None);

    std::thread::scope(|scope| {
        for (chunk_index, chunk) in lines.chunks(chunk_size).enumerate() {
            let shared = &shared;
            let start = chunk_index * chunk_size;

            scope.spawn(move || {
                let mut lexer = Lexer::new(validator.profile().patterns.clone());

                for (offset, line) in chunk.iter().enumerate() {
                    let line = line.as_ref();
                    if line.trim().is_empty() {
                        continue;
                    }

                    let line_number = (start + offset + 1) as u32;

                    // A failure on an earlier line makes the rest of this
                    // chunk irrelevant
                    if matches!(earliest_line(shared), Some(earliest) if earliest <= line_number) {
                        return;
                    }

                    match validator.check_line(&mut lexer, line) {
                        Ok(LineOutcome::Accepted) => {}
                        Ok(outcome) => {
                            merge_finding(
                                shared,
                                Finding::Failure(LineResult {
                                    line_number,
                                    outcome,
                                }),
                            );
                            return;
                        }
                        Err(error) => {
                            merge_finding(shared, Finding::Abort { line_number, error });
                            return;
                        }
                    }
                }
            });
        }
    });

    let finding = shared.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner());

    match finding {
        None => Ok(ValidationReport::success(count_non_blank(lines, None))),
        Some(Finding::Failure(result)) => {
            let validated = count_non_blank(lines, Some(result.line_number));
            Ok(ValidationReport::failure(validated, result))
        }
        Some(Finding::Abort { error, .. }) => Err(PipelineError::Syntax(error)),
    }
}

/// Non-blank lines up to and including `through_line`, matching the
/// sequential validator's count
fn count_non_blank<S: AsRef<str>>(lines: &[S], through_line: Option<u32>) -> usize {
    lines
        .iter()
        .enumerate()
        .filter(|(index, line)| {
            let within = through_line
                .map(|limit| (*index as u32) < limit)
                .unwrap_or(true);
            within && !line.as_ref().trim().is_empty()
        })
        .count()
}
