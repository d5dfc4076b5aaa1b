//! Chart-based CFG recognition
//!
//! The recognizer answers one question: does a token label sequence derive
//! from the grammar's start symbol? It runs an Earley-style chart scan, which
//! terminates on any context-free grammar, including the left-recursive and
//! mutually recursive shapes that break naive descent. No parse tree is
//! built; recognition stops at existence.

use super::error::SyntaxError;
use crate::config::compile_time::syntax::MAX_CHART_ITEMS;
use crate::grammar::{Grammar, Symbol};
use std::collections::{HashMap, HashSet};

/// Result of recognizing one token label sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    Accepted,
    Rejected,
}

impl ParseOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ParseOutcome::Accepted)
    }
}

/// Internal symbol with nonterminals interned to indices
#[derive(Debug, Clone, PartialEq, Eq)]
enum Sym {
    Terminal(String),
    Nonterminal(usize),
}

/// One flattened production: `head -> body`
#[derive(Debug, Clone)]
struct Production {
    head: usize,
    body: Vec<Sym>,
}

/// A dotted production with its origin set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Item {
    prod: usize,
    dot: usize,
    origin: usize,
}

/// Grammar-independent recognition engine.
///
/// Construction flattens the grammar into indexed productions and precomputes
/// the nullable set, so per-line recognition does no string hashing beyond
/// terminal comparison.
pub struct Recognizer {
    productions: Vec<Production>,
    /// Production indices grouped by head nonterminal
    by_head: Vec<Vec<usize>>,
    /// Nullable flags, indexed by intern id (grammar nonterminal order)
    nullable: Vec<bool>,
    start: usize,
}

impl Recognizer {
    pub fn new(grammar: &Grammar) -> Self {
        let names: Vec<String> = grammar.nonterminals().to_vec();
        let ids: HashMap<&str, usize> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();

        let mut productions = Vec::new();
        let mut by_head = vec![Vec::new(); names.len()];

        for (head_id, name) in names.iter().enumerate() {
            if let Some(alternatives) = grammar.alternatives(name) {
                for alternative in alternatives {
                    let body = alternative
                        .iter()
                        .map(|symbol| match symbol {
                            Symbol::Terminal(t) => Sym::Terminal(t.clone()),
                            Symbol::Nonterminal(nt) => Sym::Nonterminal(ids[nt.as_str()]),
                        })
                        .collect();

                    by_head[head_id].push(productions.len());
                    productions.push(Production {
                        head: head_id,
                        body,
                    });
                }
            }
        }

        let nullable = compute_nullable(&productions, names.len());
        let start = ids[grammar.start_symbol()];

        Self {
            productions,
            by_head,
            nullable,
            start,
        }
    }

    /// Decide whether `labels` derives from the start symbol.
    ///
    /// Builds one chart set per input position. Total chart size is capped;
    /// exceeding the cap aborts recognition rather than exhausting memory.
    pub fn recognize<S: AsRef<str>>(&self, labels: &[S]) -> Result<ParseOutcome, SyntaxError> {
        let n = labels.len();

        let mut chart: Vec<Vec<Item>> = vec![Vec::new(); n + 1];
        let mut seen: Vec<HashSet<Item>> = vec![HashSet::new(); n + 1];
        let mut total_items = 0usize;

        for &prod in &self.by_head[self.start] {
            push_item(
                &mut chart[0],
                &mut seen[0],
                &mut total_items,
                Item {
                    prod,
                    dot: 0,
                    origin: 0,
                },
            )?;
        }

        for i in 0..=n {
            let mut j = 0;
            while j < chart[i].len() {
                let item = chart[i][j];
                j += 1;

                match self.productions[item.prod].body.get(item.dot) {
                    Some(Sym::Nonterminal(nt)) => {
                        // Predict
                        for &prod in &self.by_head[*nt] {
                            push_item(
                                &mut chart[i],
                                &mut seen[i],
                                &mut total_items,
                                Item {
                                    prod,
                                    dot: 0,
                                    origin: i,
                                },
                            )?;
                        }
                        // Nullable shortcut: a nonterminal that derives empty
                        // completes in place, so advance past it immediately
                        if self.nullable[*nt] {
                            push_item(
                                &mut chart[i],
                                &mut seen[i],
                                &mut total_items,
                                Item {
                                    dot: item.dot + 1,
                                    ..item
                                },
                            )?;
                        }
                    }
                    Some(Sym::Terminal(t)) => {
                        // Scan
                        if i < n && labels[i].as_ref() == t.as_str() {
                            push_item(
                                &mut chart[i + 1],
                                &mut seen[i + 1],
                                &mut total_items,
                                Item {
                                    dot: item.dot + 1,
                                    ..item
                                },
                            )?;
                        }
                    }
                    None => {
                        // Complete
                        let head = self.productions[item.prod].head;
                        let parent_count = chart[item.origin].len();
                        for k in 0..parent_count {
                            let parent = chart[item.origin][k];
                            if let Some(Sym::Nonterminal(nt)) =
                                self.productions[parent.prod].body.get(parent.dot)
                            {
                                if *nt == head {
                                    push_item(
                                        &mut chart[i],
                                        &mut seen[i],
                                        &mut total_items,
                                        Item {
                                            dot: parent.dot + 1,
                                            ..parent
                                        },
                                    )?;
                                }
                            }
                        }
                    }
                }
            }
        }

        let accepted = chart[n].iter().any(|item| {
            item.origin == 0
                && self.productions[item.prod].head == self.start
                && item.dot == self.productions[item.prod].body.len()
        });

        Ok(if accepted {
            ParseOutcome::Accepted
        } else {
            ParseOutcome::Rejected
        })
    }
}

fn push_item(
    set: &mut Vec<Item>,
    set_seen: &mut HashSet<Item>,
    total_items: &mut usize,
    item: Item,
) -> Result<(), SyntaxError> {
    if set_seen.insert(item) {
        *total_items += 1;
        if *total_items > MAX_CHART_ITEMS {
            return Err(SyntaxError::ChartOverflow {
                items: *total_items,
                limit: MAX_CHART_ITEMS,
            });
        }
        set.push(item);
    }
    Ok(())
}

/// Fixpoint computation of the set of nonterminals deriving the empty string
fn compute_nullable(productions: &[Production], nonterminal_count: usize) -> Vec<bool> {
    let mut nullable = vec![false; nonterminal_count];

    loop {
        let mut changed = false;
        for production in productions {
            if nullable[production.head] {
                continue;
            }
            let all_nullable = production.body.iter().all(|sym| match sym {
                Sym::Terminal(_) => false,
                Sym::Nonterminal(nt) => nullable[*nt],
            });
            if all_nullable {
                nullable[production.head] = true;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    nullable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::profiles;

    fn minimal_recognizer() -> Recognizer {
        Recognizer::new(&profiles::minimal().grammar)
    }

    fn extended_recognizer() -> Recognizer {
        Recognizer::new(&profiles::extended().grammar)
    }

    #[test]
    fn test_accepts_declaration() {
        let recognizer = minimal_recognizer();
        let outcome = recognizer.recognize(&["declare", "identifier"]).unwrap();
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_accepts_simple_assignment() {
        let recognizer = minimal_recognizer();
        let outcome = recognizer
            .recognize(&["identifier", "equals", "number"])
            .unwrap();
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_accepts_operation_assignment() {
        // `x = y + 3`: TERM derives OPERATION, which recurses into TERM on
        // its left edge
        let recognizer = minimal_recognizer();
        let outcome = recognizer
            .recognize(&["identifier", "equals", "identifier", "operator", "number"])
            .unwrap();
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_accepts_nested_operation() {
        // `x = a + b * c` with no precedence: ambiguous, still accepted
        let recognizer = minimal_recognizer();
        let outcome = recognizer
            .recognize(&[
                "identifier",
                "equals",
                "identifier",
                "operator",
                "identifier",
                "operator",
                "identifier",
            ])
            .unwrap();
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_rejects_scrambled_assignment() {
        let recognizer = minimal_recognizer();
        let outcome = recognizer
            .recognize(&["identifier", "number", "equals"])
            .unwrap();
        assert_eq!(outcome, ParseOutcome::Rejected);
    }

    #[test]
    fn test_rejects_incomplete_statement() {
        let recognizer = minimal_recognizer();
        let outcome = recognizer.recognize(&["identifier", "equals"]).unwrap();
        assert_eq!(outcome, ParseOutcome::Rejected);

        let outcome = recognizer.recognize(&["declare"]).unwrap();
        assert_eq!(outcome, ParseOutcome::Rejected);
    }

    #[test]
    fn test_rejects_trailing_tokens() {
        let recognizer = minimal_recognizer();
        let outcome = recognizer
            .recognize(&["declare", "identifier", "identifier"])
            .unwrap();
        assert_eq!(outcome, ParseOutcome::Rejected);
    }

    #[test]
    fn test_rejects_unknown_terminal() {
        let recognizer = minimal_recognizer();
        let outcome = recognizer.recognize(&["mystery"]).unwrap();
        assert_eq!(outcome, ParseOutcome::Rejected);
    }

    #[test]
    fn test_rejects_empty_sequence() {
        // The start symbol is not nullable in either built-in grammar
        let recognizer = minimal_recognizer();
        let outcome = recognizer.recognize::<&str>(&[]).unwrap();
        assert_eq!(outcome, ParseOutcome::Rejected);
    }

    #[test]
    fn test_extended_accepts_conditional() {
        let recognizer = extended_recognizer();
        let outcome = recognizer
            .recognize(&[
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
                "rbrace",
            ])
            .unwrap();
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_extended_accepts_while_loop() {
        let recognizer = extended_recognizer();
        let outcome = recognizer
            .recognize(&[
                "while",
                "lparen",
                "identifier",
                "comparison_op",
                "identifier",
                "rparen",
                "lbrace",
                "identifier",
                "equals",
                "identifier",
                "rbrace",
            ])
            .unwrap();
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_extended_rejects_unbalanced_paren() {
        let recognizer = extended_recognizer();
        let outcome = recognizer
            .recognize(&[
                "if",
                "lparen",
                "identifier",
                "comparison_op",
                "number",
                "lbrace",
                "identifier",
                "equals",
                "number",
                "rbrace",
            ])
            .unwrap();
        assert_eq!(outcome, ParseOutcome::Rejected);
    }

    #[test]
    fn test_nullable_computation() {
        let grammar = Grammar::from_rules(
            "S",
            &[
                ("S", &[&["A", "number"]]),
                ("A", &[&["B"], &["identifier"]]),
                ("B", &[&[]]),
            ],
        )
        .unwrap();

        let recognizer = Recognizer::new(&grammar);
        let id = |name: &str| {
            grammar
                .nonterminals()
                .iter()
                .position(|n| n == name)
                .unwrap()
        };

        // B derives empty directly, A through B, S never (number is required)
        assert!(recognizer.nullable[id("B")]);
        assert!(recognizer.nullable[id("A")]);
        assert!(!recognizer.nullable[id("S")]);
    }

    #[test]
    fn test_epsilon_production_recognition() {
        let grammar = Grammar::from_rules(
            "S",
            &[("S", &[&["A", "number"]]), ("A", &[&[], &["identifier"]])],
        )
        .unwrap();
        let recognizer = Recognizer::new(&grammar);

        // A can vanish or match one identifier
        assert!(recognizer.recognize(&["number"]).unwrap().is_accepted());
        assert!(recognizer
            .recognize(&["identifier", "number"])
            .unwrap()
            .is_accepted());
        assert_eq!(
            recognizer.recognize(&["identifier"]).unwrap(),
            ParseOutcome::Rejected
        );
    }

    #[test]
    fn test_direct_left_recursion_terminates() {
        let grammar = Grammar::from_rules(
            "E",
            &[("E", &[&["E", "operator", "number"], &["number"]])],
        )
        .unwrap();
        let recognizer = Recognizer::new(&grammar);

        assert!(recognizer.recognize(&["number"]).unwrap().is_accepted());
        assert!(recognizer
            .recognize(&["number", "operator", "number", "operator", "number"])
            .unwrap()
            .is_accepted());
        assert_eq!(
            recognizer.recognize(&["operator"]).unwrap(),
            ParseOutcome::Rejected
        );
    }

    #[test]
    fn test_determinism() {
        let recognizer = minimal_recognizer();
        let labels = ["identifier", "equals", "identifier", "operator", "number"];
        let first = recognizer.recognize(&labels).unwrap();
        let second = recognizer.recognize(&labels).unwrap();
        assert_eq!(first, second);
    }
}
