// File: src/core/haiku.rs
use crate::core::syllables::{canonicalize, SyllableCounter};
use crate::core::types::{Diagnostic, HaikuVerdict, HAIKU_PATTERN};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Discord-style emoji tokens, `:wink:` and friends. Greedy, so two
    /// emoji on one line are stripped together with everything between them.
    static ref EMOJI: Regex = Regex::new(r":.+:").unwrap();
}

/// Structural haiku evaluation over a borrowed syllable counter.
pub struct HaikuEvaluator<'a> {
    counter: SyllableCounter<'a>,
}

impl<'a> HaikuEvaluator<'a> {
    pub fn new(counter: SyllableCounter<'a>) -> Self {
        Self { counter }
    }

    /// Decides whether `text` is a well-formed 5/7/5 haiku. A rejection
    /// always carries at least one diagnostic, and unknown words are
    /// collected from all three lines before anything is reported.
    pub fn evaluate(&self, text: &str) -> HaikuVerdict {
        let trimmed = text.trim_matches(|c| c == ' ' || c == '\n' || c == '\t');
        let stripped = EMOJI.replace_all(trimmed, "");
        let stripped = stripped.trim();

        let lines: Vec<&str> = stripped.split('\n').collect();
        if lines.len() != 3 {
            return HaikuVerdict::Rejected {
                reasons: vec![Diagnostic::WrongLineCount { found: lines.len() }],
            };
        }

        let mut counts = [0u32; 3];
        let mut unknown: Vec<String> = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            counts[i] = self.line_count(line, &mut unknown);
        }

        if unknown.is_empty() && counts == HAIKU_PATTERN {
            return HaikuVerdict::Accepted;
        }

        // The counted pattern is only meaningful when every word resolved.
        let reasons = if unknown.is_empty() {
            vec![Diagnostic::PatternMismatch {
                actual: counts,
                expected: HAIKU_PATTERN,
            }]
        } else {
            vec![Diagnostic::UnknownWords { words: unknown }]
        };
        HaikuVerdict::Rejected { reasons }
    }

    /// Sums syllables over the space-separated tokens of one line. Tokens
    /// the counter cannot resolve land in `unknown` (canonical form, scan
    /// order, de-duplicated) and contribute nothing to the sum.
    fn line_count(&self, line: &str, unknown: &mut Vec<String>) -> u32 {
        let mut total = 0;
        for token in line.split(' ').filter(|t| !t.is_empty()) {
            match self.counter.count(token) {
                Some(count) => total += count,
                None => {
                    let mut name = canonicalize(token);
                    if name.is_empty() {
                        name = token.to_string();
                    }
                    if !unknown.contains(&name) {
                        unknown.push(name);
                    }
                }
            }
        }
        total
    }
}
