//! Candidate delimiter sets and per-line delimiter resolution.

use records_model::{Diagnostic, DiagnosticKind};

/// Ordered set of characters that may separate fields.
///
/// Order only affects how ambiguous lines are reported: present delimiters
/// are listed in candidate order, not in the order they appear on the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSet {
    candidates: Vec<char>,
}

impl DelimiterSet {
    /// Pipe, comma and space.
    pub const DEFAULT_CANDIDATES: [char; 3] = ['|', ',', ' '];

    /// Builds a set, keeping the first occurrence of repeated characters.
    pub fn new<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut unique = Vec::new();
        for candidate in candidates {
            if !unique.contains(&candidate) {
                unique.push(candidate);
            }
        }
        Self { candidates: unique }
    }

    pub fn candidates(&self) -> &[char] {
        &self.candidates
    }

    /// Candidates that occur anywhere in `line`, in candidate order.
    pub fn present_in(&self, line: &str) -> Vec<char> {
        self.candidates
            .iter()
            .copied()
            .filter(|candidate| line.contains(*candidate))
            .collect()
    }

    /// Returns the single delimiter used by `line`.
    pub fn resolve(&self, line: &str) -> Result<char, Diagnostic> {
        let present = self.present_in(line);
        match present.as_slice() {
            [] => Err(Diagnostic::new(
                DiagnosticKind::NoDelimiter,
                "there are no delimiters",
            )),
            [delimiter] => Ok(*delimiter),
            many => Err(Diagnostic::new(
                DiagnosticKind::AmbiguousDelimiter,
                format!(
                    "there should only be one type of separator but multiple ({}) were specified",
                    quote_all(many)
                ),
            )),
        }
    }
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CANDIDATES)
    }
}

impl From<&str> for DelimiterSet {
    fn from(candidates: &str) -> Self {
        Self::new(candidates.chars())
    }
}

/// Free-function form of [`DelimiterSet::resolve`].
pub fn resolve(line: &str, candidates: &DelimiterSet) -> Result<char, Diagnostic> {
    candidates.resolve(line)
}

fn quote_all(delimiters: &[char]) -> String {
    delimiters
        .iter()
        .map(|delimiter| format!("'{delimiter}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
