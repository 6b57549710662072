//! Diagnostic values and the accumulator shared by every parsing layer.
//!
//! A [`Diagnostic`] is never raised; it is collected. [`Diagnostics`] carries
//! the collected values together with an [`ErrorPolicy`] so that the line,
//! source and run layers all decide "keep going or stop" the same way.

use std::fmt;
use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

/// What went wrong, independent of the rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// More than one candidate delimiter occurs on a line.
    AmbiguousDelimiter,
    /// No candidate delimiter occurs on a line.
    NoDelimiter,
    /// Splitting produced the wrong number of fields.
    FieldCount,
    /// A field failed semantic validation.
    FieldValidation,
    /// The line source failed before a clean end of input.
    SourceRead,
    /// The line source could not be opened.
    SourceOpen,
}

impl DiagnosticKind {
    /// True for problems with the shape of a line rather than its values.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            Self::AmbiguousDelimiter | Self::NoDelimiter | Self::FieldCount
        )
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::AmbiguousDelimiter => "ambiguous delimiter",
            Self::NoDelimiter => "no delimiter",
            Self::FieldCount => "field count",
            Self::FieldValidation => "field validation",
            Self::SourceRead => "source read",
            Self::SourceOpen => "source open",
        }
    }
}

/// A single failure report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Name of the source the line came from (file name, request).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// 1-based line number; absent for whole-source problems.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            source: None,
            line: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn in_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.line) {
            (Some(source), Some(line)) => write!(f, "{source}:{line}: {}", self.message),
            (Some(source), None) => write!(f, "{source}: {}", self.message),
            (None, Some(line)) => write!(f, "{line}: {}", self.message),
            (None, None) => f.write_str(&self.message),
        }
    }
}

/// Whether a layer keeps collecting after the first diagnostic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Collect every diagnostic so the caller sees all problems in one pass.
    #[default]
    Accumulate,
    /// Stop at the first diagnostic.
    FailFast,
}

/// Ordered collection of diagnostics governed by an [`ErrorPolicy`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
    policy: ErrorPolicy,
}

impl Diagnostics {
    pub fn new(policy: ErrorPolicy) -> Self {
        Self {
            items: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Records a diagnostic and reports whether the caller should stop.
    pub fn push(&mut self, diagnostic: Diagnostic) -> ControlFlow<()> {
        self.items.push(diagnostic);
        self.flow()
    }

    /// Records the diagnostics of one failing unit (a line, a record, a
    /// source). The batch is kept whole; under [`ErrorPolicy::FailFast`]
    /// nothing is added once a diagnostic is already held.
    pub fn extend<I>(&mut self, diagnostics: I) -> ControlFlow<()>
    where
        I: IntoIterator<Item = Diagnostic>,
    {
        self.flow()?;
        self.items.extend(diagnostics);
        self.flow()
    }

    /// Drops everything collected so far and keeps only `diagnostic`.
    pub fn replace_with(&mut self, diagnostic: Diagnostic) {
        self.items.clear();
        self.items.push(diagnostic);
    }

    /// Break once the policy says no more work should be done.
    pub fn flow(&self) -> ControlFlow<()> {
        if self.policy == ErrorPolicy::FailFast && !self.items.is_empty() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    /// Sets `source` on every diagnostic that does not have one yet.
    pub fn tag_source(&mut self, source: &str) {
        for diagnostic in &mut self.items {
            if diagnostic.source.is_none() {
                diagnostic.source = Some(source.to_string());
            }
        }
    }

    /// All-or-nothing: `value` only when nothing was collected.
    pub fn finish<T>(self, value: T) -> Result<T, Diagnostics> {
        if self.items.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }

    /// Rendered messages, one per diagnostic.
    pub fn messages(&self) -> Vec<String> {
        self.items.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, diagnostic) in self.items.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            policy: ErrorPolicy::default(),
        }
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            items: vec![diagnostic],
            policy: ErrorPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diag(message: &str) -> Diagnostic {
        Diagnostic::new(DiagnosticKind::FieldCount, message)
    }

    #[test]
    fn display_prefixes_source_and_line() {
        let bare = diag("boom");
        assert_eq!(bare.to_string(), "boom");
        assert_eq!(bare.clone().at_line(4).to_string(), "4: boom");
        assert_eq!(bare.clone().in_source("a.txt").to_string(), "a.txt: boom");
        assert_eq!(
            bare.at_line(4).in_source("a.txt").to_string(),
            "a.txt:4: boom"
        );
    }

    #[test]
    fn accumulate_keeps_going() {
        let mut diagnostics = Diagnostics::new(ErrorPolicy::Accumulate);
        assert!(diagnostics.push(diag("one")).is_continue());
        assert!(diagnostics.push(diag("two")).is_continue());
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn fail_fast_breaks_on_first() {
        let mut diagnostics = Diagnostics::new(ErrorPolicy::FailFast);
        assert!(diagnostics.flow().is_continue());
        assert!(diagnostics.push(diag("one")).is_break());
        assert!(
            diagnostics
                .extend(vec![diag("two"), diag("three")])
                .is_break()
        );
        assert_eq!(diagnostics.messages(), vec!["one"]);
    }

    #[test]
    fn fail_fast_keeps_first_batch_whole() {
        let mut diagnostics = Diagnostics::new(ErrorPolicy::FailFast);
        assert!(
            diagnostics
                .extend(vec![diag("one"), diag("two")])
                .is_break()
        );
        assert_eq!(diagnostics.messages(), vec!["one", "two"]);
    }

    #[test]
    fn finish_is_all_or_nothing() {
        let clean = Diagnostics::default();
        assert_eq!(clean.finish(vec![1, 2]), Ok(vec![1, 2]));

        let mut dirty = Diagnostics::default();
        let _ = dirty.push(diag("bad"));
        let err = dirty.finish(vec![1, 2]).unwrap_err();
        assert_eq!(err.messages(), vec!["bad"]);
    }

    #[test]
    fn tag_source_keeps_existing() {
        let mut diagnostics = Diagnostics::default();
        let _ = diagnostics.push(diag("a").at_line(1));
        let _ = diagnostics.push(diag("b").in_source("other"));
        diagnostics.tag_source("main.txt");
        assert_eq!(
            diagnostics.to_string(),
            "main.txt:1: a\nother: b"
        );
    }

    #[test]
    fn structural_kinds() {
        assert!(DiagnosticKind::AmbiguousDelimiter.is_structural());
        assert!(DiagnosticKind::NoDelimiter.is_structural());
        assert!(DiagnosticKind::FieldCount.is_structural());
        assert!(!DiagnosticKind::FieldValidation.is_structural());
        assert!(!DiagnosticKind::SourceRead.is_structural());
    }
}
