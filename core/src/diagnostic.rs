//! Diagnostic types.
//!
//! Checks never abort a round: every finding becomes a `Diagnostic` and the
//! host decides what to do with the accumulated collection.

use crate::SourceLoc;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Build-breaking finding.
    Error,
    /// Suspicious but not build-breaking.
    Warning,
    /// Informational notice.
    Note,
}

/// A single finding, attributed to a program element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The severity of the finding.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Dotted path of the attributed declaration, if any.
    pub origin: Option<String>,
    /// Source location of the attributed declaration, if known.
    pub loc: Option<SourceLoc>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            origin: None,
            loc: None,
        }
    }

    /// Create an error-level diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning-level diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create a note-level diagnostic.
    pub fn note(message: impl Into<String>) -> Self {
        Self::new(Severity::Note, message)
    }

    /// Attribute this diagnostic to a declaration by dotted path.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Attach a source location.
    pub fn with_loc(mut self, loc: SourceLoc) -> Self {
        self.loc = Some(loc);
        self
    }

    /// Check if this is an error-level diagnostic.
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

/// A sink for emitted diagnostics, owned by the host.
pub trait DiagnosticSink {
    /// Record one diagnostic.
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Accumulating collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if there are any diagnostics.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get the number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if there are any error-level diagnostics.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error())
    }

    /// Get all diagnostics.
    pub fn all(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get error-level diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Merge another collection into this one.
    pub fn merge(&mut self, other: Diagnostics) {
        self.diagnostics.extend(other.diagnostics);
    }
}

impl DiagnosticSink for Diagnostics {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_creation() {
        // GIVEN/WHEN
        let diagnostic = Diagnostic::error("Invalid accessor name")
            .with_origin("com.example.Invalid.notGetter");

        // THEN
        assert!(diagnostic.is_error());
        assert_eq!(
            diagnostic.origin.as_deref(),
            Some("com.example.Invalid.notGetter")
        );
    }

    #[test]
    fn test_diagnostics_has_errors() {
        // GIVEN
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::note("Failed to load service provider"));

        // THEN - only a note
        assert!(!diagnostics.has_errors());

        // WHEN - add an error
        diagnostics.push(Diagnostic::error("Invalid return type"));

        // THEN
        assert!(diagnostics.has_errors());
        assert_eq!(diagnostics.errors().count(), 1);
    }

    #[test]
    fn test_merge_preserves_order() {
        // GIVEN
        let mut first = Diagnostics::new();
        first.push(Diagnostic::error("a"));
        let mut second = Diagnostics::new();
        second.push(Diagnostic::error("b"));

        // WHEN
        first.merge(second);

        // THEN
        let messages: Vec<_> = first.all().iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["a", "b"]);
    }
}
