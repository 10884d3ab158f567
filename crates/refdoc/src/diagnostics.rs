//! Error types and diagnostics
//!
//! This module provides error handling and diagnostic reporting
//! for the reference page generator.

use thiserror::Error;

/// Result type for refdoc operations
pub type RefDocResult<T> = Result<T, RefDocError>;

/// Main error type for refdoc
#[derive(Debug, Error)]
pub enum RefDocError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Metadata table (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration file could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The class itself carries no documentation
    #[error("Class {type_name} has no documentation")]
    MissingClassDocumentation { type_name: String },

    /// An invocable member whose signature cannot be rendered
    #[error("Cannot render the signature of {type_name}.{member}")]
    UnintrospectableSignature { type_name: String, member: String },

    /// No class table with the requested name
    #[error("Class not found: {0}")]
    ClassNotFound(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl RefDocError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        RefDocError::Config(message.into())
    }

    /// Create a missing class documentation error
    pub fn missing_class_doc(type_name: impl Into<String>) -> Self {
        RefDocError::MissingClassDocumentation {
            type_name: type_name.into(),
        }
    }

    /// Create an unintrospectable signature error
    pub fn signature(type_name: impl Into<String>, member: impl Into<String>) -> Self {
        RefDocError::UnintrospectableSignature {
            type_name: type_name.into(),
            member: member.into(),
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        RefDocError::Other(message.into())
    }
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    /// Error - prevents doc generation
    Error,
    /// Warning - doc generation continues
    Warning,
    /// Info - informational message
    Info,
}

impl DiagnosticSeverity {
    /// Get display string
    pub fn display(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Info => "info",
        }
    }
}

/// Diagnostic codes for the non-fatal outcomes of a member walk
pub mod codes {
    /// Member skipped: no documentation
    pub const MISSING_DOC: &str = "missing-doc";
    /// Property emitted without a type suffix
    pub const NO_TYPE_ANNOTATION: &str = "no-type-annotation";
    /// Member skipped: name carries the private marker
    pub const PRIVATE_MEMBER: &str = "private-member";
    /// Member skipped: signature could not be rendered
    pub const NO_SIGNATURE: &str = "no-signature";
    /// Class block emitted without a body
    pub const MISSING_CLASS_DOC: &str = "missing-class-doc";
}

/// A diagnostic message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Message
    pub message: String,
    /// Qualified member the diagnostic is about (`Type.member`)
    pub member: Option<String>,
    /// Diagnostic code (for categorization)
    pub code: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(severity: DiagnosticSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            member: None,
            code: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Error, message)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Warning, message)
    }

    /// Create an info diagnostic
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Info, message)
    }

    /// Set the member
    pub fn on_member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Format the diagnostic for display
    pub fn format(&self) -> String {
        let mut result = String::new();

        if let Some(ref member) = self.member {
            result.push_str(member);
            result.push_str(": ");
        }

        result.push_str(self.severity.display());

        if let Some(ref code) = self.code {
            result.push('[');
            result.push_str(code);
            result.push(']');
        }

        result.push_str(": ");
        result.push_str(&self.message);

        result
    }

    /// Emit the diagnostic as a tracing event
    pub fn log(&self) {
        match self.severity {
            DiagnosticSeverity::Error => tracing::error!("{}", self.format()),
            DiagnosticSeverity::Warning => tracing::warn!("{}", self.format()),
            DiagnosticSeverity::Info => tracing::debug!("{}", self.format()),
        }
    }
}

/// Collector for diagnostics during doc generation
#[derive(Debug, Default, Clone)]
pub struct DiagnosticsCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticsCollector {
    /// Create a new collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic, logging it as it arrives
    pub fn add(&mut self, diagnostic: Diagnostic) {
        diagnostic.log();
        self.diagnostics.push(diagnostic);
    }

    /// Add a warning
    pub fn warning(&mut self, message: impl Into<String>) {
        self.add(Diagnostic::warning(message));
    }

    /// Add an info message
    pub fn info(&mut self, message: impl Into<String>) {
        self.add(Diagnostic::info(message));
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == DiagnosticSeverity::Error)
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics carrying the given code
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.diagnostics
            .iter()
            .filter(move |d| d.code.as_deref() == Some(code))
    }

    /// Get warning count
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Warning)
            .count()
    }

    /// Take ownership of the diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refdoc_error() {
        let err = RefDocError::signature("VolumeSlicer", "refresh");
        assert_eq!(
            err.to_string(),
            "Cannot render the signature of VolumeSlicer.refresh"
        );

        let err = RefDocError::missing_class_doc("VolumeSlicer");
        assert!(err.to_string().contains("VolumeSlicer"));
    }

    #[test]
    fn test_diagnostic() {
        let diag = Diagnostic::warning("no signature")
            .on_member("VolumeSlicer.refresh")
            .with_code(codes::NO_SIGNATURE);

        assert_eq!(diag.severity, DiagnosticSeverity::Warning);
        assert_eq!(
            diag.format(),
            "VolumeSlicer.refresh: warning[no-signature]: no signature"
        );
    }

    #[test]
    fn test_diagnostics_collector() {
        let mut collector = DiagnosticsCollector::new();
        collector.warning("warning 1");
        collector.info("info 1");
        collector.add(Diagnostic::info("skipped").with_code(codes::MISSING_DOC));

        assert!(!collector.has_errors());
        assert_eq!(collector.warning_count(), 1);
        assert_eq!(collector.with_code(codes::MISSING_DOC).count(), 1);
        assert_eq!(collector.diagnostics().len(), 3);
    }
}
