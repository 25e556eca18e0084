//! Uniform warning/error surface, filtered by the `silent`/`quiet` levels.
//!
//! Every diagnostic carries the `(file, line, column)` of the declaration it
//! concerns. Diagnostics are both traced (via `tracing`, matching this
//! family's LSP crate) and collected so a driver can print a final summary
//! or serialize them alongside the emitted Fortran text.

use serde::Serialize;

use crate::config::TranslatorConfig;
use crate::model::SourceLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Default,
    Quiet,
    Silent,
}

/// Collects diagnostics for one translation run while also tracing them.
pub struct Diagnostics {
    verbosity: Verbosity,
    collected: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new(config: &TranslatorConfig) -> Self {
        let verbosity = if config.silent {
            Verbosity::Silent
        } else if config.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Default
        };
        Diagnostics { verbosity, collected: Vec::new() }
    }

    /// An informational warning. Suppressed by `quiet` and `silent`.
    pub fn warn(&mut self, location: &SourceLocation, message: impl Into<String>) {
        if self.verbosity == Verbosity::Quiet || self.verbosity == Verbosity::Silent {
            return;
        }
        let message = message.into();
        tracing::warn!(file = %location.file, line = location.line, column = location.column, "{message}");
        self.collected.push(Diagnostic { severity: Severity::Warning, message, location: location.clone() });
    }

    /// An error. Suppressed only by `silent`.
    pub fn error(&mut self, location: &SourceLocation, message: impl Into<String>) {
        if self.verbosity == Verbosity::Silent {
            return;
        }
        let message = message.into();
        tracing::error!(file = %location.file, line = location.line, column = location.column, "{message}");
        self.collected.push(Diagnostic { severity: Severity::Error, message, location: location.clone() });
    }

    /// A front-end contract violation (a null expression node). Reported
    /// unconditionally, even under `silent`, because it indicates the AST
    /// provider itself is broken.
    pub fn contract_violation(&mut self, location: &SourceLocation, message: impl Into<String>) {
        let message = message.into();
        tracing::error!(file = %location.file, line = location.line, column = location.column, "{message}");
        self.collected.push(Diagnostic { severity: Severity::Error, message, location: location.clone() });
    }

    pub fn collected(&self) -> &[Diagnostic] {
        &self.collected
    }

    pub fn error_count(&self) -> usize {
        self.collected.iter().filter(|d| d.severity == Severity::Error).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc() -> SourceLocation {
        SourceLocation { file: "foo.h".into(), line: 3, column: 1 }
    }

    #[test]
    fn quiet_suppresses_warnings_not_errors() {
        let mut diags = Diagnostics::new(&TranslatorConfig { quiet: true, ..Default::default() });
        diags.warn(&loc(), "a warning");
        diags.error(&loc(), "an error");
        assert_eq!(diags.collected().len(), 1);
        assert_eq!(diags.collected()[0].severity, Severity::Error);
    }

    #[test]
    fn silent_suppresses_everything_but_contract_violations() {
        let mut diags = Diagnostics::new(&TranslatorConfig { silent: true, ..Default::default() });
        diags.warn(&loc(), "a warning");
        diags.error(&loc(), "an error");
        diags.contract_violation(&loc(), "null node");
        assert_eq!(diags.collected().len(), 1);
        assert_eq!(diags.collected()[0].message, "null node");
    }
}
