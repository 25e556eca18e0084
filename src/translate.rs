//! Driver orchestration: turns a deserialized [`Program`] into one Fortran
//! module's worth of `BIND(C)` declarations.
//!
//! A library entry point that does the real work and returns a structured
//! result, with the CLI layer in `main.rs` only responsible for reading
//! arguments and printing the outcome.

use serde::Serialize;

use crate::config::TranslatorConfig;
use crate::decl;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::lexer_view::SourceBuffer;
use crate::model::Program;
use crate::registry::NameRegistry;

/// Result of translating one [`Program`]: the assembled Fortran module text
/// plus every diagnostic raised along the way.
pub struct TranslationOutput {
    pub fortran: String,
    pub diagnostics: Vec<Diagnostic>,
    pub emitted_count: usize,
    pub commented_count: usize,
}

impl TranslationOutput {
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.severity == crate::diagnostics::Severity::Error).count()
    }

    /// A machine-readable summary suitable for `--summary-json` output,
    /// independent of the Fortran text itself.
    pub fn summary(&self) -> TranslationSummary {
        TranslationSummary {
            emitted: self.emitted_count,
            commented: self.commented_count,
            diagnostics: self.diagnostics.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TranslationSummary {
    pub emitted: usize,
    pub commented: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Translate every declaration in `program`, wrapping the result in a
/// Fortran `MODULE ... END MODULE` block named `module_name` with
/// `iso_c_binding` already in scope, as every emitted line assumes.
pub fn translate_program(program: &Program, module_name: &str, config: &TranslatorConfig) -> TranslationOutput {
    let mut registry = NameRegistry::new();
    let mut diagnostics = Diagnostics::new(config);
    let mut emitted_count = 0;
    let mut commented_count = 0;
    let mut lines = Vec::new();

    // Present only when the manifest carried the translation unit's full
    // source text; untranslatable initializers are then quoted verbatim
    // instead of via `describe_init`'s structured reconstruction.
    let source_buffer = program.source.as_ref().map(|text| SourceBuffer::new(text.clone()));

    for declaration in &program.declarations {
        let emission =
            decl::emit_with_source(declaration, config, &mut registry, &mut diagnostics, source_buffer.as_ref());
        if emission.text.is_empty() {
            continue;
        }
        if emission.commented {
            commented_count += 1;
        } else {
            emitted_count += 1;
        }
        lines.push(emission.text);
    }

    let mut fortran = String::new();
    fortran.push_str(&format!("MODULE {module_name}\n"));
    fortran.push_str("  USE, INTRINSIC :: ISO_C_BINDING\n");
    fortran.push_str("  IMPLICIT NONE\n");
    for line in &lines {
        for raw in line.split('\n') {
            fortran.push_str("  ");
            fortran.push_str(raw);
            fortran.push('\n');
        }
    }
    fortran.push_str(&format!("END MODULE {module_name}\n"));

    TranslationOutput { fortran, diagnostics: diagnostics.collected().to_vec(), emitted_count, commented_count }
}
