//! Source-text extraction, the "lexer view" collaborator.
//!
//! The real `h2m` asks Clang's `Lexer` for the literal text of a token
//! range; here a [`SourceBuffer`] slices the manifest-supplied source text by
//! byte offset instead. When no source text was supplied at all (a manifest
//! built by hand, or a fuzzed/unit-test fixture), [`describe_init`] produces
//! a best-effort textual rendering of an initializer so commented-out
//! fallbacks still carry *something* recognizable rather than an empty
//! string.

use crate::model::{EvalKind, InitExpr, SourceRange};

pub struct SourceBuffer {
    text: String,
}

impl SourceBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        SourceBuffer { text: text.into() }
    }

    /// Returns the literal source text for `range`, clamped to the buffer's
    /// bounds so a manifest with slightly-off offsets never panics.
    pub fn source_text(&self, range: SourceRange) -> &str {
        let begin = range.begin.min(self.text.len());
        let end = range.end.min(self.text.len()).max(begin);
        // Clamp to char boundaries so a misaligned byte offset never panics.
        let mut begin = begin;
        while begin < self.text.len() && !self.text.is_char_boundary(begin) {
            begin += 1;
        }
        let mut end = end;
        while end < self.text.len() && !self.text.is_char_boundary(end) {
            end += 1;
        }
        &self.text[begin..end]
    }
}

/// Quote `init`'s original source text for a commented-out fallback: the
/// literal text from `buffer` at `range` when both are available, falling
/// back to [`describe_init`]'s structured reconstruction otherwise (a
/// hand-built manifest, or one with no `init_range` recorded, still gets a
/// readable placeholder instead of an empty string).
///
/// `range` must be the declaration's `init_range` — initializer-only
/// quoting — never its whole-declaration `source_range`; slicing the wrong
/// one corrupts column alignment in the commented-out output (SPEC_FULL.md
/// §9, "Source-text fallback").
pub fn quote_init(buffer: Option<&SourceBuffer>, range: Option<SourceRange>, init: &InitExpr) -> String {
    match (buffer, range) {
        (Some(buffer), Some(range)) => buffer.source_text(range).to_string(),
        _ => describe_init(init),
    }
}

/// A best-effort textual description of an initializer, used when no source
/// buffer is available to slice the original text.
pub fn describe_init(init: &InitExpr) -> String {
    match init {
        InitExpr::Evaluatable { value: EvalKind::Int(v) } => v.to_string(),
        InitExpr::Evaluatable { value: EvalKind::Char(v) } => v.to_string(),
        InitExpr::Evaluatable { value: EvalKind::Real(s) } => s.clone(),
        InitExpr::Evaluatable { value: EvalKind::ComplexFloat { real, imag } } => format!("{real} + {imag}i"),
        InitExpr::Evaluatable { value: EvalKind::ComplexInt { real, imag } } => format!("{real} + {imag}i"),
        InitExpr::Evaluatable { value: EvalKind::Other(s) } => s.clone(),
        InitExpr::StringLiteral { bytes } => format!("\"{bytes}\""),
        InitExpr::AggregateList { .. } => "{ ... }".to_string(),
        InitExpr::Other { source_text } => source_text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_by_byte_offset() {
        let buffer = SourceBuffer::new("int n = 42;");
        assert_eq!(buffer.source_text(SourceRange { begin: 8, end: 10 }), "42");
    }

    #[test]
    fn clamps_out_of_range_offsets() {
        let buffer = SourceBuffer::new("short");
        assert_eq!(buffer.source_text(SourceRange { begin: 2, end: 999 }), "ort");
    }

    #[test]
    fn describes_a_plain_int() {
        assert_eq!(describe_init(&InitExpr::Evaluatable { value: EvalKind::Int(0) }), "0");
    }

    #[test]
    fn quote_init_prefers_literal_source_text_when_available() {
        let buffer = SourceBuffer::new("int n = some_call();");
        let range = SourceRange { begin: 8, end: 20 };
        let init = InitExpr::Other { source_text: "some_call()".to_string() };
        assert_eq!(quote_init(Some(&buffer), Some(range), &init), "some_call()");
    }

    #[test]
    fn quote_init_falls_back_without_a_range() {
        let init = InitExpr::Other { source_text: "some_call()".to_string() };
        assert_eq!(quote_init(None, None, &init), "some_call()");
    }
}
