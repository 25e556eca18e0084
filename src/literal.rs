//! Converts one evaluated AST value into its Fortran literal form.
//!
//! The char-vs-integer decision is keyed on the *declared* element type
//! (`declared_char`), not on which [`EvalKind`] variant the evaluator
//! produced — the front-end hands back an integer code even for a `char`
//! element, so the reinterpretation has to happen here, at the one place
//! every leaf value passes through, rather than at each call site.

use crate::model::EvalKind;

/// The outcome of rendering one evaluated value.
pub enum Rendered {
    /// A valid Fortran literal.
    Literal(String),
    /// The value could not be expressed; the string is a `!`-prefixed
    /// placeholder the caller should fold into its commented-out fallback.
    Unrenderable(String),
}

impl Rendered {
    pub fn into_string(self) -> String {
        match self {
            Rendered::Literal(s) | Rendered::Unrenderable(s) => s,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Rendered::Literal(_))
    }
}

pub fn render(value: &EvalKind, declared_char: bool) -> Rendered {
    if declared_char {
        return match value.as_int_code() {
            Some(code) => Rendered::Literal(char_literal(code)),
            None => Rendered::Unrenderable(format!("!{}", describe(value))),
        };
    }

    match value {
        EvalKind::Int(v) => Rendered::Literal(v.to_string()),
        EvalKind::Char(v) => Rendered::Literal(char_literal(*v)),
        EvalKind::Real(s) => Rendered::Literal(s.clone()),
        EvalKind::ComplexFloat { real, imag } => Rendered::Literal(format!("({real},{imag})")),
        EvalKind::ComplexInt { real, imag } => Rendered::Literal(format!("({real},{imag})")),
        EvalKind::Other(s) => Rendered::Unrenderable(format!("!{s}")),
    }
}

fn char_literal(code: i64) -> String {
    let byte = (code & 0xFF) as u8;
    let ch = byte as char;
    match ch {
        '\'' => "''''".to_string(),
        _ => format!("'{ch}'"),
    }
}

fn describe(value: &EvalKind) -> String {
    match value {
        EvalKind::Int(v) | EvalKind::Char(v) => v.to_string(),
        EvalKind::Real(s) => s.clone(),
        EvalKind::ComplexFloat { real, imag } => format!("({real},{imag})"),
        EvalKind::ComplexInt { real, imag } => format!("({real},{imag})"),
        EvalKind::Other(s) => s.clone(),
    }
}
