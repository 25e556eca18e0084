//! Decides the Fortran replacement for a pointer-valued initializer.
//!
//! | Pointee | Initializer form | Emit |
//! |---|---|---|
//! | `char` | string literal | `"<contents>"` |
//! | function type | anything else | `C_NULL_FUNPTR` + comment |
//! | any other | anything else | `C_NULL_PTR` + comment |
//!
//! Exhaustive by construction: every branch below returns one of the three
//! [`PointerClass`] variants, so a caller never has to handle "none of the
//! above".

use crate::diagnostics::Diagnostics;
use crate::model::{InitExpr, SourceLocation};

pub enum PointerClass {
    StringLiteral(String),
    NullFunPtr(String),
    NullPtr(String),
}

impl PointerClass {
    /// The text to splice in place of the initializer. For the null cases
    /// this embeds a Fortran continuation (`&`) followed by an inline
    /// comment naming the original value, then the sentinel on its own line
    /// — the shape a caller joins into a single multi-line declaration.
    pub fn rendered(&self) -> String {
        match self {
            PointerClass::StringLiteral(s) => format!("\"{s}\""),
            PointerClass::NullFunPtr(orig) => {
                format!("& ! Function pointer {orig} set to C_NULL_FUNPTR\nC_NULL_FUNPTR")
            }
            PointerClass::NullPtr(orig) => format!("& ! Pointer {orig} set to C_NULL_PTR\nC_NULL_PTR"),
        }
    }
}

/// Classify a pointer-typed initializer and warn about every non-string
/// replacement (the string-literal case is a faithful translation, nothing
/// to warn about).
pub fn classify(
    pointee_is_char: bool,
    pointee_is_function: bool,
    init: &InitExpr,
    orig_text: &str,
    diags: &mut Diagnostics,
    location: &SourceLocation,
) -> PointerClass {
    if pointee_is_char
        && let InitExpr::StringLiteral { bytes } = init
    {
        return PointerClass::StringLiteral(bytes.clone());
    }

    if pointee_is_function {
        diags.warn(location, format!("pointer value {orig_text} set to C_NULL_FUNPTR"));
        PointerClass::NullFunPtr(orig_text.to_string())
    } else {
        diags.warn(location, format!("pointer value {orig_text} set to C_NULL_PTR"));
        PointerClass::NullPtr(orig_text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslatorConfig;
    use crate::model::EvalKind;

    fn loc() -> SourceLocation {
        SourceLocation::unknown()
    }

    #[test]
    fn char_pointee_with_string_literal() {
        let mut diags = Diagnostics::new(&TranslatorConfig::default());
        let init = InitExpr::StringLiteral { bytes: "hi".into() };
        let class = classify(true, false, &init, "\"hi\"", &mut diags, &loc());
        assert_eq!(class.rendered(), "\"hi\"");
        assert!(diags.collected().is_empty());
    }

    #[test]
    fn char_pointee_with_non_string_falls_to_null_ptr() {
        let mut diags = Diagnostics::new(&TranslatorConfig::default());
        let init = InitExpr::Evaluatable { value: EvalKind::Int(0) };
        let class = classify(true, false, &init, "0", &mut diags, &loc());
        assert_eq!(class.rendered(), "& ! Pointer 0 set to C_NULL_PTR\nC_NULL_PTR");
        assert_eq!(diags.collected().len(), 1);
    }

    #[test]
    fn function_pointee_always_null_funptr() {
        let mut diags = Diagnostics::new(&TranslatorConfig::default());
        let init = InitExpr::Evaluatable { value: EvalKind::Int(0) };
        let class = classify(false, true, &init, "0", &mut diags, &loc());
        assert_eq!(class.rendered(), "& ! Function pointer 0 set to C_NULL_FUNPTR\nC_NULL_FUNPTR");
    }

    #[test]
    fn other_pointee_always_null_ptr() {
        let mut diags = Diagnostics::new(&TranslatorConfig::default());
        let init = InitExpr::Evaluatable { value: EvalKind::Int(7) };
        let class = classify(false, false, &init, "7", &mut diags, &loc());
        assert_eq!(class.rendered(), "& ! Pointer 7 set to C_NULL_PTR\nC_NULL_PTR");
    }
}
