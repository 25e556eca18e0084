//! Thin stand-in for `TypeFormatter`.
//!
//! The real type-name formatter is out of scope for this crate: it has to
//! reconstruct arbitrary C type spellings (typedef chains, qualifiers,
//! anonymous unions) from a live `ASTContext`. This module covers exactly
//! the `iso_c_binding` mapping the variable-declaration formatter needs and
//! nothing more, flagging `problem = true` for constructs it cannot map
//! (an anonymous struct, or the GNU `_Complex int` extension).

use crate::model::{ComplexWidth, IntWidth, ScalarKind, TypeDescriptor};

/// Returns the `iso_c_binding` spelling of `ty` plus whether this stand-in
/// hit a construct it could not honestly represent.
pub fn fortran_type(ty: &TypeDescriptor) -> (String, bool) {
    match ty {
        TypeDescriptor::Scalar { scalar } => scalar_type(*scalar),
        TypeDescriptor::Pointer { .. } => ("TYPE(C_PTR)".to_string(), false),
        TypeDescriptor::FunctionPointer => ("TYPE(C_FUNPTR)".to_string(), false),
        TypeDescriptor::Array { element, .. } => fortran_type(element),
        TypeDescriptor::Struct { name, .. } => {
            if name.is_empty() {
                ("TYPE(ANONYMOUS)".to_string(), true)
            } else {
                (format!("TYPE({name})"), false)
            }
        }
    }
}

fn scalar_type(scalar: ScalarKind) -> (String, bool) {
    match scalar {
        ScalarKind::Int(width) => (format!("INTEGER({})", int_kind(width)), false),
        ScalarKind::Float => ("REAL(C_FLOAT)".to_string(), false),
        ScalarKind::Double => ("REAL(C_DOUBLE)".to_string(), false),
        ScalarKind::LongDouble => ("REAL(C_LONG_DOUBLE)".to_string(), false),
        ScalarKind::Char => ("CHARACTER(C_CHAR)".to_string(), false),
        ScalarKind::Bool => ("LOGICAL(C_BOOL)".to_string(), false),
        ScalarKind::Complex(ComplexWidth::Float) => ("COMPLEX(C_FLOAT_COMPLEX)".to_string(), false),
        ScalarKind::Complex(ComplexWidth::Double) => ("COMPLEX(C_DOUBLE_COMPLEX)".to_string(), false),
        // _Complex int has no iso_c_binding counterpart; best-effort map, flagged.
        ScalarKind::Complex(ComplexWidth::Int) => ("COMPLEX(C_DOUBLE_COMPLEX)".to_string(), true),
    }
}

fn int_kind(width: IntWidth) -> &'static str {
    match width {
        IntWidth::Short => "C_SHORT",
        IntWidth::Int => "C_INT",
        IntWidth::Long => "C_LONG",
        IntWidth::LongLong => "C_LONG_LONG",
    }
}

/// Identity legalization of a *type* name (as opposed to `NamePolicy`, which
/// legalizes *variable* identifiers). Fortran is case-insensitive but `h2m`
/// preserves source case for readability, so this is a pass-through.
pub fn fortran_id(name: &str) -> String {
    name.to_string()
}
