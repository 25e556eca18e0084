//! Data model for the C declaration view the core formatter consumes.
//!
//! In a production `h2m` this view would be backed by libclang. Here it is
//! populated by deserializing a declaration manifest (JSON or TOML) — see
//! [`crate::manifest`] — so the renderer modules can be exercised and tested
//! without linking against a C front-end. The accessor methods below mirror
//! the AST provider interface the core was designed against, so porting this
//! crate onto a real libclang binding means replacing this module only.

use serde::{Deserialize, Serialize};

/// A byte-offset range into a [`crate::lexer_view::SourceBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SourceRange {
    pub begin: usize,
    pub end: usize,
}

/// A presumed (file, line, column) location, the same shape Clang's
/// `PresumedLoc` exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn unknown() -> Self {
        SourceLocation { file: String::from("<unknown>"), line: 0, column: 0 }
    }
}

/// Width of a C integer scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntWidth {
    Short,
    Int,
    Long,
    LongLong,
}

/// Component width of a C `_Complex` scalar. `Int` is a GNU extension with no
/// `iso_c_binding` counterpart; the type formatter flags it as a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexWidth {
    Float,
    Double,
    Int,
}

/// A non-aggregate, non-pointer C type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Int(IntWidth),
    Float,
    Double,
    LongDouble,
    Char,
    Bool,
    Complex(ComplexWidth),
}

impl ScalarKind {
    pub fn is_char(self) -> bool {
        matches!(self, ScalarKind::Char)
    }
}

/// One field of a struct type.
#[derive(Debug, Clone, Deserialize)]
pub struct StructField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

/// The declared type of a variable or struct field.
///
/// This stands in for Clang's `QualType`/`Type` pair, reduced to the
/// predicates and accessors the formatter actually consults (`is_structure`,
/// `is_char`, `is_pointer`, `element_type`, `as_array_unsafe`, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDescriptor {
    Scalar { scalar: ScalarKind },
    Pointer { pointee: Box<TypeDescriptor> },
    FunctionPointer,
    Array { element: Box<TypeDescriptor>, extents: Vec<usize> },
    Struct { name: String, fields: Vec<StructField> },
}

impl TypeDescriptor {
    pub fn is_structure(&self) -> bool {
        matches!(self, TypeDescriptor::Struct { .. })
    }

    pub fn is_char(&self) -> bool {
        matches!(self, TypeDescriptor::Scalar { scalar } if scalar.is_char())
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, TypeDescriptor::Scalar { scalar: ScalarKind::Int(_) | ScalarKind::Bool })
    }

    pub fn is_real(&self) -> bool {
        matches!(
            self,
            TypeDescriptor::Scalar { scalar: ScalarKind::Float | ScalarKind::Double | ScalarKind::LongDouble }
        )
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, TypeDescriptor::Scalar { scalar: ScalarKind::Complex(_) })
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, TypeDescriptor::Pointer { .. })
    }

    pub fn is_function_pointer(&self) -> bool {
        matches!(self, TypeDescriptor::FunctionPointer)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeDescriptor::Array { .. })
    }

    pub fn pointee_type(&self) -> Option<&TypeDescriptor> {
        match self {
            TypeDescriptor::Pointer { pointee } => Some(pointee),
            _ => None,
        }
    }

    pub fn element_type(&self) -> Option<&TypeDescriptor> {
        match self {
            TypeDescriptor::Array { element, .. } => Some(element),
            _ => None,
        }
    }

    /// The innermost non-array element type, descending through nested arrays.
    pub fn base_element_type(&self) -> &TypeDescriptor {
        match self {
            TypeDescriptor::Array { element, .. } => element.base_element_type(),
            other => other,
        }
    }

    /// Panics if `self` is not an array; mirrors the AST provider's
    /// `as_array_unsafe`, which callers only invoke after checking `is_array`.
    pub fn as_array_unsafe(&self) -> (&[usize], &TypeDescriptor) {
        match self {
            TypeDescriptor::Array { element, extents } => (extents, element),
            _ => panic!("as_array_unsafe called on a non-array TypeDescriptor"),
        }
    }
}

/// An evaluated compile-time C rvalue, folded by the (absent) front-end.
///
/// `Int`/`Char` carry the raw integer code rather than a pre-formatted
/// string: the char-vs-integer decision depends on the *declared* element
/// type, not on which of these two variants the evaluator produced, so
/// [`crate::literal::render`] needs the numeric value regardless.
///
/// Externally tagged (the default serde representation, e.g. `{"int": 5}`)
/// rather than internally tagged: a couple of variants wrap a bare scalar,
/// and internal tagging only supports newtype variants whose payload is
/// itself a map. [`InitExpr::Evaluatable`] nests one of these as a named
/// field instead of flattening it, so the two taggings compose cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalKind {
    Int(i64),
    Char(i64),
    /// The front-end's canonical decimal/hex-float string, passed through unchanged.
    Real(String),
    ComplexFloat { real: String, imag: String },
    ComplexInt { real: i64, imag: i64 },
    /// Anything the evaluator could not classify into the above.
    Other(String),
}

impl EvalKind {
    /// The raw integer code, for `Int`/`Char` values only.
    pub fn as_int_code(&self) -> Option<i64> {
        match self {
            EvalKind::Int(v) | EvalKind::Char(v) => Some(*v),
            _ => None,
        }
    }
}

/// A C initializer expression, already classified by the (absent) front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum InitExpr {
    Evaluatable { value: EvalKind },
    StringLiteral { bytes: String },
    AggregateList { elements: Vec<InitExpr> },
    /// Preserved verbatim for commenting out; `source_text` is whatever the
    /// lexer view would have returned for this expression's range.
    Other { source_text: String },
}

/// One C variable declaration, read-only for the duration of translation.
#[derive(Debug, Clone, Deserialize)]
pub struct VariableDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    #[serde(default)]
    pub initializer: Option<InitExpr>,
    #[serde(default)]
    pub source_range: Option<SourceRange>,
    /// `(init_expr_begin, decl_range_end)`, used only when initializer
    /// rendering fails and the original source text must be quoted without
    /// the leading type/name tokens.
    #[serde(default)]
    pub init_range: Option<SourceRange>,
    #[serde(default = "SourceLocation::unknown")]
    pub source_location: SourceLocation,
    #[serde(default)]
    pub is_in_system_header: bool,
}

impl VariableDeclaration {
    pub fn has_initializer(&self) -> bool {
        self.initializer.is_some()
    }

    pub fn initializer(&self) -> Option<&InitExpr> {
        self.initializer.as_ref()
    }
}

/// A full translation unit's worth of declarations, the top-level shape of
/// a declaration manifest.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Program {
    /// Full original source text, sliced by [`SourceRange`]s above. Absent
    /// manifests fall back to [`crate::lexer_view::describe_init`].
    #[serde(default)]
    pub source: Option<String>,
    pub declarations: Vec<VariableDeclaration>,
}
