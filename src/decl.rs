//! Top-level declaration emitter: combines every other component's output
//! into one Fortran `BIND(C)` declaration, then decides whether the whole
//! thing has to be commented out.
//!
//! The commenting policy is all-or-nothing: once any reason to comment a
//! declaration applies, every line of it is prefixed with `! `, including
//! lines a successful sibling renderer already produced. A declaration is
//! never partially commented.

use crate::array;
use crate::config::TranslatorConfig;
use crate::diagnostics::Diagnostics;
use crate::lexer_view::{self, SourceBuffer};
use crate::literal::{self, Rendered};
use crate::model::{InitExpr, SourceLocation, TypeDescriptor, VariableDeclaration};
use crate::name::{self, LegalName};
use crate::pointer;
use crate::registry::NameRegistry;
use crate::struct_render;
use crate::type_format;

/// The rendered form of one declaration, plus whether it ended up commented
/// out. `text` may span several lines (continuations, or the one-note-per-line
/// comment header) joined with `\n`; it never carries a trailing newline.
///
/// A declaration from a system header never reaches the commenting machinery
/// at all: `text` is the empty string and `commented` is `false` — it is
/// absent from the output, not a visible but disabled line.
pub struct Emission {
    pub text: String,
    pub commented: bool,
}

impl Emission {
    fn absent() -> Self {
        Emission { text: String::new(), commented: false }
    }
}

/// Render `decl` to a `BIND(C)` declaration, registering its (possibly
/// renamed) identifier in `registry` and routing every sub-component's
/// warnings through `diags`.
pub fn emit(
    decl: &VariableDeclaration,
    config: &TranslatorConfig,
    registry: &mut NameRegistry,
    diags: &mut Diagnostics,
) -> Emission {
    emit_with_source(decl, config, registry, diags, None)
}

/// Like [`emit`], but quotes untranslatable initializers from `source`'s
/// literal text (via `decl.init_range`) when it's supplied, instead of the
/// structured best-effort reconstruction `describe_init` falls back to.
pub fn emit_with_source(
    decl: &VariableDeclaration,
    config: &TranslatorConfig,
    registry: &mut NameRegistry,
    diags: &mut Diagnostics,
    source: Option<&SourceBuffer>,
) -> Emission {
    if decl.is_in_system_header {
        return Emission::absent();
    }

    let location = &decl.source_location;
    let (ftype, type_problem) = type_format::fortran_type(&decl.ty);
    let legal = name::legalize(&decl.name, config.autobind, diags, location);

    let duplicate = !registry.register(&legal.identifier);
    if duplicate {
        diags.warn(location, format!("identifier '{}' declared more than once", legal.identifier));
    }

    let (core, body_ok) = render_body(decl, &ftype, &legal, config, diags, location, source);

    let mut reasons = Vec::new();
    if duplicate {
        reasons.push("Commenting out name conflict.".to_string());
    }
    if !body_ok {
        reasons.push("Commenting out untranslatable initializer.".to_string());
    }
    if type_problem && config.detect_invalid {
        reasons.push("Commenting out invalid type.".to_string());
    }

    if reasons.is_empty() {
        let lines: Vec<String> = core.lines().map(str::to_string).collect();
        name::check_length(&legal.identifier, &lines, diags, location);
        Emission { text: core, commented: false }
    } else {
        Emission { text: comment_pass(&core, &reasons), commented: true }
    }
}

/// `public, BIND(C<bind>)` — the attribute clause for every non-`parameter`
/// declaration (rule §3.4: `parameter` and `BIND(C)` are mutually exclusive).
fn public_bind(legal: &LegalName) -> String {
    format!("public, BIND(C{})", legal.bind_fragment())
}

/// `BIND(C<bind>)` with no `public` — the braced-array-initializer row in
/// §4.6 is the one emission shape that carries `BIND(C)` without `public`.
fn bind_only(legal: &LegalName) -> String {
    format!("BIND(C{})", legal.bind_fragment())
}

/// `parameter, public`, never combined with `BIND(C)`.
const PARAMETER_PUBLIC: &str = "parameter, public";

fn render_body(
    decl: &VariableDeclaration,
    ftype: &str,
    legal: &LegalName,
    config: &TranslatorConfig,
    diags: &mut Diagnostics,
    location: &SourceLocation,
    source: Option<&SourceBuffer>,
) -> (String, bool) {
    let id = type_format::fortran_id(&legal.identifier);
    let quote = |init: &InitExpr| lexer_view::quote_init(source, decl.init_range, init);

    match (&decl.ty, decl.initializer()) {
        (TypeDescriptor::Struct { .. }, Some(init @ InitExpr::AggregateList { .. })) => {
            let result = struct_render::render(&decl.ty, init, config, diags, location);
            (format!("{ftype}, {} :: {id} = {}", public_bind(legal), result.text), result.success)
        }
        (TypeDescriptor::Struct { .. }, None) => (format!("{ftype}, {} :: {id}", public_bind(legal)), true),
        (TypeDescriptor::Struct { .. }, Some(other)) => {
            diags.warn(location, "struct initializer is not a brace-enclosed aggregate");
            (
                format!(
                    "{ftype}, {} :: {id} ! untranslatable component: {}",
                    public_bind(legal),
                    quote(other)
                ),
                false,
            )
        }

        (TypeDescriptor::Array { extents, .. }, None) => {
            let dims = dimension_list(extents, config.array_transpose);
            (format!("{ftype}, {} :: {id}({dims})", public_bind(legal)), true)
        }
        (TypeDescriptor::Array { element, .. }, Some(InitExpr::StringLiteral { bytes })) if element.is_char() => {
            (format!("{ftype}, {PARAMETER_PUBLIC} :: {id} = \"{bytes}\""), true)
        }
        (TypeDescriptor::Array { element, extents }, Some(init @ InitExpr::AggregateList { .. })) => {
            let flattened = array::flatten(init, element, config.array_transpose, diags, location);
            if flattened.success {
                let dims = flattened.shape.iter().map(usize::to_string).collect::<Vec<_>>().join(", ");
                (
                    format!(
                        "{ftype}, {} :: {id}({dims}) = RESHAPE((/{}/), (/{dims}/))",
                        bind_only(legal),
                        flattened.values.join(", ")
                    ),
                    true,
                )
            } else {
                let dims = dimension_list(extents, config.array_transpose);
                (
                    format!(
                        "{ftype}, {} :: {id}({dims}) ! UntranslatableArray: {}",
                        public_bind(legal),
                        quote(init)
                    ),
                    false,
                )
            }
        }
        (TypeDescriptor::Array { extents, .. }, Some(other)) => {
            diags.warn(location, "array initializer is neither a brace list nor a matching string literal");
            let dims = dimension_list(extents, config.array_transpose);
            (
                format!(
                    "{ftype}, {} :: {id}({dims}) ! UntranslatableArray: {}",
                    public_bind(legal),
                    quote(other)
                ),
                false,
            )
        }

        (TypeDescriptor::Pointer { .. }, None) => (format!("{ftype}, {} :: {id}", public_bind(legal)), true),
        (TypeDescriptor::Pointer { pointee }, Some(InitExpr::StringLiteral { bytes })) if pointee.is_char() => {
            (format!("{ftype}, {PARAMETER_PUBLIC} :: {id} = \"{bytes}\""), true)
        }
        (TypeDescriptor::Pointer { pointee }, Some(init)) => {
            let orig = quote(init);
            let class = pointer::classify(pointee.is_char(), false, init, &orig, diags, location);
            (format!("{ftype}, {} :: {id} = {}", public_bind(legal), class.rendered()), true)
        }

        (TypeDescriptor::FunctionPointer, None) => (format!("{ftype}, {} :: {id}", public_bind(legal)), true),
        (TypeDescriptor::FunctionPointer, Some(init)) => {
            let orig = quote(init);
            let class = pointer::classify(false, true, init, &orig, diags, location);
            (format!("{ftype}, {} :: {id} = {}", public_bind(legal), class.rendered()), true)
        }

        (TypeDescriptor::Scalar { .. }, None) => (format!("{ftype}, {} :: {id}", public_bind(legal)), true),
        (TypeDescriptor::Scalar { scalar }, Some(InitExpr::Evaluatable { value: kind })) => {
            match literal::render(kind, scalar.is_char()) {
                Rendered::Literal(s) => (format!("{ftype}, {PARAMETER_PUBLIC} :: {id} = {s}"), true),
                Rendered::Unrenderable(s) => {
                    diags.warn(location, "scalar initializer could not be rendered");
                    // The declaration itself is still valid without a value;
                    // the placeholder (already `!`-prefixed) rides along as a
                    // trailing comment rather than sinking the whole line.
                    (format!("{ftype}, {} :: {id} {s}", public_bind(legal)), true)
                }
            }
        }
        (TypeDescriptor::Scalar { .. }, Some(other)) => {
            diags.warn(location, "scalar initializer is not an evaluated constant");
            (
                format!(
                    "{ftype}, {} :: {id} ! untranslatable component: {}",
                    public_bind(legal),
                    quote(other)
                ),
                false,
            )
        }
    }
}

fn dimension_list(extents: &[usize], transpose: bool) -> String {
    let mut dims: Vec<usize> = extents.to_vec();
    if transpose {
        dims.reverse();
    }
    dims.iter().map(usize::to_string).collect::<Vec<_>>().join(", ")
}

fn comment_pass(core: &str, reasons: &[String]) -> String {
    let mut lines: Vec<String> = reasons.iter().map(|r| format!("! {r}")).collect();
    lines.extend(core.lines().map(|line| format!("! {line}")));
    lines.join("\n")
}
