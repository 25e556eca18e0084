//! Recursively renders the initializer of a struct-typed variable as
//! `<StructName>(field1, field2, …)`, delegating array/struct/pointer
//! fields to their own renderers.

use crate::array::{self};
use crate::config::TranslatorConfig;
use crate::diagnostics::Diagnostics;
use crate::lexer_view::describe_init;
use crate::literal::{self, Rendered};
use crate::model::{InitExpr, SourceLocation, StructField, TypeDescriptor};
use crate::pointer;
use crate::type_format;

pub struct RenderResult {
    pub text: String,
    pub success: bool,
}

/// Render a struct's aggregate initializer. `ty` must be a
/// `TypeDescriptor::Struct` and `init` an `AggregateList` with one element
/// per field, in declaration order — the front-end is expected to hand us a
/// fully-initialized aggregate, never a partial one.
pub fn render(
    ty: &TypeDescriptor,
    init: &InitExpr,
    config: &TranslatorConfig,
    diags: &mut Diagnostics,
    location: &SourceLocation,
) -> RenderResult {
    let (name, fields) = match ty {
        TypeDescriptor::Struct { name, fields } => (name, fields),
        _ => panic!("struct_render::render called on a non-struct TypeDescriptor"),
    };
    let elements = match init {
        InitExpr::AggregateList { elements } => elements,
        _ => {
            diags.warn(location, "struct initializer is not a brace-enclosed aggregate");
            return RenderResult { text: format!("untranslatable component: {}", describe_init(init)), success: false };
        }
    };

    if elements.len() != fields.len() {
        diags.warn(
            location,
            format!("struct '{name}' has {} fields but {} initializer elements", fields.len(), elements.len()),
        );
        return RenderResult { text: format!("untranslatable component: {}", describe_init(init)), success: false };
    }

    let mut success = true;
    let mut rendered_fields = Vec::with_capacity(fields.len());

    for (field, field_init) in fields.iter().zip(elements.iter()) {
        let (text, ok) = render_field(field, field_init, config, diags, location);
        if !ok {
            success = false;
        }
        rendered_fields.push(text);
    }

    RenderResult { text: format!("{}({})", type_format::fortran_id(name), rendered_fields.join(", ")), success }
}

fn render_field(
    field: &StructField,
    init: &InitExpr,
    config: &TranslatorConfig,
    diags: &mut Diagnostics,
    location: &SourceLocation,
) -> (String, bool) {
    match &field.ty {
        TypeDescriptor::Scalar { scalar } => match init {
            InitExpr::Evaluatable { value: kind } => match literal::render(kind, scalar.is_char()) {
                Rendered::Literal(s) => (s, true),
                Rendered::Unrenderable(s) => {
                    diags.warn(location, format!("field '{}' initializer could not be rendered", field.name));
                    (s, false)
                }
            },
            _ => (format!("untranslatable component: {}", describe_init(init)), false),
        },

        TypeDescriptor::Pointer { pointee } => {
            let orig = describe_init(init);
            let class = pointer::classify(pointee.is_char(), false, init, &orig, diags, location);
            (class.rendered(), true)
        }

        TypeDescriptor::FunctionPointer => {
            let orig = describe_init(init);
            let class = pointer::classify(false, true, init, &orig, diags, location);
            (class.rendered(), true)
        }

        TypeDescriptor::Array { element, .. } => match init {
            InitExpr::StringLiteral { bytes } if element.is_char() => (format!("\"{bytes}\""), true),
            InitExpr::AggregateList { .. } => {
                let flattened = array::flatten(init, element, config.array_transpose, diags, location);
                if flattened.success {
                    (
                        format!(
                            "RESHAPE((/{}/), (/{}/))",
                            flattened.values.join(", "),
                            flattened.shape.iter().map(usize::to_string).collect::<Vec<_>>().join(", ")
                        ),
                        true,
                    )
                } else {
                    (format!("UntranslatableArray ! {}", describe_init(init)), false)
                }
            }
            _ => {
                diags.warn(location, format!("field '{}' array initializer is not a brace list", field.name));
                (format!("UntranslatableArray ! {}", describe_init(init)), false)
            }
        },

        TypeDescriptor::Struct { .. } => match init {
            InitExpr::AggregateList { .. } => {
                let nested = render(&field.ty, init, config, diags, location);
                (nested.text, nested.success)
            }
            _ => (format!("untranslatable component: {}", describe_init(init)), false),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EvalKind, IntWidth, ScalarKind};

    fn loc() -> SourceLocation {
        SourceLocation::unknown()
    }

    fn field(name: &str, ty: TypeDescriptor) -> StructField {
        StructField { name: name.to_string(), ty }
    }

    #[test]
    fn seed_scenario_mixed_struct() {
        // struct S { int a; char *p; void (*fn)(); int b[2]; };
        // struct S s = { 7, "hi", 0, {1,2} };
        let ty = TypeDescriptor::Struct {
            name: "S".to_string(),
            fields: vec![
                field("a", TypeDescriptor::Scalar { scalar: ScalarKind::Int(IntWidth::Int) }),
                field(
                    "p",
                    TypeDescriptor::Pointer { pointee: Box::new(TypeDescriptor::Scalar { scalar: ScalarKind::Char }) },
                ),
                field("fn", TypeDescriptor::FunctionPointer),
                field(
                    "b",
                    TypeDescriptor::Array {
                        element: Box::new(TypeDescriptor::Scalar { scalar: ScalarKind::Int(IntWidth::Int) }),
                        extents: vec![2],
                    },
                ),
            ],
        };
        let init = InitExpr::AggregateList {
            elements: vec![
                InitExpr::Evaluatable { value: EvalKind::Int(7) },
                InitExpr::StringLiteral { bytes: "hi".to_string() },
                InitExpr::Evaluatable { value: EvalKind::Int(0) },
                InitExpr::AggregateList {
                    elements: vec![InitExpr::Evaluatable { value: EvalKind::Int(1) }, InitExpr::Evaluatable { value: EvalKind::Int(2) }],
                },
            ],
        };
        let mut diags = Diagnostics::new(&TranslatorConfig::default());
        let result = render(&ty, &init, &TranslatorConfig::default(), &mut diags, &loc());
        assert!(result.success);
        assert_eq!(
            result.text,
            "S(7, \"hi\", & ! Function pointer 0 set to C_NULL_FUNPTR\nC_NULL_FUNPTR, RESHAPE((/1, 2/), (/2/)))"
        );
    }

    #[test]
    fn field_count_mismatch_fails() {
        let ty = TypeDescriptor::Struct {
            name: "S".to_string(),
            fields: vec![field("a", TypeDescriptor::Scalar { scalar: ScalarKind::Int(IntWidth::Int) })],
        };
        let init = InitExpr::AggregateList {
            elements: vec![InitExpr::Evaluatable { value: EvalKind::Int(1) }, InitExpr::Evaluatable { value: EvalKind::Int(2) }],
        };
        let mut diags = Diagnostics::new(&TranslatorConfig::default());
        let result = render(&ty, &init, &TranslatorConfig::default(), &mut diags, &loc());
        assert!(!result.success);
    }

    #[test]
    fn nested_struct_field_recurses() {
        let inner = TypeDescriptor::Struct {
            name: "Inner".to_string(),
            fields: vec![field("x", TypeDescriptor::Scalar { scalar: ScalarKind::Int(IntWidth::Int) })],
        };
        let outer = TypeDescriptor::Struct { name: "Outer".to_string(), fields: vec![field("inner", inner)] };
        let init = InitExpr::AggregateList {
            elements: vec![InitExpr::AggregateList { elements: vec![InitExpr::Evaluatable { value: EvalKind::Int(9) }] }],
        };
        let mut diags = Diagnostics::new(&TranslatorConfig::default());
        let result = render(&outer, &init, &TranslatorConfig::default(), &mut diags, &loc());
        assert!(result.success);
        assert_eq!(result.text, "Outer(Inner(9))");
    }
}
