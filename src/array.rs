//! Walks a possibly-nested aggregate initializer for an array type,
//! producing `(shape…)` and `(values…)` in Fortran element order.
//!
//! The walk is depth-first: the first sibling list seen at a given depth
//! fixes that dimension's extent, and every later sibling at the same depth
//! must match it — C fills a short brace list with zeros before handing it
//! to us, so anything ragged at this point is a genuine shape mismatch, not
//! a partially-initialized array we should pad ourselves.

use crate::diagnostics::Diagnostics;
use crate::literal::{self, Rendered};
use crate::model::{InitExpr, SourceLocation, TypeDescriptor};

pub struct FlattenResult {
    pub values: Vec<String>,
    pub shape: Vec<usize>,
    pub success: bool,
}

/// Flatten `init` (expected to be an `AggregateList`) against `element_ty`,
/// the array's base element type.
pub fn flatten(
    init: &InitExpr,
    element_ty: &TypeDescriptor,
    transpose: bool,
    diags: &mut Diagnostics,
    location: &SourceLocation,
) -> FlattenResult {
    let is_char = element_ty.is_char();
    let mut dims: Vec<usize> = Vec::new();
    let mut values: Vec<String> = Vec::new();
    let mut success = true;

    walk(init, 0, &mut dims, &mut values, is_char, diags, location, &mut success);

    let mut shape = dims;
    if transpose {
        shape.reverse();
    }

    FlattenResult { values, shape, success }
}

fn walk(
    init: &InitExpr,
    depth: usize,
    dims: &mut Vec<usize>,
    values: &mut Vec<String>,
    is_char: bool,
    diags: &mut Diagnostics,
    location: &SourceLocation,
    success: &mut bool,
) {
    if !*success {
        return;
    }

    match init {
        InitExpr::AggregateList { elements } => {
            let len = elements.len();
            match dims.get(depth) {
                None => dims.push(len),
                Some(expected) if *expected != len => {
                    diags.warn(
                        location,
                        format!(
                            "ragged array initializer at depth {depth}: expected {expected} elements, found {len}"
                        ),
                    );
                    *success = false;
                    return;
                }
                Some(_) => {}
            }
            for element in elements {
                walk(element, depth + 1, dims, values, is_char, diags, location, success);
                if !*success {
                    return;
                }
            }
        }
        InitExpr::Evaluatable { value: kind } => match literal::render(kind, is_char) {
            Rendered::Literal(s) => values.push(s),
            Rendered::Unrenderable(s) => {
                diags.warn(location, format!("array element could not be rendered: {s}"));
                values.push(s);
                *success = false;
            }
        },
        InitExpr::StringLiteral { bytes } if is_char => {
            values.push(format!("\"{bytes}\""));
        }
        InitExpr::StringLiteral { .. } | InitExpr::Other { .. } => {
            diags.warn(location, "non-evaluatable array element");
            *success = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslatorConfig;
    use crate::model::{EvalKind, ScalarKind};

    fn loc() -> SourceLocation {
        SourceLocation::unknown()
    }

    fn agg(elems: Vec<InitExpr>) -> InitExpr {
        InitExpr::AggregateList { elements: elems }
    }

    fn int(v: i64) -> InitExpr {
        InitExpr::Evaluatable { value: EvalKind::Int(v) }
    }

    #[test]
    fn flat_one_dimensional_array() {
        let mut diags = Diagnostics::new(&TranslatorConfig::default());
        let init = agg(vec![int(1), int(2), int(3)]);
        let result = flatten(&init, &TypeDescriptor::Scalar { scalar: ScalarKind::Int(crate::model::IntWidth::Int) }, true, &mut diags, &loc());
        assert!(result.success);
        assert_eq!(result.values, vec!["1", "2", "3"]);
        assert_eq!(result.shape, vec![3]);
    }

    #[test]
    fn two_by_three_transposed() {
        let mut diags = Diagnostics::new(&TranslatorConfig::default());
        let init = agg(vec![agg(vec![int(1), int(2), int(3)]), agg(vec![int(4), int(5), int(6)])]);
        let result = flatten(
            &init,
            &TypeDescriptor::Scalar { scalar: ScalarKind::Int(crate::model::IntWidth::Int) },
            true,
            &mut diags,
            &loc(),
        );
        assert!(result.success);
        assert_eq!(result.values, vec!["1", "2", "3", "4", "5", "6"]);
        // Outer (C) dimension is 2, inner is 3; transpose reverses to (3, 2).
        assert_eq!(result.shape, vec![3, 2]);
    }

    #[test]
    fn non_transposed_keeps_c_order() {
        let mut diags = Diagnostics::new(&TranslatorConfig::default());
        let init = agg(vec![agg(vec![int(1), int(2), int(3)]), agg(vec![int(4), int(5), int(6)])]);
        let result = flatten(
            &init,
            &TypeDescriptor::Scalar { scalar: ScalarKind::Int(crate::model::IntWidth::Int) },
            false,
            &mut diags,
            &loc(),
        );
        assert_eq!(result.shape, vec![2, 3]);
    }

    #[test]
    fn ragged_sibling_fails() {
        let mut diags = Diagnostics::new(&TranslatorConfig::default());
        let init = agg(vec![agg(vec![int(1), int(2)]), agg(vec![int(3)])]);
        let result = flatten(
            &init,
            &TypeDescriptor::Scalar { scalar: ScalarKind::Int(crate::model::IntWidth::Int) },
            true,
            &mut diags,
            &loc(),
        );
        assert!(!result.success);
        assert!(!diags.collected().is_empty());
    }

    #[test]
    fn char_array_reinterprets_leaves() {
        let mut diags = Diagnostics::new(&TranslatorConfig::default());
        let init = agg(vec![int(104), int(105)]);
        let result = flatten(&init, &TypeDescriptor::Scalar { scalar: ScalarKind::Char }, true, &mut diags, &loc());
        assert!(result.success);
        assert_eq!(result.values, vec!["'h'", "'i'"]);
    }

    #[test]
    fn non_evaluatable_leaf_fails() {
        let mut diags = Diagnostics::new(&TranslatorConfig::default());
        let init = agg(vec![int(1), InitExpr::Other { source_text: "some_func()".into() }]);
        let result = flatten(
            &init,
            &TypeDescriptor::Scalar { scalar: ScalarKind::Int(crate::model::IntWidth::Int) },
            true,
            &mut diags,
            &loc(),
        );
        assert!(!result.success);
    }
}
