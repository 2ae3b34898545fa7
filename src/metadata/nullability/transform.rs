//! Replays a flat nullable flag sequence onto a type structure tree.
//!
//! The flags are written by the compiler in the same order the signature encodes the type:
//! a node first, then its children left to right. Only reference-kind nodes own a flag.
//! An explicit sequence must be consumed exactly, anything else means the flags were produced
//! for a different shape and are unusable as a whole.

use std::slice;

use crate::{
    metadata::nullability::{AnnotatedKind, AnnotatedType, NullableAnnotation, NullableFlags},
    Error::{FlagCountMismatch, RecursionLimit},
    Result,
};

/// Where the annotation for the next reference-kind node comes from.
enum FlagCursor<'a> {
    Wildcard,
    Uniform(NullableAnnotation),
    Explicit(slice::Iter<'a, bool>),
}

impl FlagCursor<'_> {
    fn next_annotation(&mut self) -> NullableAnnotation {
        match self {
            FlagCursor::Wildcard => NullableAnnotation::Unknown,
            FlagCursor::Uniform(annotation) => *annotation,
            // length is checked up front, running dry can't happen
            FlagCursor::Explicit(flags) => flags
                .next()
                .map_or(NullableAnnotation::Unknown, |flag| {
                    NullableAnnotation::from_flag(*flag)
                }),
        }
    }
}

/// Annotate `tree` from `flags`.
///
/// # Errors
/// [`crate::Error::FlagCountMismatch`] if an explicit sequence does not have exactly one flag
/// per reference-kind node, [`crate::Error::RecursionLimit`] if the tree is nested deeper than
/// `max_depth`.
pub(crate) fn apply(
    tree: &AnnotatedType,
    flags: &NullableFlags,
    max_depth: usize,
) -> Result<AnnotatedType> {
    let mut cursor = match flags {
        NullableFlags::Wildcard => FlagCursor::Wildcard,
        NullableFlags::Uniform(flag) => FlagCursor::Uniform(NullableAnnotation::from_flag(*flag)),
        NullableFlags::Explicit(values) => {
            let expected = tree.reference_count(max_depth)?;
            if expected != values.len() {
                return Err(FlagCountMismatch {
                    expected,
                    actual: values.len(),
                });
            }
            FlagCursor::Explicit(values.iter())
        }
    };

    walk(tree, &mut cursor, 0, max_depth)
}

fn walk(
    node: &AnnotatedType,
    cursor: &mut FlagCursor<'_>,
    depth: usize,
    max_depth: usize,
) -> Result<AnnotatedType> {
    if depth > max_depth {
        return Err(RecursionLimit(max_depth));
    }

    // the node's own flag precedes the flags of its children
    let annotation = if node.is_reference() {
        cursor.next_annotation()
    } else {
        node.annotation
    };

    let kind = match &node.kind {
        AnnotatedKind::Named { .. } => node.kind.clone(),
        AnnotatedKind::Array { element, rank } => AnnotatedKind::Array {
            element: Box::new(walk(element, cursor, depth + 1, max_depth)?),
            rank: *rank,
        },
        AnnotatedKind::Pointer { target } => AnnotatedKind::Pointer {
            target: Box::new(walk(target, cursor, depth + 1, max_depth)?),
        },
        AnnotatedKind::GenericInst {
            definition,
            flavor,
            arguments,
        } => AnnotatedKind::GenericInst {
            definition: definition.clone(),
            flavor: *flavor,
            arguments: arguments
                .iter()
                .map(|arg| walk(arg, cursor, depth + 1, max_depth))
                .collect::<Result<Vec<_>>>()?,
        },
        AnnotatedKind::FunctionPointer { ret, params } => AnnotatedKind::FunctionPointer {
            ret: Box::new(walk(ret, cursor, depth + 1, max_depth)?),
            params: params
                .iter()
                .map(|param| walk(param, cursor, depth + 1, max_depth))
                .collect::<Result<Vec<_>>>()?,
        },
    };

    Ok(AnnotatedType { kind, annotation })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{signatures::TypeSignature, token::Token, typesystem::TypeFlavor};

    use NullableAnnotation::{Annotated, NotAnnotated, Unknown};

    fn string_array() -> AnnotatedType {
        AnnotatedType::array(AnnotatedType::reference(TypeSignature::String))
    }

    #[test]
    fn explicit_flags_in_pre_order() {
        let result = apply(&string_array(), &NullableFlags::explicit(&[true, false]), 64).unwrap();
        assert_eq!(result.annotation, Annotated);
        assert_eq!(result.children()[0].annotation, NotAnnotated);
    }

    #[test]
    fn too_few_flags_is_a_mismatch() {
        let err = apply(&string_array(), &NullableFlags::explicit(&[true]), 64).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::FlagCountMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn too_many_flags_is_a_mismatch() {
        assert!(apply(
            &string_array(),
            &NullableFlags::explicit(&[true, false, true]),
            64
        )
        .is_err());
    }

    #[test]
    fn wildcard_marks_unknown() {
        let annotated = apply(&string_array(), &NullableFlags::explicit(&[true, true]), 64).unwrap();
        let reset = apply(&annotated, &NullableFlags::Wildcard, 64).unwrap();
        assert_eq!(reset.reference_annotations(), vec![Unknown, Unknown]);
    }

    #[test]
    fn uniform_applies_everywhere() {
        let tree = AnnotatedType::generic(
            TypeSignature::Class(Token(0x01000001)),
            TypeFlavor::Reference,
            vec![
                AnnotatedType::value(TypeSignature::I4),
                string_array(),
            ],
        );
        let result = apply(&tree, &NullableFlags::Uniform(false), 64).unwrap();
        assert_eq!(
            result.reference_annotations(),
            vec![NotAnnotated, NotAnnotated, NotAnnotated]
        );
    }

    #[test]
    fn value_nodes_consume_nothing() {
        // Int32*[] -> array(ref) of pointer(value) to Int32(value)
        let tree = AnnotatedType::array(AnnotatedType::pointer(AnnotatedType::value(
            TypeSignature::I4,
        )));
        let result = apply(&tree, &NullableFlags::explicit(&[true]), 64).unwrap();
        assert_eq!(result.annotation, Annotated);
        assert_eq!(result.children()[0].annotation, Unknown);
    }

    #[test]
    fn generic_outer_flag_before_arguments() {
        // List<String>: [outer, argument]
        let tree = AnnotatedType::generic(
            TypeSignature::Class(Token(0x01000001)),
            TypeFlavor::Reference,
            vec![AnnotatedType::reference(TypeSignature::String)],
        );
        let result = apply(&tree, &NullableFlags::explicit(&[false, true]), 64).unwrap();
        assert_eq!(result.annotation, NotAnnotated);
        assert_eq!(result.children()[0].annotation, Annotated);
    }

    #[test]
    fn empty_flags_fit_value_types() {
        let tree = AnnotatedType::value(TypeSignature::U1);
        let result = apply(&tree, &NullableFlags::explicit(&[]), 64).unwrap();
        assert_eq!(result, tree);
    }

    #[test]
    fn depth_limit() {
        let mut tree = AnnotatedType::reference(TypeSignature::Object);
        for _ in 0..5 {
            tree = AnnotatedType::array(tree);
        }
        assert!(apply(&tree, &NullableFlags::Wildcard, 5).is_ok());
        assert!(matches!(
            apply(&tree, &NullableFlags::Wildcard, 4),
            Err(crate::Error::RecursionLimit(4))
        ));
    }

    #[test]
    fn depth_limit_precedes_flag_count() {
        let mut tree = AnnotatedType::reference(TypeSignature::Object);
        for _ in 0..5 {
            tree = AnnotatedType::array(tree);
        }
        // six reference nodes, but the count itself is refused past the limit
        assert!(matches!(
            apply(&tree, &NullableFlags::explicit(&[true]), 4),
            Err(crate::Error::RecursionLimit(4))
        ));
        assert!(apply(&tree, &NullableFlags::explicit(&[true; 6]), 5).is_ok());
    }
}
