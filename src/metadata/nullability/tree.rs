use crate::{
    metadata::{
        nullability::NullableAnnotation,
        signatures::TypeSignature,
        typesystem::TypeFlavor,
    },
    Error::RecursionLimit,
    Result,
};

/// A type structure tree whose reference-kind nodes carry a [`NullableAnnotation`].
///
/// Built from a decoded [`TypeSignature`] with every node [`NullableAnnotation::Unknown`];
/// the transform produces a copy with annotations replayed from a flag sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedType {
    /// Shape of this node and its children
    pub kind: AnnotatedKind,
    /// Annotation of this node (only meaningful for reference-kind nodes)
    pub annotation: NullableAnnotation,
}

/// Shape of an [`AnnotatedType`] node.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotatedKind {
    /// A leaf: primitive, class, value type or generic parameter
    Named {
        /// The element this node was built from
        signature: TypeSignature,
        /// Reference or value kind
        flavor: TypeFlavor,
    },
    /// An array, always reference-kind
    Array {
        /// The element type
        element: Box<AnnotatedType>,
        /// Number of dimensions, 1 for single dimension arrays
        rank: u32,
    },
    /// An unmanaged pointer, always value-kind
    Pointer {
        /// The pointed-to type
        target: Box<AnnotatedType>,
    },
    /// A generic instantiation
    GenericInst {
        /// The generic definition (`Class` or `ValueType` element)
        definition: TypeSignature,
        /// Reference or value kind of the definition
        flavor: TypeFlavor,
        /// Type arguments, in declaration order
        arguments: Vec<AnnotatedType>,
    },
    /// A function pointer, always value-kind
    FunctionPointer {
        /// Return type
        ret: Box<AnnotatedType>,
        /// Parameter types
        params: Vec<AnnotatedType>,
    },
}

impl AnnotatedType {
    fn node(kind: AnnotatedKind) -> Self {
        AnnotatedType {
            kind,
            annotation: NullableAnnotation::Unknown,
        }
    }

    /// A reference-kind leaf
    #[must_use]
    pub fn reference(signature: TypeSignature) -> Self {
        Self::node(AnnotatedKind::Named {
            signature,
            flavor: TypeFlavor::Reference,
        })
    }

    /// A value-kind leaf
    #[must_use]
    pub fn value(signature: TypeSignature) -> Self {
        Self::node(AnnotatedKind::Named {
            signature,
            flavor: TypeFlavor::Value,
        })
    }

    /// A single dimension array of `element`
    #[must_use]
    pub fn array(element: AnnotatedType) -> Self {
        Self::node(AnnotatedKind::Array {
            element: Box::new(element),
            rank: 1,
        })
    }

    /// A pointer to `target`
    #[must_use]
    pub fn pointer(target: AnnotatedType) -> Self {
        Self::node(AnnotatedKind::Pointer {
            target: Box::new(target),
        })
    }

    /// A generic instantiation of `definition`
    #[must_use]
    pub fn generic(
        definition: TypeSignature,
        flavor: TypeFlavor,
        arguments: Vec<AnnotatedType>,
    ) -> Self {
        Self::node(AnnotatedKind::GenericInst {
            definition,
            flavor,
            arguments,
        })
    }

    /// Build the unannotated tree for a decoded signature.
    ///
    /// By-ref, pinned and custom modifier wrappers are transparent. Nesting deeper than
    /// `max_depth` is rejected.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] for elements that cannot appear in a member type
    /// (`Unknown`, `Sentinel`, or a generic instantiation over a non-type) and
    /// [`crate::Error::RecursionLimit`] if the nesting is too deep.
    pub fn from_signature(signature: &TypeSignature, max_depth: usize) -> Result<Self> {
        Self::lift(signature, 0, max_depth)
    }

    fn lift(signature: &TypeSignature, depth: usize, max_depth: usize) -> Result<Self> {
        if depth > max_depth {
            return Err(RecursionLimit(max_depth));
        }

        let signature = signature.unwrapped();
        Ok(match signature {
            TypeSignature::String
            | TypeSignature::Object
            | TypeSignature::Class(_)
            | TypeSignature::GenericParamType(_)
            | TypeSignature::GenericParamMethod(_) => Self::reference(signature.clone()),
            TypeSignature::Void
            | TypeSignature::Boolean
            | TypeSignature::Char
            | TypeSignature::I1
            | TypeSignature::U1
            | TypeSignature::I2
            | TypeSignature::U2
            | TypeSignature::I4
            | TypeSignature::U4
            | TypeSignature::I8
            | TypeSignature::U8
            | TypeSignature::R4
            | TypeSignature::R8
            | TypeSignature::I
            | TypeSignature::U
            | TypeSignature::TypedByRef
            | TypeSignature::ValueType(_) => Self::value(signature.clone()),
            TypeSignature::SzArray(array) => {
                Self::array(Self::lift(&array.base, depth + 1, max_depth)?)
            }
            TypeSignature::Array(array) => Self::node(AnnotatedKind::Array {
                element: Box::new(Self::lift(&array.base, depth + 1, max_depth)?),
                rank: array.rank,
            }),
            TypeSignature::Ptr(pointer) => {
                Self::pointer(Self::lift(&pointer.base, depth + 1, max_depth)?)
            }
            TypeSignature::GenericInst(definition, arguments) => {
                let definition = definition.unwrapped();
                let flavor = match definition {
                    TypeSignature::Class(_) => TypeFlavor::Reference,
                    TypeSignature::ValueType(_) => TypeFlavor::Value,
                    other => {
                        return Err(malformed_error!(
                            "Generic instantiation over non-type element - {:?}",
                            other
                        ))
                    }
                };
                let arguments = arguments
                    .iter()
                    .map(|arg| Self::lift(arg, depth + 1, max_depth))
                    .collect::<Result<Vec<_>>>()?;
                Self::generic(definition.clone(), flavor, arguments)
            }
            TypeSignature::FnPtr(method) => Self::node(AnnotatedKind::FunctionPointer {
                ret: Box::new(Self::lift(&method.return_type.base, depth + 1, max_depth)?),
                params: method
                    .params
                    .iter()
                    .map(|param| Self::lift(&param.base, depth + 1, max_depth))
                    .collect::<Result<Vec<_>>>()?,
            }),
            TypeSignature::Unknown
            | TypeSignature::Sentinel
            | TypeSignature::ByRef(_)
            | TypeSignature::Pinned(_)
            | TypeSignature::ModifiedRequired(..)
            | TypeSignature::ModifiedOptional(..) => {
                return Err(malformed_error!(
                    "Unexpected element in member type - {:?}",
                    signature
                ))
            }
        })
    }

    /// Reference or value kind of this node
    #[must_use]
    pub fn flavor(&self) -> TypeFlavor {
        match &self.kind {
            AnnotatedKind::Named { flavor, .. } | AnnotatedKind::GenericInst { flavor, .. } => {
                *flavor
            }
            AnnotatedKind::Array { .. } => TypeFlavor::Reference,
            AnnotatedKind::Pointer { .. } | AnnotatedKind::FunctionPointer { .. } => {
                TypeFlavor::Value
            }
        }
    }

    /// `true` if this node consumes a nullable flag
    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.flavor() == TypeFlavor::Reference
    }

    /// Child nodes in traversal order
    #[must_use]
    pub fn children(&self) -> Vec<&AnnotatedType> {
        match &self.kind {
            AnnotatedKind::Named { .. } => Vec::new(),
            AnnotatedKind::Array { element, .. } => vec![element.as_ref()],
            AnnotatedKind::Pointer { target } => vec![target.as_ref()],
            AnnotatedKind::GenericInst { arguments, .. } => arguments.iter().collect(),
            AnnotatedKind::FunctionPointer { ret, params } => {
                std::iter::once(ret.as_ref()).chain(params.iter()).collect()
            }
        }
    }

    /// Number of reference-kind nodes, i.e. the length an explicit flag sequence must have
    ///
    /// # Errors
    /// Returns [`crate::Error::RecursionLimit`] if the tree is nested deeper than `max_depth`.
    pub fn reference_count(&self, max_depth: usize) -> Result<usize> {
        self.count_references(0, max_depth)
    }

    fn count_references(&self, depth: usize, max_depth: usize) -> Result<usize> {
        if depth > max_depth {
            return Err(RecursionLimit(max_depth));
        }

        let mut count = usize::from(self.is_reference());
        for child in self.children() {
            count += child.count_references(depth + 1, max_depth)?;
        }
        Ok(count)
    }

    /// Annotations of all reference-kind nodes, in pre-order
    #[must_use]
    pub fn reference_annotations(&self) -> Vec<NullableAnnotation> {
        let mut out = Vec::new();
        self.collect_annotations(&mut out);
        out
    }

    fn collect_annotations(&self, out: &mut Vec<NullableAnnotation>) {
        if self.is_reference() {
            out.push(self.annotation);
        }
        for child in self.children() {
            child.collect_annotations(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{
        signatures::{
            SignatureArray, SignatureMethod, SignatureParameter, SignaturePointer,
            SignatureSzArray,
        },
        token::Token,
    };

    fn sz_array(base: TypeSignature) -> TypeSignature {
        TypeSignature::SzArray(SignatureSzArray {
            modifiers: vec![],
            base: Box::new(base),
        })
    }

    #[test]
    fn lift_string_array() {
        let tree = AnnotatedType::from_signature(&sz_array(TypeSignature::String), 8).unwrap();
        assert_eq!(tree, AnnotatedType::array(AnnotatedType::reference(TypeSignature::String)));
        assert_eq!(tree.reference_count(8).unwrap(), 2);
    }

    #[test]
    fn lift_generic_over_value_type() {
        // Nullable<Int32>: value-kind definition, value-kind argument
        let sig = TypeSignature::GenericInst(
            Box::new(TypeSignature::ValueType(Token(0x01000004))),
            vec![TypeSignature::I4],
        );
        let tree = AnnotatedType::from_signature(&sig, 8).unwrap();
        assert_eq!(tree.flavor(), TypeFlavor::Value);
        assert_eq!(tree.reference_count(8).unwrap(), 0);

        // Dictionary<String, Object[]>
        let sig = TypeSignature::GenericInst(
            Box::new(TypeSignature::Class(Token(0x01000005))),
            vec![TypeSignature::String, sz_array(TypeSignature::Object)],
        );
        let tree = AnnotatedType::from_signature(&sig, 8).unwrap();
        assert_eq!(tree.reference_count(8).unwrap(), 4);
    }

    #[test]
    fn lift_pointer_and_multidim() {
        let sig = TypeSignature::Ptr(SignaturePointer {
            modifiers: vec![],
            base: Box::new(TypeSignature::Array(SignatureArray {
                base: Box::new(TypeSignature::String),
                rank: 2,
                dimensions: vec![],
            })),
        });
        let tree = AnnotatedType::from_signature(&sig, 8).unwrap();
        assert!(!tree.is_reference());
        assert_eq!(tree.reference_count(8).unwrap(), 2);
        match &tree.kind {
            AnnotatedKind::Pointer { target } => match &target.kind {
                AnnotatedKind::Array { rank, .. } => assert_eq!(*rank, 2),
                other => panic!("expected array, got {:?}", other),
            },
            other => panic!("expected pointer, got {:?}", other),
        }
    }

    #[test]
    fn lift_function_pointer_children_in_order() {
        let sig = TypeSignature::FnPtr(Box::new(SignatureMethod {
            return_type: SignatureParameter::new(TypeSignature::String),
            params: vec![
                SignatureParameter::new(TypeSignature::I4),
                SignatureParameter::new(TypeSignature::Object),
            ],
            ..Default::default()
        }));
        let tree = AnnotatedType::from_signature(&sig, 8).unwrap();
        assert_eq!(tree.reference_count(8).unwrap(), 2);
        assert_eq!(tree.children().len(), 3);
    }

    #[test]
    fn lift_skips_transparent_wrappers() {
        let sig = TypeSignature::ByRef(Box::new(sz_array(TypeSignature::ModifiedOptional(
            vec![Token(0x01000007)],
            Box::new(TypeSignature::String),
        ))));
        let tree = AnnotatedType::from_signature(&sig, 8).unwrap();
        assert_eq!(tree.reference_count(8).unwrap(), 2);
    }

    #[test]
    fn lift_rejects_invalid_elements() {
        assert!(matches!(
            AnnotatedType::from_signature(&TypeSignature::Sentinel, 8),
            Err(crate::Error::Malformed { .. })
        ));

        let bad_generic = TypeSignature::GenericInst(Box::new(TypeSignature::I4), vec![]);
        assert!(matches!(
            AnnotatedType::from_signature(&bad_generic, 8),
            Err(crate::Error::Malformed { .. })
        ));
    }

    #[test]
    fn lift_respects_depth_limit() {
        let mut sig = TypeSignature::String;
        for _ in 0..10 {
            sig = sz_array(sig);
        }
        let tree = AnnotatedType::from_signature(&sig, 10).unwrap();
        assert!(matches!(
            AnnotatedType::from_signature(&sig, 9),
            Err(crate::Error::RecursionLimit(9))
        ));

        assert_eq!(tree.reference_count(10).unwrap(), 11);
        assert!(matches!(
            tree.reference_count(9),
            Err(crate::Error::RecursionLimit(9))
        ));
    }
}
