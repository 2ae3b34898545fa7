//! Nullability annotations for types loaded from metadata.
//!
//! Whether a reference-typed constituent of a member type was declared "may be null" or
//! "never null" is not part of the binary type encoding. The compiler records it out-of-band
//! as a flat sequence of flags on a nullable attribute, one flag per reference-kind node of
//! the type in signature order. This module replays such sequences onto the decoded type
//! structure, and supplies flags for well-known framework members that predate annotations.
//!
//! # Key Components
//!
//! - [`AnnotatedType`]: Type structure tree carrying a [`NullableAnnotation`] per node
//! - [`NullableFlags`]: Flag sequence as found on an attribute (or its absence)
//! - [`SignatureKey`]: Canonical member signature used to key the override table
//! - [`AnnotationResolver`]: Override table, transform and the end-to-end pipeline
//!
//! # Traversal Order
//!
//! A node is visited before its children. Arrays visit their element type, pointers their
//! target, generic instantiations their type arguments left to right and function pointers
//! their return type followed by the parameters. Value-kind nodes (structs, enums,
//! primitives, pointers) consume no flag.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use nullscope::metadata::nullability::{AnnotatedType, NullableAnnotation, NullableFlags};
//! use nullscope::metadata::signatures::TypeSignature;
//! # use nullscope::metadata::{nullability::AnnotationResolver, source::MetadataSource};
//! # use nullscope::metadata::{token::Token, typesystem::{TypeName, TypeNameResolver}};
//! # use nullscope::LoaderConfig;
//! # struct Empty;
//! # impl TypeNameResolver for Empty { fn type_name(&self, _: Token) -> Option<TypeName> { None } }
//! # impl MetadataSource for Empty {
//! #     fn attribute_flags(&self, _: Token) -> Option<NullableFlags> { None }
//! #     fn member_signature(&self, _: Token) -> Option<nullscope::metadata::source::MemberSignature> { None }
//! #     fn parameter_row(&self, _: Token, _: usize) -> Option<Token> { None }
//! #     fn type_rows(&self) -> Vec<(String, Token)> { Vec::new() }
//! # }
//! let resolver = AnnotationResolver::new(Arc::new(Empty), LoaderConfig::default());
//!
//! // string?[] with a non-null array: flags [outer array, element]
//! let tree = AnnotatedType::array(AnnotatedType::reference(TypeSignature::String));
//! let annotated = resolver.transform(&tree, &NullableFlags::explicit(&[false, true]));
//!
//! assert_eq!(
//!     annotated.reference_annotations(),
//!     vec![NullableAnnotation::NotAnnotated, NullableAnnotation::Annotated]
//! );
//!
//! // a sequence of the wrong length leaves the tree untouched
//! let untouched = resolver.transform(&tree, &NullableFlags::explicit(&[true]));
//! assert_eq!(untouched, tree);
//! ```

mod annotation;
mod key;
pub mod overrides;
mod resolver;
mod transform;
mod tree;

pub use annotation::{NullableAnnotation, NullableFlags};
pub use key::SignatureKey;
pub use resolver::{AnnotationResolver, AnnotationTarget};
pub use tree::{AnnotatedKind, AnnotatedType};
