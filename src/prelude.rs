//! # nullscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the nullscope library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all nullscope operations
pub use crate::Error;

/// The result type used throughout nullscope
pub use crate::Result;

/// Loader options
pub use crate::LoaderConfig;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// A loaded module
pub use crate::PeModule;

/// Metadata access consumed by the loader
pub use crate::metadata::source::{MemberKind, MemberSignature, MetadataSource};

/// Metadata token type for referencing table entries
pub use crate::metadata::token::Token;

// ================================================================================================
// Signatures and Type System
// ================================================================================================

/// Decoded signature types
pub use crate::metadata::signatures::{
    display_type, SignatureField, SignatureMethod, SignatureParameter, TypeSignature,
};

/// Type names and flavors
pub use crate::metadata::typesystem::{TypeFlavor, TypeName, TypeNameResolver};

// ================================================================================================
// Nullability
// ================================================================================================

/// Annotated types and their resolution
pub use crate::metadata::nullability::{
    AnnotatedKind, AnnotatedType, AnnotationResolver, AnnotationTarget, NullableAnnotation,
    NullableFlags, SignatureKey,
};

// ================================================================================================
// Namespaces
// ================================================================================================

/// Namespace tables
pub use crate::metadata::namespace::{
    MaterializationState, NameComparer, NamespaceMembers, NamespaceSymbol, NamespaceSymbolRc,
    TypeSymbol,
};
