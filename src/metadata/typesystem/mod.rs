//! Minimal type identity used by the nullability decoder and the symbol tables.
//!
//! The full symbol object model lives outside this crate. What the annotation machinery needs
//! from it is small: the namespace and simple name of a type row (to render canonical
//! signatures and to build namespace members) and whether a signature element denotes a
//! reference type or a value type (to decide which nodes consume a nullable flag).
//!
//! # Key Components
//!
//! - [`TypeName`]: namespace + metadata name of a `TypeDef`/`TypeRef` row
//! - [`TypeFlavor`]: reference-kind vs value-kind classification
//! - [`TypeNameResolver`]: lookup of a [`TypeName`] by token
//! - [`primitive_full_name`]: framework names of the built-in element types

use strum::Display;

use crate::metadata::{signatures::TypeSignature, token::Token};

/// Whether a type constituent can hold `null` at runtime.
///
/// Only [`TypeFlavor::Reference`] nodes consume a nullable flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TypeFlavor {
    /// Object references, arrays, strings, type parameters
    Reference,
    /// Structs, enums, primitives, pointers
    Value,
}

/// Namespace and metadata name of a type row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TypeName {
    /// `TypeNamespace` (empty for the global namespace)
    pub namespace: String,
    /// `TypeName`, including a generic arity suffix such as "`1"
    pub name: String,
}

impl TypeName {
    /// Create a new `TypeName`
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeName {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// The name with any generic arity suffix removed (`List`1` -> `List`)
    #[must_use]
    pub fn simple_name(&self) -> &str {
        match self.name.rfind('`') {
            Some(pos) if self.name[pos + 1..].bytes().all(|b| b.is_ascii_digit())
                && pos + 1 < self.name.len() =>
            {
                &self.name[..pos]
            }
            _ => &self.name,
        }
    }

    /// The generic arity encoded in the metadata name, 0 if there is none
    #[must_use]
    pub fn arity(&self) -> u32 {
        let simple = self.simple_name();
        if simple.len() == self.name.len() {
            return 0;
        }
        self.name[simple.len() + 1..].parse().unwrap_or(0)
    }

    /// Returns the full name (Namespace.Name) without the arity suffix
    #[must_use]
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.simple_name().to_string()
        } else {
            format!("{0}.{1}", self.namespace, self.simple_name())
        }
    }
}

/// Resolves type tokens to their names.
///
/// Implemented by the metadata source; the canonical signature renderer only needs this part.
pub trait TypeNameResolver {
    /// Namespace and name of a `TypeDef`, `TypeRef` or `ExportedType` row
    fn type_name(&self, ty: Token) -> Option<TypeName>;
}

/// Returns the framework name of a built-in element type, or `None` for constructed types.
///
/// These are the names the canonical signature encoding uses in place of language keywords
/// (`System.Int32` rather than `int`).
#[must_use]
pub fn primitive_full_name(signature: &TypeSignature) -> Option<&'static str> {
    Some(match signature {
        TypeSignature::Void => "System.Void",
        TypeSignature::Boolean => "System.Boolean",
        TypeSignature::Char => "System.Char",
        TypeSignature::I1 => "System.SByte",
        TypeSignature::U1 => "System.Byte",
        TypeSignature::I2 => "System.Int16",
        TypeSignature::U2 => "System.UInt16",
        TypeSignature::I4 => "System.Int32",
        TypeSignature::U4 => "System.UInt32",
        TypeSignature::I8 => "System.Int64",
        TypeSignature::U8 => "System.UInt64",
        TypeSignature::R4 => "System.Single",
        TypeSignature::R8 => "System.Double",
        TypeSignature::I => "System.IntPtr",
        TypeSignature::U => "System.UIntPtr",
        TypeSignature::Object => "System.Object",
        TypeSignature::String => "System.String",
        TypeSignature::TypedByRef => "System.TypedReference",
        _ => return None,
    })
}
