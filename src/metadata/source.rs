//! The narrow interface this crate consumes from the metadata reader.
//!
//! Row enumeration, heap lookups, attribute discovery and signature decoding all happen
//! behind [`MetadataSource`]. Implementations must be shareable across threads: namespace
//! materialization and annotation decoding can be triggered from any thread.

use crate::metadata::{
    nullability::NullableFlags,
    signatures::{SignatureField, SignatureMethod},
    token::Token,
    typesystem::{TypeName, TypeNameResolver},
};

/// The decoded signature of a member, together with what is needed to name it.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberSignature {
    /// Namespace and name of the declaring type
    pub declaring_type: TypeName,
    /// Name of the member itself
    pub name: String,
    /// The decoded signature
    pub kind: MemberKind,
}

/// Signature shape of a member
#[derive(Debug, Clone, PartialEq)]
pub enum MemberKind {
    /// `MethodDef` / `MemberRef` method signature
    Method(SignatureMethod),
    /// `Field` / `MemberRef` field signature
    Field(SignatureField),
}

impl MemberSignature {
    /// The method signature, if this member is a method
    #[must_use]
    pub fn method(&self) -> Option<&SignatureMethod> {
        match &self.kind {
            MemberKind::Method(method) => Some(method),
            MemberKind::Field(_) => None,
        }
    }
}

/// Metadata access required by the annotation resolver and the namespace tables.
pub trait MetadataSource: TypeNameResolver + Send + Sync {
    /// Flags of the nullable attribute attached to `target`, `None` if there is no such
    /// attribute.
    fn attribute_flags(&self, target: Token) -> Option<NullableFlags>;

    /// The decoded signature of a method or field
    fn member_signature(&self, member: Token) -> Option<MemberSignature>;

    /// The `Param` row for `ordinal` of `method` (0 = return value), if one exists
    fn parameter_row(&self, method: Token, ordinal: usize) -> Option<Token>;

    /// Every `TypeDef` row that is not nested, with its namespace name
    fn type_rows(&self) -> Vec<(String, Token)>;

    /// Namespaces that only contain forwarded (`ExportedType`) types
    fn forwarded_namespaces(&self) -> Vec<String> {
        Vec::new()
    }

    /// Whether the module carries the module-level nullable context marker
    fn module_nullable_context(&self) -> bool {
        false
    }
}
