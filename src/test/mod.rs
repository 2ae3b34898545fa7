//! In-memory metadata used by the unit tests.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use crate::metadata::{
    nullability::NullableFlags,
    signatures::SignatureMethod,
    source::{MemberKind, MemberSignature, MetadataSource},
    token::{Token, TABLE},
    typesystem::{TypeName, TypeNameResolver},
};

/// A [`MetadataSource`] backed by plain maps, filled through the `add_*` helpers.
#[derive(Clone, Default)]
pub struct MockMetadata {
    types: HashMap<Token, TypeName>,
    rows: Vec<(String, Token)>,
    forwarded: Vec<String>,
    attributes: HashMap<Token, NullableFlags>,
    members: HashMap<Token, MemberSignature>,
    params: HashMap<(Token, usize), Token>,
    nullable_context: bool,
    member_calls: Arc<AtomicUsize>,
    next_type_row: u32,
    next_param_row: u32,
}

impl MockMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `TypeDef` row with a resolvable name
    pub fn add_type(&mut self, namespace: &str, name: &str) -> Token {
        self.next_type_row += 1;
        let token = Token::from_parts(TABLE::TYPEDEF, self.next_type_row);
        self.types.insert(token, TypeName::new(namespace, name));
        self.rows.push((namespace.to_string(), token));
        token
    }

    /// Add a `TypeDef` row whose name cannot be resolved
    pub fn add_type_row(&mut self, namespace: &str, token: Token) {
        self.rows.push((namespace.to_string(), token));
    }

    pub fn add_forwarded_namespace(&mut self, namespace: &str) {
        self.forwarded.push(namespace.to_string());
    }

    pub fn add_method(
        &mut self,
        token: Token,
        declaring_type: TypeName,
        name: &str,
        signature: SignatureMethod,
    ) {
        self.add_member(
            token,
            MemberSignature {
                declaring_type,
                name: name.to_string(),
                kind: MemberKind::Method(signature),
            },
        );
    }

    pub fn add_member(&mut self, token: Token, member: MemberSignature) {
        self.members.insert(token, member);
    }

    /// Add a `Param` row for `ordinal` of `method`
    pub fn add_parameter_row(&mut self, method: Token, ordinal: usize) -> Token {
        self.next_param_row += 1;
        let token = Token::from_parts(TABLE::PARAM, self.next_param_row);
        self.params.insert((method, ordinal), token);
        token
    }

    pub fn set_attribute(&mut self, target: Token, flags: NullableFlags) {
        self.attributes.insert(target, flags);
    }

    pub fn set_nullable_context(&mut self, enabled: bool) {
        self.nullable_context = enabled;
    }

    /// How often [`MetadataSource::member_signature`] has been called
    pub fn member_signature_calls(&self) -> usize {
        self.member_calls.load(Ordering::SeqCst)
    }
}

impl TypeNameResolver for MockMetadata {
    fn type_name(&self, ty: Token) -> Option<TypeName> {
        self.types.get(&ty).cloned()
    }
}

impl MetadataSource for MockMetadata {
    fn attribute_flags(&self, target: Token) -> Option<NullableFlags> {
        self.attributes.get(&target).cloned()
    }

    fn member_signature(&self, member: Token) -> Option<MemberSignature> {
        self.member_calls.fetch_add(1, Ordering::SeqCst);
        self.members.get(&member).cloned()
    }

    fn parameter_row(&self, method: Token, ordinal: usize) -> Option<Token> {
        self.params.get(&(method, ordinal)).copied()
    }

    fn type_rows(&self) -> Vec<(String, Token)> {
        self.rows.clone()
    }

    fn forwarded_namespaces(&self) -> Vec<String> {
        self.forwarded.clone()
    }

    fn module_nullable_context(&self) -> bool {
        self.nullable_context
    }
}
