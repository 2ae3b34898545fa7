//! Metadata fixture shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use nullscope::prelude::*;
use tracing_subscriber::filter::LevelFilter;

const TYPEDEF: u32 = 0x0200_0000;
const PARAM: u32 = 0x0800_0000;

/// Route the crate's log output through the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}

/// A small in-memory module: a few `TypeDef` rows, some methods and attributes.
#[derive(Default)]
pub struct Fixture {
    types: HashMap<Token, TypeName>,
    rows: Vec<(String, Token)>,
    forwarded: Vec<String>,
    attributes: HashMap<Token, NullableFlags>,
    members: HashMap<Token, MemberSignature>,
    params: HashMap<(Token, usize), Token>,
    nullable_context: bool,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, namespace: &str, name: &str) -> Self {
        self.add_type(namespace, name);
        self
    }

    pub fn add_type(&mut self, namespace: &str, name: &str) -> Token {
        let token = Token(TYPEDEF | (self.rows.len() as u32 + 1));
        self.types.insert(token, TypeName::new(namespace, name));
        self.rows.push((namespace.to_string(), token));
        token
    }

    pub fn with_forwarded(mut self, namespace: &str) -> Self {
        self.forwarded.push(namespace.to_string());
        self
    }

    pub fn add_method(
        &mut self,
        token: Token,
        declaring_type: TypeName,
        name: &str,
        ret: TypeSignature,
        params: Vec<TypeSignature>,
    ) {
        self.members.insert(
            token,
            MemberSignature {
                declaring_type,
                name: name.to_string(),
                kind: MemberKind::Method(SignatureMethod {
                    return_type: SignatureParameter::new(ret),
                    params: params.into_iter().map(SignatureParameter::new).collect(),
                    ..Default::default()
                }),
            },
        );
    }

    pub fn add_field(&mut self, token: Token, declaring_type: TypeName, name: &str, ty: TypeSignature) {
        self.members.insert(
            token,
            MemberSignature {
                declaring_type,
                name: name.to_string(),
                kind: MemberKind::Field(SignatureField {
                    modifiers: vec![],
                    base: ty,
                }),
            },
        );
    }

    /// Attach `flags` to the `Param` row of `ordinal`, creating the row
    pub fn annotate_parameter(&mut self, method: Token, ordinal: usize, flags: NullableFlags) {
        let row = Token(PARAM | (self.params.len() as u32 + 1));
        self.params.insert((method, ordinal), row);
        self.attributes.insert(row, flags);
    }

    pub fn annotate(&mut self, target: Token, flags: NullableFlags) {
        self.attributes.insert(target, flags);
    }

    pub fn opt_in(&mut self) {
        self.nullable_context = true;
    }
}

impl TypeNameResolver for Fixture {
    fn type_name(&self, ty: Token) -> Option<TypeName> {
        self.types.get(&ty).cloned()
    }
}

impl MetadataSource for Fixture {
    fn attribute_flags(&self, target: Token) -> Option<NullableFlags> {
        self.attributes.get(&target).cloned()
    }

    fn member_signature(&self, member: Token) -> Option<MemberSignature> {
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
