use crate::{
    metadata::{signatures::display_type, source::MemberSignature, typesystem::TypeNameResolver},
    Result,
};

/// Builds the canonical signature keys used by the nullability override table.
///
/// The key has the form `"{Return} {Namespace}.{Type}.{Member}({Param1}, {Param2})"` with
/// every type rendered by [`display_type`]. Generic method arity, ref-kind and static/instance
/// are not part of the key, so overloads that only differ in those share a key.
pub struct SignatureKey;

impl SignatureKey {
    /// Assemble a key from already rendered parts
    pub fn encode<S: AsRef<str>>(
        namespace: &str,
        type_name: &str,
        member: &str,
        return_type: &str,
        params: &[S],
    ) -> String {
        let mut key = format!("{return_type} {namespace}.{type_name}.{member}(");
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                key.push_str(", ");
            }
            key.push_str(param.as_ref());
        }
        key.push(')');
        key
    }

    /// Key of a method member, `None` for fields.
    ///
    /// Names the resolver does not know render as empty strings, which yields a key that
    /// simply misses the table.
    ///
    /// # Errors
    /// Returns [`crate::Error::RecursionLimit`] if the return type or any parameter type is
    /// nested deeper than `max_depth`.
    pub fn for_member<R: TypeNameResolver + ?Sized>(
        member: &MemberSignature,
        resolver: &R,
        max_depth: usize,
    ) -> Result<Option<String>> {
        let Some(method) = member.method() else {
            return Ok(None);
        };

        let params = method
            .params
            .iter()
            .map(|param| display_type(&param.base, resolver, max_depth))
            .collect::<Result<Vec<String>>>()?;

        Ok(Some(Self::encode(
            &member.declaring_type.namespace,
            member.declaring_type.simple_name(),
            &member.name,
            &display_type(&method.return_type.base, resolver, max_depth)?,
            &params,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{
        signatures::{
            SignatureField, SignatureMethod, SignatureParameter, SignatureSzArray, TypeSignature,
        },
        source::MemberKind,
        token::Token,
        typesystem::TypeName,
    };

    struct Names;

    impl TypeNameResolver for Names {
        fn type_name(&self, ty: Token) -> Option<TypeName> {
            (ty == Token(0x01000010)).then(|| TypeName::new("System.Globalization", "NumberStyles"))
        }
    }

    #[test]
    fn encode_byte_parse() {
        let key = SignatureKey::encode(
            "System",
            "Byte",
            "Parse",
            "System.Byte",
            &["System.String", "System.Globalization.NumberStyles"],
        );
        assert_eq!(
            key,
            "System.Byte System.Byte.Parse(System.String, System.Globalization.NumberStyles)"
        );
    }

    #[test]
    fn encode_without_params() {
        let key = SignatureKey::encode::<&str>("System", "Object", "ToString", "System.String", &[]);
        assert_eq!(key, "System.String System.Object.ToString()");
    }

    #[test]
    fn for_member_renders_signature() {
        let member = MemberSignature {
            declaring_type: TypeName::new("System", "Byte"),
            name: "Parse".to_string(),
            kind: MemberKind::Method(SignatureMethod {
                return_type: SignatureParameter::new(TypeSignature::U1),
                params: vec![
                    SignatureParameter::new(TypeSignature::String),
                    SignatureParameter::new(TypeSignature::ValueType(Token(0x01000010))),
                ],
                ..Default::default()
            }),
        };

        assert_eq!(
            SignatureKey::for_member(&member, &Names, 64).unwrap().as_deref(),
            Some("System.Byte System.Byte.Parse(System.String, System.Globalization.NumberStyles)")
        );
    }

    #[test]
    fn for_member_ignores_ref_kind_and_arity() {
        let member = MemberSignature {
            declaring_type: TypeName::new("System.Collections.Generic", "List`1"),
            name: "Contains".to_string(),
            kind: MemberKind::Method(SignatureMethod {
                return_type: SignatureParameter::new(TypeSignature::Boolean),
                params: vec![SignatureParameter {
                    modifiers: vec![],
                    by_ref: true,
                    base: TypeSignature::GenericParamType(0),
                }],
                ..Default::default()
            }),
        };

        assert_eq!(
            SignatureKey::for_member(&member, &Names, 64).unwrap().as_deref(),
            Some("System.Boolean System.Collections.Generic.List.Contains(!0)")
        );
    }

    #[test]
    fn fields_have_no_key() {
        let member = MemberSignature {
            declaring_type: TypeName::new("System", "String"),
            name: "Empty".to_string(),
            kind: MemberKind::Field(SignatureField {
                modifiers: vec![],
                base: TypeSignature::String,
            }),
        };
        assert!(SignatureKey::for_member(&member, &Names, 64).unwrap().is_none());
    }

    #[test]
    fn unknown_names_degrade_to_empty() {
        let member = MemberSignature {
            declaring_type: TypeName::default(),
            name: "M".to_string(),
            kind: MemberKind::Method(SignatureMethod {
                return_type: SignatureParameter::new(TypeSignature::Class(Token(0x01000099))),
                params: vec![],
                ..Default::default()
            }),
        };
        assert_eq!(
            SignatureKey::for_member(&member, &Names, 64).unwrap().as_deref(),
            Some(" ..M()")
        );
    }

    #[test]
    fn deeply_nested_parameter_has_no_key() {
        let mut nested = TypeSignature::String;
        for _ in 0..8 {
            nested = TypeSignature::SzArray(SignatureSzArray {
                modifiers: vec![],
                base: Box::new(nested),
            });
        }
        let member = MemberSignature {
            declaring_type: TypeName::new("System", "String"),
            name: "Join".to_string(),
            kind: MemberKind::Method(SignatureMethod {
                return_type: SignatureParameter::new(TypeSignature::String),
                params: vec![
                    SignatureParameter::new(TypeSignature::String),
                    SignatureParameter::new(nested),
                ],
                ..Default::default()
            }),
        };

        assert!(SignatureKey::for_member(&member, &Names, 8).unwrap().is_some());
        assert!(matches!(
            SignatureKey::for_member(&member, &Names, 4),
            Err(crate::Error::RecursionLimit(4))
        ));
    }
}
