use crate::{
    metadata::{
        signatures::{SignatureMethod, TypeSignature},
        typesystem::{primitive_full_name, TypeNameResolver},
    },
    Error::RecursionLimit,
    Result,
};

/// Render a decoded type in the canonical, language-neutral display form.
///
/// Type tokens the resolver cannot name render as an empty string; callers treat the
/// resulting key as a table miss.
///
/// # Errors
/// Returns [`crate::Error::RecursionLimit`] if the type is nested deeper than `max_depth`.
pub fn display_type<R: TypeNameResolver + ?Sized>(
    signature: &TypeSignature,
    resolver: &R,
    max_depth: usize,
) -> Result<String> {
    let mut writer = Writer {
        out: String::new(),
        resolver,
        max_depth,
    };
    writer.write_type(signature, 0)?;
    Ok(writer.out)
}

struct Writer<'r, R: ?Sized> {
    out: String,
    resolver: &'r R,
    max_depth: usize,
}

impl<R: TypeNameResolver + ?Sized> Writer<'_, R> {
    fn write_type(&mut self, signature: &TypeSignature, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(RecursionLimit(self.max_depth));
        }

        if let Some(name) = primitive_full_name(signature) {
            self.out.push_str(name);
            return Ok(());
        }

        match signature {
            TypeSignature::Class(token) | TypeSignature::ValueType(token) => {
                if let Some(name) = self.resolver.type_name(*token) {
                    self.out.push_str(&name.full_name());
                }
            }
            TypeSignature::GenericParamType(index) => {
                self.out.push('!');
                self.out.push_str(&index.to_string());
            }
            TypeSignature::GenericParamMethod(index) => {
                self.out.push_str("!!");
                self.out.push_str(&index.to_string());
            }
            TypeSignature::SzArray(array) => {
                self.write_type(&array.base, depth + 1)?;
                self.out.push_str("[]");
            }
            TypeSignature::Array(array) => {
                self.write_type(&array.base, depth + 1)?;
                self.out.push('[');
                for _ in 1..array.rank.max(1) {
                    self.out.push(',');
                }
                self.out.push(']');
            }
            TypeSignature::Ptr(pointer) => {
                self.write_type(&pointer.base, depth + 1)?;
                self.out.push('*');
            }
            TypeSignature::GenericInst(definition, arguments) => {
                self.write_type(definition, depth + 1)?;
                self.out.push('<');
                self.write_list(arguments.iter(), depth + 1)?;
                self.out.push('>');
            }
            TypeSignature::FnPtr(method) => self.write_fn_ptr(method, depth + 1)?,
            TypeSignature::ByRef(inner)
            | TypeSignature::Pinned(inner)
            | TypeSignature::ModifiedRequired(_, inner)
            | TypeSignature::ModifiedOptional(_, inner) => self.write_type(inner, depth + 1)?,
            _ => {}
        }
        Ok(())
    }

    fn write_fn_ptr(&mut self, method: &SignatureMethod, depth: usize) -> Result<()> {
        self.out.push_str("method ");
        self.write_type(&method.return_type.base, depth)?;
        self.out.push_str(" *(");
        self.write_list(method.params.iter().map(|p| &p.base), depth)?;
        self.out.push(')');
        Ok(())
    }

    fn write_list<'a>(
        &mut self,
        types: impl Iterator<Item = &'a TypeSignature>,
        depth: usize,
    ) -> Result<()> {
        for (i, ty) in types.enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.write_type(ty, depth)?;
        }
        Ok(())
    }
}
