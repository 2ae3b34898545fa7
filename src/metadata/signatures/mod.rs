//! Decoded member signatures and their canonical textual form.
//!
//! Decoding the binary signature grammar is the job of the metadata reader; this module
//! holds the decoded tree it hands over ([`TypeSignature`] and friends) and the renderer that
//! turns such a tree into the language-neutral display string used to key the nullability
//! override table.
//!
//! # Canonical Display
//!
//! - Built-in element types render by their framework name (`System.Int32`, `System.String`)
//! - Named types render as `Namespace.Name`, the generic arity suffix is dropped
//! - Arrays render as `T[]` or `T[,]`, pointers as `T*`
//! - Generic instantiations render as `Definition<Arg1, Arg2>`
//! - Generic parameters render positionally (`!0` for types, `!!0` for methods)
//! - By-ref, pinned and custom modifiers are not encoded
//!
//! # Examples
//!
//! ```rust
//! use nullscope::metadata::signatures::{display_type, SignatureSzArray, TypeSignature};
//! use nullscope::metadata::typesystem::{TypeName, TypeNameResolver};
//! use nullscope::metadata::token::Token;
//!
//! struct NoNames;
//! impl TypeNameResolver for NoNames {
//!     fn type_name(&self, _: Token) -> Option<TypeName> { None }
//! }
//!
//! let array = TypeSignature::SzArray(SignatureSzArray {
//!     modifiers: vec![],
//!     base: Box::new(TypeSignature::String),
//! });
//! assert_eq!(display_type(&array, &NoNames, 64)?, "System.String[]");
//! # Ok::<(), nullscope::Error>(())
//! ```

mod display;
mod types;

pub use display::display_type;
pub use types::*;
