use crate::metadata::token::Token;

/// A decoded type from a member signature.
///
/// This is the untransformed type structure the signature decoder hands over. It mirrors the
/// ECMA-335 element type grammar (II.23.2.12) closely, including the wrappers that carry no
/// nullability information (`ByRef`, `Pinned`, custom modifiers).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TypeSignature {
    #[default]
    /// Not defined
    Unknown,
    /// void
    Void,
    /// bool
    Boolean,
    /// char
    Char,
    /// signed 8bit integer
    I1,
    /// unsigned 8bit integer
    U1,
    /// signed 16bit integer
    I2,
    /// unsigned 16bit integer
    U2,
    /// signed 32bit integer
    I4,
    /// unsigned 32bit integer
    U4,
    /// signed 64bit integer
    I8,
    /// unsigned 64bit integer
    U8,
    /// 32bit floating-point
    R4,
    /// 64bit floating-point
    R8,
    /// signed integer, sized to executing platform
    I,
    /// unsigned integer, sized to executing platform
    U,
    /// System.String
    String,
    /// System.Object
    Object,
    /// Type is referenced during runtime
    TypedByRef,
    /// A pointer to a type
    Ptr(SignaturePointer),
    /// Type by reference
    ByRef(Box<TypeSignature>),
    /// A pinned type (locals only)
    Pinned(Box<TypeSignature>),
    /// CIL value-type - `TypeDefOrRefOrSpecEncoded`
    ValueType(Token),
    /// CIL Class - `TypeDefOrRefOrSpecEncoded`
    Class(Token),
    /// Generic type parameter, by position on the declaring type
    GenericParamType(u32),
    /// Generic method parameter, by position on the declaring method
    GenericParamMethod(u32),
    /// General array
    Array(SignatureArray),
    /// Single dimension array with 0 lower bound
    SzArray(SignatureSzArray),
    /// Generic type and its arguments
    GenericInst(Box<TypeSignature>, Vec<TypeSignature>),
    /// Function pointer
    FnPtr(Box<SignatureMethod>),
    /// Required modifier on the following type
    ModifiedRequired(Vec<Token>, Box<TypeSignature>),
    /// Optional modifier on the following type
    ModifiedOptional(Vec<Token>, Box<TypeSignature>),
    /// Sentinel for vararg method signature
    Sentinel,
}

impl TypeSignature {
    /// Strips the wrappers that are invisible to nullability (by-ref, pinned, modifiers)
    #[must_use]
    pub fn unwrapped(&self) -> &TypeSignature {
        match self {
            TypeSignature::ByRef(inner)
            | TypeSignature::Pinned(inner)
            | TypeSignature::ModifiedRequired(_, inner)
            | TypeSignature::ModifiedOptional(_, inner) => inner.unwrapped(),
            other => other,
        }
    }
}

/// A single dimension of an array
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayDimensions {
    /// The size of this dimension
    pub size: Option<u32>,
    /// The lower bound of this dimension (lowest index that can be used to access an element)
    pub lower_bound: Option<u32>,
}

/// A general (possibly multi-dimensional) array
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignatureArray {
    /// The type in the array
    pub base: Box<TypeSignature>,
    /// The number of dimensions
    pub rank: u32,
    /// The dimensions (can be less than 'rank', are in order from 0..count)
    pub dimensions: Vec<ArrayDimensions>,
}

/// A single dimension, zero based array
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignatureSzArray {
    /// Custom modifiers - `TypeDefOrRefOrSpecEncoded`
    pub modifiers: Vec<Token>,
    /// The type in the array
    pub base: Box<TypeSignature>,
}

/// A pointer to a type
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignaturePointer {
    /// Custom modifiers - `TypeDefOrRefOrSpecEncoded`
    pub modifiers: Vec<Token>,
    /// The type pointed to
    pub base: Box<TypeSignature>,
}

/// Parameter (or return type) with optional custom modifiers
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignatureParameter {
    /// Custom modifiers of the parameter - `TypeDefOrRefOrSpecEncoded`
    pub modifiers: Vec<Token>,
    /// Parameter is passed by reference
    pub by_ref: bool,
    /// The type of the parameter
    pub base: TypeSignature,
}

impl SignatureParameter {
    /// Convenience constructor for a plain, by-value parameter
    #[must_use]
    pub fn new(base: TypeSignature) -> Self {
        SignatureParameter {
            modifiers: Vec::new(),
            by_ref: false,
            base,
        }
    }
}

/// Represents a method signature (II.23.2.1)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignatureMethod {
    /// Used to encode the keyword instance in the calling convention, see II.15.3
    pub has_this: bool,
    /// Used to encode the keyword vararg in the calling convention, see II.15.3
    pub vararg: bool,
    /// Number of generic parameters the method declares
    pub param_count_generic: u32,
    /// The return type of this `Method`
    pub return_type: SignatureParameter,
    /// The parameters of this `Method`
    pub params: Vec<SignatureParameter>,
}

impl SignatureMethod {
    /// Returns the type at `ordinal`, where 0 is the return type and 1..=N are the parameters
    #[must_use]
    pub fn by_ordinal(&self, ordinal: usize) -> Option<&SignatureParameter> {
        match ordinal {
            0 => Some(&self.return_type),
            n => self.params.get(n - 1),
        }
    }
}

/// Field signature (II.23.2.4)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignatureField {
    /// The custom modifiers for this field - `TypeDefOrRefOrSpecEncoded`
    pub modifiers: Vec<Token>,
    /// The signature of this type
    pub base: TypeSignature,
}
