use std::sync::Arc;

use strum::{Display, EnumIter};

/// Nullability state of a single reference-kind type constituent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum NullableAnnotation {
    /// No information, the constituent is nullable-oblivious
    #[default]
    Unknown,
    /// Annotated as "may be null"
    Annotated,
    /// Annotated as "never null"
    NotAnnotated,
}

impl NullableAnnotation {
    /// Map one flag of an explicit flag sequence (`true` = may be null)
    #[must_use]
    pub fn from_flag(nullable: bool) -> Self {
        if nullable {
            NullableAnnotation::Annotated
        } else {
            NullableAnnotation::NotAnnotated
        }
    }

    /// `true` for [`NullableAnnotation::Annotated`]
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        matches!(self, NullableAnnotation::Annotated)
    }
}

/// Out-of-band nullability data for one type, as found on an attribute or in the override
/// table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NullableFlags {
    /// No data. Every reference-kind node becomes [`NullableAnnotation::Unknown`].
    #[default]
    Wildcard,
    /// Single-value attribute form, the flag applies to every reference-kind node
    Uniform(bool),
    /// One flag per reference-kind node, in pre-order
    Explicit(Arc<[bool]>),
}

impl NullableFlags {
    /// Build an explicit sequence from a slice
    #[must_use]
    pub fn explicit(flags: &[bool]) -> Self {
        NullableFlags::Explicit(Arc::from(flags))
    }

    /// Number of flags an explicit sequence carries, `None` for the other forms
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            NullableFlags::Explicit(flags) => Some(flags.len()),
            _ => None,
        }
    }

    /// `true` for an explicit sequence without any flags
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// `true` for [`NullableFlags::Wildcard`]
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, NullableFlags::Wildcard)
    }
}

impl From<&[bool]> for NullableFlags {
    fn from(flags: &[bool]) -> Self {
        NullableFlags::explicit(flags)
    }
}
