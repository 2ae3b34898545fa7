use std::{cmp::Ordering, collections::HashMap};

use crate::metadata::token::Token;

/// Ordering of namespace names while grouping type rows.
///
/// The comparer only decides the order of groups. Two names that differ in case stay two
/// groups (and later two namespace symbols) even under [`NameComparer::IgnoreCase`]; they just
/// end up next to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameComparer {
    /// Byte-wise ordering, as used by case-sensitive languages
    #[default]
    Ordinal,
    /// Ordering that ignores letter case
    IgnoreCase,
}

impl NameComparer {
    /// Compare two namespace names
    #[must_use]
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match self {
            NameComparer::Ordinal => left.cmp(right),
            NameComparer::IgnoreCase => left
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(right.chars().flat_map(char::to_lowercase)),
        }
    }
}

/// The type rows that belong directly to one fully-qualified namespace.
///
/// An empty `types` list denotes a namespace that only holds forwarded types. The global
/// namespace is the empty name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceGroup {
    /// Fully-qualified namespace name
    pub name: String,
    /// `TypeDef` rows declared in this namespace, in row order
    pub types: Vec<Token>,
}

impl NamespaceGroup {
    fn tie_break(&self, other: &NamespaceGroup) -> Ordering {
        match (self.types.first(), other.types.first()) {
            (Some(left), Some(right)) => left.cmp(right),
            // groups with types sort before forwarded-only groups
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| self.name.cmp(&other.name))
    }
}

/// Group type rows by their fully-qualified namespace.
///
/// `rows` are (namespace, `TypeDef` token) pairs in row order, `forwarded` the namespaces of
/// forwarded types. The result is sorted with `comparer`; names that compare equal but are
/// not identical are ordered by their first type row, then ordinally.
pub fn group_types_by_namespace(
    rows: impl IntoIterator<Item = (String, Token)>,
    forwarded: impl IntoIterator<Item = String>,
    comparer: NameComparer,
) -> Vec<NamespaceGroup> {
    let mut namespaces: HashMap<String, Vec<Token>> = HashMap::new();
    for (namespace, token) in rows {
        namespaces.entry(namespace).or_default().push(token);
    }
    for namespace in forwarded {
        namespaces.entry(namespace).or_default();
    }

    let mut groups: Vec<NamespaceGroup> = namespaces
        .into_iter()
        .map(|(name, types)| NamespaceGroup { name, types })
        .collect();

    groups.sort_by(|left, right| {
        comparer
            .compare(&left.name, &right.name)
            .then_with(|| left.tie_break(right))
    });
    groups
}
