use std::sync::{
    atomic::{AtomicU8, Ordering},
    Arc, OnceLock, Weak,
};

use arc_swap::ArcSwapOption;
use indexmap::IndexMap;
use rayon::prelude::*;
use strum::Display;
use tracing::{debug, trace};

use crate::{
    metadata::{
        namespace::NamespaceGroup,
        source::MetadataSource,
        token::Token,
        typesystem::TypeName,
    },
    Error::TypeNotFound,
};

/// Reference to a `NamespaceSymbol`
pub type NamespaceSymbolRc = Arc<NamespaceSymbol>;
/// Reference to a `TypeSymbol`
pub type TypeSymbolRc = Arc<TypeSymbol>;

/// A top-level type declared in a namespace of the module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSymbol {
    /// `TypeDef` token
    pub token: Token,
    /// Namespace and metadata name
    pub name: TypeName,
}

impl TypeSymbol {
    /// Name without the generic arity suffix
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }

    /// Number of generic parameters
    #[must_use]
    pub fn arity(&self) -> u32 {
        self.name.arity()
    }
}

/// Materialization progress of a [`NamespaceSymbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[repr(u8)]
pub enum MaterializationState {
    /// Staging data present, no members built yet
    Unmaterialized = 0,
    /// At least one thread is building the members
    Materializing = 1,
    /// Members published, staging data released
    Materialized = 2,
}

impl From<u8> for MaterializationState {
    fn from(value: u8) -> Self {
        match value {
            0 => MaterializationState::Unmaterialized,
            1 => MaterializationState::Materializing,
            _ => MaterializationState::Materialized,
        }
    }
}

/// The materialized children of a namespace.
#[derive(Debug, Default)]
pub struct NamespaceMembers {
    /// Types declared directly in the namespace, in row order
    pub types: Vec<TypeSymbolRc>,
    /// Child namespaces, in the order their first group appears
    pub namespaces: Vec<NamespaceSymbolRc>,
}

impl NamespaceMembers {
    /// The child namespace called exactly `name`
    #[must_use]
    pub fn namespace(&self, name: &str) -> Option<&NamespaceSymbolRc> {
        self.namespaces.iter().find(|ns| ns.name() == name)
    }

    /// Types whose name (without arity suffix) is exactly `name`
    pub fn types_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a TypeSymbolRc> {
        self.types.iter().filter(move |ty| ty.simple_name() == name)
    }
}

/// Grouped type rows a namespace builds its members from; dropped after materialization.
#[derive(Debug)]
struct NamespaceStaging {
    groups: Vec<NamespaceGroup>,
}

/// A namespace of a loaded module whose members are built on first access.
///
/// Construction only records the grouped type rows of the namespace and its descendants.
/// The first call to [`NamespaceSymbol::members`] turns them into [`TypeSymbol`]s and child
/// namespaces. Concurrent first callers may all build, but only one result is ever published
/// and all of them return it. The staging data is released right after publishing.
pub struct NamespaceSymbol {
    parent: Weak<NamespaceSymbol>,
    name: String,
    full_name: String,
    source: Arc<dyn MetadataSource>,
    state: AtomicU8,
    staging: ArcSwapOption<NamespaceStaging>,
    members: OnceLock<NamespaceMembers>,
}

impl NamespaceSymbol {
    /// Create the global namespace of a module from all of its type groups
    pub fn global(source: Arc<dyn MetadataSource>, groups: Vec<NamespaceGroup>) -> NamespaceSymbolRc {
        Arc::new(NamespaceSymbol {
            parent: Weak::new(),
            name: String::new(),
            full_name: String::new(),
            source,
            state: AtomicU8::new(MaterializationState::Unmaterialized as u8),
            staging: ArcSwapOption::from_pointee(NamespaceStaging { groups }),
            members: OnceLock::new(),
        })
    }

    fn child(parent: &NamespaceSymbolRc, name: String, groups: Vec<NamespaceGroup>) -> NamespaceSymbolRc {
        let full_name = if parent.is_global() {
            name.clone()
        } else {
            format!("{}.{}", parent.full_name, name)
        };

        Arc::new(NamespaceSymbol {
            parent: Arc::downgrade(parent),
            name,
            full_name,
            source: parent.source.clone(),
            state: AtomicU8::new(MaterializationState::Unmaterialized as u8),
            staging: ArcSwapOption::from_pointee(NamespaceStaging { groups }),
            members: OnceLock::new(),
        })
    }

    /// Simple name, empty for the global namespace
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully-qualified name, empty for the global namespace
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// `true` for the global namespace of a module
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.parent.strong_count() == 0 && self.full_name.is_empty()
    }

    /// The containing namespace, `None` for the global namespace (or if it was dropped)
    #[must_use]
    pub fn parent(&self) -> Option<NamespaceSymbolRc> {
        self.parent.upgrade()
    }

    /// Current materialization state
    #[must_use]
    pub fn state(&self) -> MaterializationState {
        MaterializationState::from(self.state.load(Ordering::Acquire))
    }

    /// `true` while the grouped type rows are still held
    #[must_use]
    pub fn has_staging(&self) -> bool {
        self.staging.load().is_some()
    }

    /// Types and child namespaces of this namespace, built on first access
    pub fn members(self: &Arc<Self>) -> &NamespaceMembers {
        if let Some(members) = self.members.get() {
            return members;
        }
        self.materialize()
    }

    /// Shortcut for `members().namespace(name)`
    pub fn namespace(self: &Arc<Self>, name: &str) -> Option<NamespaceSymbolRc> {
        self.members().namespace(name).cloned()
    }

    /// Shortcut for `members().types_named(name)`
    pub fn types_named(self: &Arc<Self>, name: &str) -> Vec<TypeSymbolRc> {
        self.members().types_named(name).cloned().collect()
    }

    /// Materialize this namespace and all of its descendants, in parallel
    pub fn materialize_all(self: &Arc<Self>) {
        self.members()
            .namespaces
            .par_iter()
            .for_each(NamespaceSymbol::materialize_all);
    }

    fn materialize(self: &Arc<Self>) -> &NamespaceMembers {
        let _ = self.state.compare_exchange(
            MaterializationState::Unmaterialized as u8,
            MaterializationState::Materializing as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );

        // private copy; the slot may be cleared by a faster thread while we build from it
        if let Some(staging) = self.staging.load_full() {
            trace!(namespace = %self.full_name, groups = staging.groups.len(), "materializing namespace");
            let built = self.build_members(&staging.groups);
            if self.members.set(built).is_err() {
                trace!(namespace = %self.full_name, "namespace already published, dropping duplicate");
            }
        }

        self.state
            .store(MaterializationState::Materialized as u8, Ordering::Release);
        let _ = self.staging.swap(None);

        // published before the staging slot can be observed empty
        self.members.get_or_init(NamespaceMembers::default)
    }

    fn build_members(self: &Arc<Self>, groups: &[NamespaceGroup]) -> NamespaceMembers {
        let mut types = Vec::new();
        let mut children: IndexMap<String, Vec<NamespaceGroup>> = IndexMap::new();

        for group in groups {
            if group.name == self.full_name {
                for token in &group.types {
                    match self.source.type_name(*token) {
                        Some(name) => types.push(Arc::new(TypeSymbol {
                            token: *token,
                            name,
                        })),
                        None => {
                            let error = TypeNotFound(*token);
                            debug!(%error, namespace = %self.full_name, "skipping type row");
                        }
                    }
                }
                continue;
            }

            let Some(rest) = self.relative_name(&group.name) else {
                let error = malformed_error!(
                    "Namespace group {} staged under {}",
                    group.name,
                    self.full_name
                );
                debug!(%error, "skipping namespace group");
                continue;
            };

            let segment = rest.split('.').next().unwrap_or(rest);
            children
                .entry(segment.to_string())
                .or_default()
                .push(group.clone());
        }

        let namespaces = children
            .into_iter()
            .map(|(name, groups)| NamespaceSymbol::child(self, name, groups))
            .collect();

        NamespaceMembers { types, namespaces }
    }

    /// The part of a descendant's full name below this namespace
    fn relative_name<'a>(&self, descendant: &'a str) -> Option<&'a str> {
        if self.full_name.is_empty() {
            return Some(descendant);
        }
        descendant
            .strip_prefix(self.full_name.as_str())?
            .strip_prefix('.')
            .filter(|rest| !rest.is_empty())
    }
}

impl std::fmt::Debug for NamespaceSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamespaceSymbol")
            .field("full_name", &self.full_name)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
