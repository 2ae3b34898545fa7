//! Lazily materialized namespace tables of a loaded module.
//!
//! Loading a module only groups its type rows by namespace. Each [`NamespaceSymbol`] keeps the
//! groups for itself and its descendants until somebody asks for its members; then the groups
//! are turned into [`TypeSymbol`]s and child namespaces, published once, and dropped.
//!
//! # Key Components
//!
//! - [`group_types_by_namespace`]: Sorted grouping of type rows by namespace name
//! - [`NamespaceSymbol`]: A namespace with lazily built members
//! - [`NamespaceMembers`]: The published types and child namespaces
//! - [`MaterializationState`]: Unmaterialized, Materializing, Materialized
//!
//! # Thread Safety
//!
//! Materialization never blocks on another thread's build. Racing first readers each build
//! from their own copy of the staging data, the first to publish wins and everybody returns
//! the published members. Children are split on the exact next name segment, so `Foo` and
//! `foo` are always two namespaces.

mod grouping;
mod symbol;

pub use grouping::{group_types_by_namespace, NameComparer, NamespaceGroup};
pub use symbol::{
    MaterializationState, NamespaceMembers, NamespaceSymbol, NamespaceSymbolRc, TypeSymbol,
    TypeSymbolRc,
};
