//! Metadata model of a loaded module.
//!
//! This module holds what the compiler front end needs beyond raw table access: decoded
//! signatures, nullability annotations of member types, and the namespace tree.
//!
//! # Key Components
//!
//! - [`module::PeModule`] - One loaded module with its resolver and namespace tree
//! - [`source::MetadataSource`] - Row, heap and attribute access provided by the reader
//! - [`token`] - Metadata table row references used throughout .NET
//! - [`signatures`] - Decoded type and method signatures
//! - [`typesystem`] - Type names and flavors
//! - [`nullability`] - Annotated type trees and their resolution
//! - [`namespace`] - Lazily materialized namespace symbols
//! - [`config::LoaderConfig`] - Loader options

/// Loader options and presets
pub mod config;
/// Implementation of a loaded module
pub mod module;
/// Namespace grouping and lazy materialization
pub mod namespace;
/// Nullability annotations on member types
pub mod nullability;
/// Implementation of method and type signatures
pub mod signatures;
/// The interface consumed from the metadata reader
pub mod source;
/// Commonly used tokens and table identifiers
pub mod token;
/// Type names, flavors and primitive naming
pub mod typesystem;
