// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # nullscope
//!
//! Nullability decoding and lazy namespace tables for modules loaded from .NET metadata.
//!
//! A compiler front end that consumes compiled assemblies needs two things this crate provides
//! on top of a metadata reader:
//!
//! - **Nullability annotations** - The flat flag sequences of the nullable attribute are
//!   replayed onto the structure of member types, and well-known framework members that
//!   predate annotations get their flags from a built-in override table
//! - **Namespace tables** - The namespace tree of a module is built on first access, once,
//!   from any number of threads, without holding on to the grouping data afterwards
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use nullscope::prelude::*;
//!
//! fn inspect(source: Arc<dyn MetadataSource>, method: Token) {
//!     let module = PeModule::new(source, LoaderConfig::default());
//!
//!     if let Some(ret) = module.parameter_type(method, 0) {
//!         println!("return value: {}", ret.annotation);
//!     }
//!
//!     module.preload_namespaces();
//!     for ns in &module.global_namespace().members().namespaces {
//!         println!("namespace {}", ns.full_name());
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`metadata::source`] - The interface consumed from the metadata reader
//! - [`metadata::signatures`] - Decoded type signatures and their canonical display
//! - [`metadata::nullability`] - Annotated type trees, override table and resolver
//! - [`metadata::namespace`] - Namespace grouping and lazy materialization
//! - [`PeModule`] - Ties the above together for one module
//! - [`Error`] and [`Result`] - Error handling

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use nullscope::prelude::*;
///
/// let config = LoaderConfig::strict();
/// assert!(config.require_module_opt_in);
/// ```
pub mod prelude;

/// Metadata model, nullability decoding and namespace tables
pub mod metadata;

/// `nullscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `nullscope` Error type
///
/// # Examples
///
/// ```rust,no_run
/// use nullscope::{metadata::nullability::{AnnotatedType, NullableFlags}, Error};
/// use nullscope::metadata::signatures::TypeSignature;
///
/// let tree = AnnotatedType::reference(TypeSignature::String);
/// # let source: std::sync::Arc<dyn nullscope::metadata::source::MetadataSource> = unimplemented!();
/// let resolver = nullscope::metadata::nullability::AnnotationResolver::new(source, Default::default());
/// match resolver.try_transform(&tree, &NullableFlags::explicit(&[true, false])) {
///     Err(Error::FlagCountMismatch { expected, actual }) => println!("{expected} != {actual}"),
///     Err(e) => println!("Error: {}", e),
///     Ok(_) => {}
/// }
/// ```
pub use error::Error;

/// Loader options, see [`metadata::config::LoaderConfig`]
pub use metadata::config::LoaderConfig;

/// Main entry point, see [`metadata::module::PeModule`]
pub use metadata::module::PeModule;
