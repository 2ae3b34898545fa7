//! Entry point tying a metadata source to its annotation resolver and namespace tables.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::metadata::{
    config::LoaderConfig,
    namespace::{group_types_by_namespace, NamespaceSymbol, NamespaceSymbolRc},
    nullability::{AnnotatedType, AnnotationResolver, AnnotationTarget},
    signatures::TypeSignature,
    source::{MemberKind, MetadataSource},
    token::Token,
};

/// A loaded module as seen by the compiler front end.
///
/// Member types come back annotated; the namespace tree is built on demand.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use nullscope::{metadata::module::PeModule, metadata::source::MetadataSource, LoaderConfig};
///
/// fn dump(source: Arc<dyn MetadataSource>) {
///     let module = PeModule::new(source, LoaderConfig::default());
///     for ns in &module.global_namespace().members().namespaces {
///         println!("{}", ns.full_name());
///     }
/// }
/// ```
pub struct PeModule {
    source: Arc<dyn MetadataSource>,
    config: LoaderConfig,
    resolver: AnnotationResolver,
    global: OnceLock<NamespaceSymbolRc>,
}

impl PeModule {
    /// Wrap `source`
    pub fn new(source: Arc<dyn MetadataSource>, config: LoaderConfig) -> Self {
        PeModule {
            resolver: AnnotationResolver::new(source.clone(), config),
            source,
            config,
            global: OnceLock::new(),
        }
    }

    /// The configuration this module was loaded with
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// The annotation resolver of this module
    #[must_use]
    pub fn resolver(&self) -> &AnnotationResolver {
        &self.resolver
    }

    /// The global namespace; its members are materialized on first access
    pub fn global_namespace(&self) -> &NamespaceSymbolRc {
        self.global.get_or_init(|| {
            let groups = group_types_by_namespace(
                self.source.type_rows(),
                self.source.forwarded_namespaces(),
                self.config.namespace_comparer,
            );
            debug!(groups = groups.len(), "grouped type rows by namespace");
            NamespaceSymbol::global(self.source.clone(), groups)
        })
    }

    /// Materialize the whole namespace tree up front
    pub fn preload_namespaces(&self) {
        self.global_namespace().materialize_all();
    }

    /// Annotated type of a field, `None` if the field's signature is unavailable or malformed
    pub fn field_type(&self, field: Token) -> Option<AnnotatedType> {
        let member = self.source.member_signature(field)?;
        let MemberKind::Field(signature) = &member.kind else {
            return None;
        };
        self.annotate(AnnotationTarget::Field(field), &signature.base)
    }

    /// Annotated return type (`ordinal` 0) or parameter type (`ordinal` 1..=N) of a method
    pub fn parameter_type(&self, method: Token, ordinal: usize) -> Option<AnnotatedType> {
        let member = self.source.member_signature(method)?;
        let parameter = member.method()?.by_ordinal(ordinal)?;
        self.annotate(
            AnnotationTarget::Parameter { method, ordinal },
            &parameter.base,
        )
    }

    /// Annotated type of a property or event with an already decoded signature
    pub fn annotate(&self, target: AnnotationTarget, signature: &TypeSignature) -> Option<AnnotatedType> {
        match AnnotatedType::from_signature(signature, self.config.max_type_depth) {
            Ok(tree) => Some(self.resolver.resolve_nullability(target, &tree)),
            Err(error) => {
                debug!(?target, %error, "cannot build type tree");
                None
            }
        }
    }
}
