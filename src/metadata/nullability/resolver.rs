use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use tracing::{debug, trace};

use crate::{
    metadata::{
        config::LoaderConfig,
        nullability::{overrides, transform, AnnotatedType, NullableFlags, SignatureKey},
        source::MetadataSource,
        token::Token,
    },
    Result,
};

/// The entity whose type is being annotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationTarget {
    /// Type of a field
    Field(Token),
    /// Type of a property
    Property(Token),
    /// Type of an event
    Event(Token),
    /// Return type (`ordinal` 0) or parameter `ordinal` (1-based) of a method
    Parameter {
        /// `MethodDef` or `MemberRef` token of the method
        method: Token,
        /// 0 = return type, 1..=N = parameters
        ordinal: usize,
    },
}

/// Resolves nullability annotations for member types of one module.
///
/// Sources are tried in a fixed order and never mixed:
/// 1. the override table, when it has an entry for the member's canonical key
/// 2. the nullable attribute on the target entity
/// 3. nothing: every reference-kind node is [`super::NullableAnnotation::Unknown`]
///
/// Failures of either source are silent, the result only ever degrades toward "unknown".
pub struct AnnotationResolver {
    source: Arc<dyn MetadataSource>,
    config: LoaderConfig,
    /// Canonical keys per method token, `None` if the member has no key
    keys: DashMap<Token, Option<Arc<str>>>,
    /// Module-level nullable context, computed on first use
    utilizes_nullable: OnceLock<bool>,
}

impl AnnotationResolver {
    /// Create a resolver over `source`
    pub fn new(source: Arc<dyn MetadataSource>, config: LoaderConfig) -> Self {
        AnnotationResolver {
            source,
            config,
            keys: DashMap::new(),
            utilizes_nullable: OnceLock::new(),
        }
    }

    /// Override table lookup: flags for position `ordinal` (0 = return type) of `key`
    #[must_use]
    pub fn lookup(key: &str, ordinal: usize) -> Option<&'static [bool]> {
        overrides::lookup(key, ordinal)
    }

    /// Annotate `tree` from `flags`, or return it unchanged if the flags do not fit.
    #[must_use]
    pub fn transform(&self, tree: &AnnotatedType, flags: &NullableFlags) -> AnnotatedType {
        match self.try_transform(tree, flags) {
            Ok(result) => result,
            Err(error) => {
                debug!(%error, "discarding nullable flags");
                tree.clone()
            }
        }
    }

    /// Annotate `tree` from `flags`.
    ///
    /// # Errors
    /// [`crate::Error::FlagCountMismatch`] if an explicit sequence does not have exactly one
    /// flag per reference-kind node, [`crate::Error::RecursionLimit`] if the tree is nested
    /// deeper than [`LoaderConfig::max_type_depth`].
    pub fn try_transform(
        &self,
        tree: &AnnotatedType,
        flags: &NullableFlags,
    ) -> Result<AnnotatedType> {
        transform::apply(tree, flags, self.config.max_type_depth)
    }

    /// Canonical override key of `method`, computed once per token
    pub fn signature_key(&self, method: Token) -> Option<Arc<str>> {
        if let Some(cached) = self.keys.get(&method) {
            return cached.value().clone();
        }

        let max_depth = self.config.max_type_depth;
        let key: Option<Arc<str>> = self.source.member_signature(method).and_then(|member| {
            match SignatureKey::for_member(&member, self.source.as_ref(), max_depth) {
                Ok(key) => key.map(Arc::from),
                Err(error) => {
                    debug!(%method, %error, "no signature key");
                    None
                }
            }
        });

        self.keys.entry(method).or_insert(key).value().clone()
    }

    /// Whether the module declares a nullable context
    pub fn utilizes_nullable_reference_types(&self) -> bool {
        *self.utilizes_nullable.get_or_init(|| {
            let opted_in = self.source.module_nullable_context();
            debug!(opted_in, "module nullable context");
            opted_in
        })
    }

    /// Override flags for `target`, if the table has an entry for it
    fn override_flags(&self, target: AnnotationTarget) -> Option<&'static [bool]> {
        if !self.config.use_override_table {
            return None;
        }

        let AnnotationTarget::Parameter { method, ordinal } = target else {
            return None;
        };

        let key = self.signature_key(method)?;
        let flags = Self::lookup(&key, ordinal)?;
        trace!(%key, ordinal, "nullable override hit");
        Some(flags)
    }

    /// Attribute flags for `target`, subject to configuration and the module opt-in
    fn attribute_flags(&self, target: AnnotationTarget) -> Option<NullableFlags> {
        if !self.config.honor_attributes {
            return None;
        }
        if self.config.require_module_opt_in && !self.utilizes_nullable_reference_types() {
            return None;
        }

        let handle = match target {
            AnnotationTarget::Field(token)
            | AnnotationTarget::Property(token)
            | AnnotationTarget::Event(token) => token,
            AnnotationTarget::Parameter { method, ordinal } => {
                self.source.parameter_row(method, ordinal)?
            }
        };

        self.source.attribute_flags(handle)
    }

    /// Annotate the type of `target`.
    ///
    /// An override entry takes total precedence: if present its flags are used and the
    /// attribute is never read. Without an override the attribute is tried. If the flags of
    /// the chosen source are absent or do not fit, every reference-kind node is marked unknown.
    pub fn resolve_nullability(
        &self,
        target: AnnotationTarget,
        tree: &AnnotatedType,
    ) -> AnnotatedType {
        if let Some(flags) = self.override_flags(target) {
            return match self.try_transform(tree, &NullableFlags::explicit(flags)) {
                Ok(result) => result,
                Err(error) => {
                    debug!(?target, %error, "unusable nullable override");
                    self.transform(tree, &NullableFlags::Wildcard)
                }
            };
        }

        if let Some(flags) = self.attribute_flags(target) {
            match self.try_transform(tree, &flags) {
                Ok(result) => return result,
                Err(error) => debug!(?target, %error, "unusable nullable attribute"),
            }
        }

        self.transform(tree, &NullableFlags::Wildcard)
    }
}
