//! Loader configuration for nullability decoding and namespace tables
//!
//! The defaults reproduce what a compiler front end expects when importing a module: override
//! table first, attribute data second, no module opt-in required, ordinal (case-sensitive)
//! namespace ordering.

use crate::metadata::namespace::NameComparer;

/// Configuration for annotation decoding and symbol table construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct LoaderConfig {
    /// Consult the built-in override table for well-known framework members
    pub use_override_table: bool,

    /// Decode nullable attributes attached to members and parameters
    pub honor_attributes: bool,

    /// Only honor attributes in modules that carry the module-level nullable marker
    pub require_module_opt_in: bool,

    /// Ordering used when grouping type rows by namespace
    /// Names that only differ by case are never merged, whatever the comparer
    pub namespace_comparer: NameComparer,

    /// Maximum nesting depth of a type tree (default: 64)
    pub max_type_depth: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            use_override_table: true,
            honor_attributes: true,
            require_module_opt_in: false,
            namespace_comparer: NameComparer::Ordinal,
            max_type_depth: 64,
        }
    }
}

impl LoaderConfig {
    /// Attribute data only, the override table is ignored
    #[must_use]
    pub fn attributes_only() -> Self {
        Self {
            use_override_table: false,
            ..Self::default()
        }
    }

    /// Every reference type is left unknown
    ///
    /// Useful for consumers that do not track nullability at all.
    #[must_use]
    pub fn oblivious() -> Self {
        Self {
            use_override_table: false,
            honor_attributes: false,
            ..Self::default()
        }
    }

    /// Only trust attributes of modules that declare a nullable context
    #[must_use]
    pub fn strict() -> Self {
        Self {
            require_module_opt_in: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoaderConfig::default();
        assert!(config.use_override_table);
        assert!(config.honor_attributes);
        assert!(!config.require_module_opt_in);
        assert_eq!(config.namespace_comparer, NameComparer::Ordinal);
        assert_eq!(config.max_type_depth, 64);
    }

    #[test]
    fn test_presets() {
        assert!(!LoaderConfig::attributes_only().use_override_table);
        assert!(LoaderConfig::attributes_only().honor_attributes);

        let oblivious = LoaderConfig::oblivious();
        assert!(!oblivious.use_override_table && !oblivious.honor_attributes);

        assert!(LoaderConfig::strict().require_module_opt_in);
    }
}
