//! Plugin configuration
//!
//! Options accepted from the host build tool, with defaults matching the
//! conventional bundler setup: a `translations.json` catalog next to the
//! build config, applied to plain and typed script sources including their
//! markup variants.

use serde::Deserialize;

/// Default location of the translation catalog, relative to the build root
pub const DEFAULT_TRANSLATIONS_PATH: &str = "./translations.json";

/// Default include patterns: plain/typed script sources and markup variants
pub const DEFAULT_INCLUDE: [&str; 4] = ["**/*.js", "**/*.jsx", "**/*.ts", "**/*.tsx"];

/// Configuration for the rewrite plugin
///
/// Host build tools typically pass this as part of their JSON configuration;
/// every field is optional and falls back to its default.
///
/// Note on `include`: only the extension allow-set derived from the patterns
/// is enforced. Full glob matching against file paths is a deliberate
/// simplification left to the host pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PluginOptions {
    /// Location of the catalog resource (path, resolved to absolute at load)
    pub translations_path: String,
    /// Glob-like patterns declaring which files participate
    pub include: Vec<String>,
}

impl Default for PluginOptions {
    fn default() -> Self {
        PluginOptions {
            translations_path: DEFAULT_TRANSLATIONS_PATH.to_string(),
            include: DEFAULT_INCLUDE.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl PluginOptions {
    /// Derive the enforced extension allow-set from the include patterns
    ///
    /// Takes the final dot-segment of each pattern (`**/*.jsx` -> `jsx`),
    /// dropping patterns with no usable extension segment. Compute this once
    /// at plugin construction; it never changes afterwards.
    pub fn extension_allow_set(&self) -> Vec<String> {
        self.include
            .iter()
            .filter_map(|pattern| pattern.rsplit('.').next())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|ext| ext.to_string())
            .collect()
    }
}
