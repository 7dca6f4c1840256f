//! Build-pipeline hook surface
//!
//! This module defines the `BuildHooks` trait the host build tool drives,
//! and `RewritePlugin`, the concrete implementation wiring the catalog
//! loader and the substitution engine together.
//!
//! The host lifecycle is a strict two-phase contract: `build_start` is
//! awaited once before any file is processed (the catalog load is the only
//! suspending operation in the crate), then `transform` is called once per
//! file. After `build_start` resolves the catalog is read-only, so the host
//! may fan transforms out across files in any order, including in parallel.
//!
//! # Example
//!
//! ```ignore
//! use phrase_forge::{BuildHooks, PluginOptions, RewritePlugin, TransformOutcome};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut plugin = RewritePlugin::new(PluginOptions::default());
//!     plugin.build_start().await;
//!
//!     match plugin.transform(r#"const x = "Hello";"#, "src/app.js") {
//!         TransformOutcome::Rewritten(code) => println!("{}", code),
//!         TransformOutcome::Unchanged => {}
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::config::PluginOptions;
use crate::transform::{TransformOutcome, transform};

/// Hooks the host build pipeline invokes, in lifecycle order
///
/// `build_start` is async to support I/O-bound catalog resolution; the host
/// must await it before dispatching any `transform` call.
#[async_trait]
pub trait BuildHooks: Send + Sync {
    /// Hook identification, used by the host for its own logging
    fn name(&self) -> &str;

    /// Invoked once per pipeline run, before any file is transformed
    async fn build_start(&mut self);

    /// Invoked once per file with its text and identity
    ///
    /// Pure with respect to the loaded catalog: same inputs, same outcome.
    fn transform(&self, code: &str, id: &str) -> TransformOutcome;
}

/// The build-time substitution plugin
///
/// Construction validates the options (the extension allow-set is derived
/// once, up front). Until `build_start` runs, the plugin behaves as if the
/// catalog were empty and every transform is a no-op.
pub struct RewritePlugin {
    options: PluginOptions,
    allowed_extensions: Vec<String>,
    catalog: Catalog,
}

impl RewritePlugin {
    pub fn new(options: PluginOptions) -> Self {
        let allowed_extensions = options.extension_allow_set();
        RewritePlugin {
            options,
            allowed_extensions,
            catalog: Catalog::new(),
        }
    }

    pub fn with_defaults() -> Self {
        RewritePlugin::new(PluginOptions::default())
    }

    /// The currently loaded catalog (empty before `build_start`)
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[async_trait]
impl BuildHooks for RewritePlugin {
    fn name(&self) -> &str {
        "phrase-forge"
    }

    async fn build_start(&mut self) {
        // Re-resolves from scratch; any previous catalog is replaced wholesale
        self.catalog = Catalog::load(&self.options.translations_path).await;
    }

    fn transform(&self, code: &str, id: &str) -> TransformOutcome {
        transform(id, code, &self.catalog, &self.allowed_extensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_fixture(name: &str, content: &str) -> PathBuf {
        let path =
            std::env::temp_dir().join(format!("phrase-forge-plugin-{}-{}", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_plugin_name() {
        let plugin = RewritePlugin::with_defaults();
        assert_eq!(plugin.name(), "phrase-forge");
    }

    #[test]
    fn test_transform_before_build_start_is_noop() {
        let plugin = RewritePlugin::with_defaults();
        let result = plugin.transform(r#"const x = "Hello";"#, "src/app.js");
        assert_eq!(result, TransformOutcome::Unchanged);
    }

    #[tokio::test]
    async fn test_build_start_loads_catalog() {
        let path = write_fixture("load.json", r#"{"Hello": "你好"}"#);
        let mut plugin = RewritePlugin::new(PluginOptions {
            translations_path: path.to_string_lossy().into_owned(),
            ..PluginOptions::default()
        });
        plugin.build_start().await;
        assert_eq!(plugin.catalog().len(), 1);

        let result = plugin.transform(r#"const x = "Hello";"#, "src/app.js");
        assert_eq!(
            result,
            TransformOutcome::Rewritten(r#"const x = "你好";"#.to_string())
        );
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_build_start_fail_open_keeps_transforming() {
        let mut plugin = RewritePlugin::new(PluginOptions {
            translations_path: "/nonexistent/translations.json".to_string(),
            ..PluginOptions::default()
        });
        plugin.build_start().await;
        assert!(plugin.catalog().is_empty());

        let result = plugin.transform(r#"const x = "Hello";"#, "src/app.js");
        assert_eq!(result, TransformOutcome::Unchanged);
    }

    #[tokio::test]
    async fn test_build_start_replaces_catalog_wholesale() {
        let path = write_fixture("replace.json", r#"{"Hello": "你好"}"#);
        let mut plugin = RewritePlugin::new(PluginOptions {
            translations_path: path.to_string_lossy().into_owned(),
            ..PluginOptions::default()
        });
        plugin.build_start().await;
        assert_eq!(plugin.catalog().len(), 1);

        // Rewrite the resource; a second build_start must not merge
        std::fs::write(&path, r#"{"Save": "保存"}"#).unwrap();
        plugin.build_start().await;
        assert_eq!(plugin.catalog().len(), 1);
        assert_eq!(plugin.catalog().get("Hello"), None);
        assert_eq!(plugin.catalog().get("Save"), Some(&"保存".to_string()));
        std::fs::remove_file(path).ok();
    }
}
