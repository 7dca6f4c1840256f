//! # phrase-forge
//!
//! Build-time textual substitution for internationalization. As source files
//! pass through a build pipeline, literal occurrences of source-language
//! phrases are rewritten to target-language phrases drawn from a translation
//! catalog. Files on disk are never modified; only the build output changes.
//!
//! Two components, driven in dependency order by the host pipeline:
//!
//! 1. **Catalog loader** ([`Catalog::load`]) - resolves the translation
//!    resource once at startup. Loading is fail-open: a missing or malformed
//!    catalog is reported and replaced with an empty one, so the build always
//!    proceeds (with zero substitutions at worst).
//! 2. **Substitution engine** ([`transform()`]) - per file, applies every
//!    catalog entry across four textual surface forms: `"phrase"`,
//!    `'phrase'`, `` `phrase` ``, and `>phrase<` markup text nodes. Matching
//!    is exact literal substring match; the engine never parses the source
//!    language.
//!
//! [`RewritePlugin`] ties both together behind the [`BuildHooks`] trait that
//! the host build tool drives.
//!
//! ```ignore
//! use phrase_forge::{BuildHooks, PluginOptions, RewritePlugin};
//!
//! let mut plugin = RewritePlugin::new(PluginOptions::default());
//! plugin.build_start().await; // once, before any file
//! let outcome = plugin.transform(code, "src/app.jsx"); // once per file
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod plugin;
pub mod transform;

pub use catalog::{Catalog, load_catalog_from_file};
pub use config::{DEFAULT_INCLUDE, DEFAULT_TRANSLATIONS_PATH, PluginOptions};
pub use error::{CatalogError, CatalogResult};
pub use plugin::{BuildHooks, RewritePlugin};
pub use transform::{SurfaceForm, TransformOutcome, is_eligible, transform};
