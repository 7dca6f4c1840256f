//! Translation catalog and its loader
//!
//! The catalog maps source-language phrases to target-language phrases. It is
//! built once at pipeline startup and read-only afterwards, so per-file
//! transforms can share it freely.
//!
//! The catalog resource is a JSON document with one of two shapes:
//! ```json
//! {
//!     "@metadata": { "...": "ignored" },
//!     "Hello": "你好",
//!     "Save": "保存"
//! }
//! ```
//! or the same mapping wrapped under a `"default"` key, mirroring the
//! default-export convention of module-based translation files:
//! ```json
//! { "default": { "Hello": "你好" } }
//! ```
//!
//! Loading is fail-open: a broken translation source must never block the
//! build. `Catalog::load` reports the failure and returns an empty catalog;
//! the strict `load_catalog_from_file` is available for hosts that want the
//! error itself.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::error::{CatalogError, CatalogResult};

/// Phrase-to-phrase translation mapping, immutable after load
///
/// Backed by a `BTreeMap` so that iteration order is deterministic
/// (lexicographic by source phrase). When one source phrase overlaps another,
/// replacement results depend on application order; sorted-key order is the
/// authoritative order for this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog(BTreeMap<String, String>);

impl Catalog {
    pub fn new() -> Self {
        Catalog(BTreeMap::new())
    }

    /// Insert a translation entry
    ///
    /// Empty source phrases are rejected with a warning: an empty literal
    /// would match pathologically everywhere once bracketed.
    pub fn with_translation(&mut self, source: &str, target: &str) -> &mut Self {
        if source.is_empty() {
            eprintln!("[phrase-forge] Warning: empty source phrase skipped");
            return self;
        }
        self.0.insert(source.to_owned(), target.to_owned());
        self
    }

    pub fn get(&self, source: &str) -> Option<&String> {
        self.0.get(source)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in lexicographic order of the source phrase
    pub fn entries(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    /// Load the catalog from `path`, falling back to empty on any failure
    ///
    /// This is the pipeline-startup entry point. On success it logs the
    /// number of entries loaded; on failure it emits a diagnostic and returns
    /// an empty catalog, so the build proceeds with zero substitutions rather
    /// than aborting. Calling it again re-resolves from scratch and the
    /// result replaces any previous catalog wholesale.
    pub async fn load(path: &str) -> Catalog {
        match load_catalog_from_file(Path::new(path)).await {
            Ok(catalog) => {
                println!("[phrase-forge] loaded {} translations", catalog.len());
                catalog
            }
            Err(error) => {
                eprintln!("[phrase-forge] Failed to load translations: {}", error);
                Catalog::new()
            }
        }
    }
}

/// Load a catalog from a single JSON file, surfacing errors
///
/// The path is resolved to an absolute path first, so load behavior does not
/// depend on the caller's working directory.
///
/// # Errors
/// - File not found or unreadable (`ReadError`)
/// - Invalid JSON (`ParseError`)
/// - Root (or its `"default"` wrapper) is not an object (`ShapeError`)
pub async fn load_catalog_from_file(path: &Path) -> CatalogResult<Catalog> {
    let absolute = std::path::absolute(path).map_err(|e| {
        CatalogError::ReadError(format!("Failed to resolve '{}': {}", path.display(), e))
    })?;

    let content = tokio::fs::read_to_string(&absolute).await.map_err(|e| {
        CatalogError::ReadError(format!("Failed to read '{}': {}", absolute.display(), e))
    })?;

    let json: Value = serde_json::from_str(&content).map_err(|e| {
        CatalogError::ParseError(format!("Invalid JSON in '{}': {}", absolute.display(), e))
    })?;

    let obj = json.as_object().ok_or_else(|| {
        CatalogError::ShapeError(format!(
            "Invalid catalog in '{}': root must be an object",
            absolute.display()
        ))
    })?;

    // Accept the default-export wrapper shape
    let obj = match obj.get("default") {
        Some(inner) => inner.as_object().ok_or_else(|| {
            CatalogError::ShapeError(format!(
                "Invalid catalog in '{}': \"default\" must be an object",
                absolute.display()
            ))
        })?,
        None => obj,
    };

    let mut catalog = Catalog::new();
    for (source, value) in obj {
        // Skip metadata entries
        if source.starts_with('@') {
            continue;
        }

        if let Some(target) = value.as_str() {
            catalog.with_translation(source, target);
        } else {
            eprintln!(
                "[phrase-forge] Warning: translation for '{}' is not a string, skipping",
                source
            );
        }
    }

    Ok(catalog)
}
