//! Pattern substitution engine
//!
//! For each eligible file, every catalog entry is applied across a fixed set
//! of textual surface forms: double-quoted strings, single-quoted strings,
//! template strings, and markup text nodes. Matching is exact literal
//! substring match of the bracketed phrase; the engine never parses the
//! source language and never touches code structure outside those brackets.
//!
//! `transform` is a pure function of its inputs. Once the catalog is loaded
//! it is safe to call in parallel across files.

use crate::catalog::Catalog;

/// Path marker identifying dependency/vendor code, which is never rewritten
pub const DEPENDENCY_AREA_MARKER: &str = "node_modules";

/// Path marker identifying the catalog resource itself
const CATALOG_RESOURCE_MARKER: &str = "translations.";

/// A textual bracketing in which a phrase may appear verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceForm {
    /// `"phrase"`
    DoubleQuoted,
    /// `'phrase'`
    SingleQuoted,
    /// `` `phrase` ``
    Template,
    /// `>phrase<` between markup tags
    MarkupText,
}

impl SurfaceForm {
    /// All surface forms, in the order they are applied per entry
    pub const ALL: [SurfaceForm; 4] = [
        SurfaceForm::DoubleQuoted,
        SurfaceForm::SingleQuoted,
        SurfaceForm::Template,
        SurfaceForm::MarkupText,
    ];

    /// Opening and closing delimiter for this form
    pub fn delimiters(&self) -> (char, char) {
        match self {
            SurfaceForm::DoubleQuoted => ('"', '"'),
            SurfaceForm::SingleQuoted => ('\'', '\''),
            SurfaceForm::Template => ('`', '`'),
            SurfaceForm::MarkupText => ('>', '<'),
        }
    }

    /// Bracket a phrase in this form, e.g. `Hello` -> `"Hello"`
    pub fn wrap(&self, phrase: &str) -> String {
        let (open, close) = self.delimiters();
        format!("{}{}{}", open, phrase, close)
    }
}

/// Result of one per-file transform call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutcome {
    /// Nothing to do: the file was ineligible or contained no catalog phrase.
    /// The host keeps the original body and skips rewrite bookkeeping.
    Unchanged,
    /// At least one replacement occurred; the new body replaces the original
    /// in the build output only, never on disk.
    Rewritten(String),
}

impl TransformOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, TransformOutcome::Rewritten(_))
    }
}

/// Decide whether a file participates in substitution at all
///
/// Checked before any content scanning, in order: dependency-area files,
/// the catalog resource itself, then the extension allow-set. The extension
/// is the final dot-segment of the file id; an id with no dot is compared
/// whole and will not match any normal allow-set.
pub fn is_eligible(id: &str, allowed_extensions: &[String]) -> bool {
    if id.contains(DEPENDENCY_AREA_MARKER) || id.contains(CATALOG_RESOURCE_MARKER) {
        return false;
    }

    let ext = id.rsplit('.').next().unwrap_or(id);
    allowed_extensions.iter().any(|allowed| allowed == ext)
}

/// Apply every catalog entry to `body` across all surface forms
///
/// Entries are applied in catalog order (lexicographic by source phrase);
/// within an entry, each surface form replaces all of its non-overlapping
/// occurrences in one pass. Matching is exact literal: a source phrase
/// containing regex metacharacters matches only itself.
///
/// # Arguments
/// * `id` - File identity (path) as supplied by the host pipeline
/// * `body` - Raw file text; never mutated in place
/// * `catalog` - The loaded translation catalog
/// * `allowed_extensions` - Extension allow-set derived from the options
///
/// # Returns
/// `Rewritten` with the cumulative result if at least one replacement
/// occurred for any entry under any form, `Unchanged` otherwise.
pub fn transform(
    id: &str,
    body: &str,
    catalog: &Catalog,
    allowed_extensions: &[String],
) -> TransformOutcome {
    if !is_eligible(id, allowed_extensions) {
        return TransformOutcome::Unchanged;
    }

    let mut rewritten = body.to_owned();
    let mut changed = false;

    for (source, target) in catalog.entries() {
        for form in SurfaceForm::ALL {
            let needle = form.wrap(source);
            if rewritten.contains(&needle) {
                rewritten = rewritten.replace(&needle, &form.wrap(target));
                changed = true;
            }
        }
    }

    if changed {
        TransformOutcome::Rewritten(rewritten)
    } else {
        TransformOutcome::Unchanged
    }
}
