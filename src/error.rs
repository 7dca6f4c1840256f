/// Error types for catalog loading
///
/// These errors are only surfaced by the strict loader entry point
/// (`load_catalog_from_file`). The fail-open entry point (`Catalog::load`)
/// recovers from all of them by falling back to an empty catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog resource could not be resolved or read
    ReadError(String),
    /// The catalog resource is not valid JSON
    ParseError(String),
    /// The catalog resource parsed, but is not a flat string-to-string mapping
    ShapeError(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::ReadError(msg) => write!(f, "Read error: {}", msg),
            CatalogError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            CatalogError::ShapeError(msg) => write!(f, "Shape error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Result type for catalog loading operations
pub type CatalogResult<T> = Result<T, CatalogError>;
