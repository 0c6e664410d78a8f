use std::path::{Path, PathBuf};

use assess_core::model::{Catalog, CatalogDraft};
use tracing::{debug, info};

use crate::error::CatalogLoadError;

const BUILTIN_CATALOG_JSON: &str = include_str!("../assets/feedback_assessment.json");

/// Where the question catalog comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// The embedded "Giving Constructive Feedback" assessment.
    #[default]
    Builtin,
    /// A JSON file with the same schema as the embedded catalog.
    File(PathBuf),
}

impl CatalogSource {
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Builtin, Self::File)
    }

    /// Read, parse and validate the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadError` on I/O failure, malformed JSON, or an invalid catalog.
    pub fn load(&self) -> Result<Catalog, CatalogLoadError> {
        let catalog = match self {
            CatalogSource::Builtin => parse_catalog(BUILTIN_CATALOG_JSON)?,
            CatalogSource::File(path) => load_catalog_file(path)?,
        };
        info!(
            title = catalog.title(),
            sections = catalog.section_count(),
            questions = catalog.total_questions(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

/// Parse a catalog from its JSON form.
///
/// # Errors
///
/// Returns `CatalogLoadError::Parse` or `CatalogLoadError::Invalid`.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogLoadError> {
    let draft: CatalogDraft = serde_json::from_str(json)?;
    Ok(draft.validate()?)
}

fn load_catalog_file(path: &Path) -> Result<Catalog, CatalogLoadError> {
    debug!(path = %path.display(), "reading catalog file");
    let json = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&json)
}

/// The embedded assessment catalog.
///
/// # Errors
///
/// Returns `CatalogLoadError` only if the embedded asset is corrupt.
pub fn builtin_catalog() -> Result<Catalog, CatalogLoadError> {
    CatalogSource::Builtin.load()
}
