/// Catalog persistence — a JSON file keyed by type id.
///
/// The on-disk shape is one JSON object whose keys are rule ids and whose
/// values are the rule bodies:
///
/// ```json
/// {
///     "1": {
///         "type": "Локальная смета",
///         "name_tags": ["локальная смета", "лс"],
///         "internal_tags": ["локальная смета"],
///         "mask": "ЛС-ГС-ПНо-ПНл-ВЕРНН-КОММ"
///     }
/// }
/// ```
///
/// Key order in the file IS the classification precedence order, which is
/// why `serde_json` runs with the `preserve_order` feature here.
use super::rule::DocumentTypeRule;
use super::RuleCatalog;
use serde_json::Map;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Default catalog filename, created next to wherever the tool runs.
pub const DEFAULT_CATALOG_FILENAME: &str = "file_types_base.json";

/// Errors from loading or saving a catalog.
#[derive(Debug, Error)]
pub enum CatalogStoreError {
    /// The backing file does not exist yet.
    #[error("catalog file not found")]
    NotFound,

    #[error("catalog i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Where catalogs are loaded from and saved to.
///
/// A trait so the engine can run against any persistence — the standard
/// implementation is [`JsonCatalogStore`]; tests substitute in-memory
/// stores.
pub trait CatalogStore: Send + Sync {
    fn load(&self) -> Result<RuleCatalog, CatalogStoreError>;
    fn save(&self, catalog: &RuleCatalog) -> Result<(), CatalogStoreError>;
}

/// File-backed JSON store.
pub struct JsonCatalogStore {
    path: PathBuf,
}

impl JsonCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonCatalogStore {
    fn load(&self) -> Result<RuleCatalog, CatalogStoreError> {
        if !self.path.exists() {
            return Err(CatalogStoreError::NotFound);
        }
        let text = std::fs::read_to_string(&self.path)?;
        let entries: Map<String, serde_json::Value> = serde_json::from_str(&text)?;

        let mut rules = Vec::with_capacity(entries.len());
        for (id, body) in entries {
            let mut rule: DocumentTypeRule = serde_json::from_value(body)?;
            rule.id = id;
            rules.push(rule);
        }
        debug!("loaded {} catalog rules from {}", rules.len(), self.path.display());
        Ok(RuleCatalog::new(rules))
    }

    fn save(&self, catalog: &RuleCatalog) -> Result<(), CatalogStoreError> {
        let mut entries = Map::with_capacity(catalog.len());
        for rule in catalog.rules() {
            entries.insert(rule.id.clone(), serde_json::to_value(rule)?);
        }
        // Pretty-printed so users can edit the file by hand.
        let text = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, text)?;
        debug!("saved {} catalog rules to {}", catalog.len(), self.path.display());
        Ok(())
    }
}
