/// Rule catalog — the ordered set of recognisable document types.
///
/// The catalog is a plain value owned by the caller; there is no global
/// instance. Entry order is classification precedence: the classifier walks
/// the rules front to back and stops at the first match, so more specific
/// types belong earlier in the catalog file.
///
/// [`RuleCatalog`] holds the rules and implements the mutation primitives;
/// [`ManagedCatalog`] binds a catalog to its backing [`store::CatalogStore`]
/// and writes back after every successful mutation.
pub mod defaults;
pub mod rule;
pub mod store;

pub use defaults::default_catalog;
pub use rule::{DocumentTypeRule, TagArea};
pub use store::{CatalogStore, CatalogStoreError, JsonCatalogStore, DEFAULT_CATALOG_FILENAME};

use tracing::{info, warn};

/// Ordered collection of document-type rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleCatalog {
    rules: Vec<DocumentTypeRule>,
}

impl RuleCatalog {
    /// Build a catalog from rules already in precedence order.
    pub fn new(rules: Vec<DocumentTypeRule>) -> Self {
        Self { rules }
    }

    /// All rules in precedence order.
    #[inline]
    pub fn rules(&self) -> &[DocumentTypeRule] {
        &self.rules
    }

    /// Look up a rule by id.
    pub fn get(&self, id: &str) -> Option<&DocumentTypeRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Number of rules in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the catalog contains no rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Append `tag` to the given area of rule `id`.
    ///
    /// Returns `false` — and changes nothing — when the id is unknown, the
    /// tag trims to empty, or the tag is already present in that area.
    /// Tags are stored trimmed but otherwise as entered; matching lowercases
    /// them later, removal compares them exactly.
    pub fn add_tag(&mut self, id: &str, tag: &str, area: TagArea) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }
        let Some(rule) = self.rules.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        let tags = rule.tags_mut(area);
        if tags.iter().any(|existing| existing == tag) {
            return false;
        }
        tags.push(tag.to_string());
        true
    }

    /// Remove the first exact (case-sensitive) occurrence of `tag` from the
    /// given area of rule `id`. Returns `false` when nothing was removed.
    pub fn remove_tag(&mut self, id: &str, tag: &str, area: TagArea) -> bool {
        let Some(rule) = self.rules.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        let tags = rule.tags_mut(area);
        match tags.iter().position(|existing| existing == tag) {
            Some(pos) => {
                tags.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replace the mask of rule `id`.
    ///
    /// The mask is stored trimmed. Setting a mask equal to the current one
    /// still counts as a successful mutation, mirroring how catalog editors
    /// have always behaved. Returns `false` for an unknown id or a mask
    /// that trims to empty.
    pub fn change_mask(&mut self, id: &str, new_mask: &str) -> bool {
        let new_mask = new_mask.trim();
        if new_mask.is_empty() {
            return false;
        }
        let Some(rule) = self.rules.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        rule.mask = new_mask.to_string();
        true
    }
}

/// A catalog bound to its backing store.
///
/// Reads go through [`catalog()`](Self::catalog); the three mutations are
/// forwarded to the inner [`RuleCatalog`] and, when they succeed, persisted
/// immediately — exactly one save per successful mutation, none for a
/// rejected one.
pub struct ManagedCatalog {
    catalog: RuleCatalog,
    store: Box<dyn CatalogStore>,
}

impl ManagedCatalog {
    /// Load the catalog from `store`, degrading to the built-in defaults.
    ///
    /// A missing catalog is seeded: the defaults are written back so the
    /// user has a file to edit. A malformed catalog falls back to the
    /// defaults but deliberately leaves the damaged file on disk for manual
    /// repair.
    pub fn open(store: Box<dyn CatalogStore>) -> Self {
        let catalog = match store.load() {
            Ok(catalog) => catalog,
            Err(CatalogStoreError::NotFound) => {
                let catalog = defaults::default_catalog();
                if let Err(err) = store.save(&catalog) {
                    warn!("could not seed default catalog: {err}");
                } else {
                    info!("no catalog found — seeded built-in defaults");
                }
                catalog
            }
            Err(err) => {
                warn!("failed to load catalog ({err}) — using built-in defaults");
                defaults::default_catalog()
            }
        };
        Self { catalog, store }
    }

    /// The current in-memory catalog.
    #[inline]
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// [`RuleCatalog::add_tag`], persisted on success.
    pub fn add_tag(&mut self, id: &str, tag: &str, area: TagArea) -> bool {
        let mutated = self.catalog.add_tag(id, tag, area);
        if mutated {
            self.persist();
        }
        mutated
    }

    /// [`RuleCatalog::remove_tag`], persisted on success.
    pub fn remove_tag(&mut self, id: &str, tag: &str, area: TagArea) -> bool {
        let mutated = self.catalog.remove_tag(id, tag, area);
        if mutated {
            self.persist();
        }
        mutated
    }

    /// [`RuleCatalog::change_mask`], persisted on success.
    pub fn change_mask(&mut self, id: &str, new_mask: &str) -> bool {
        let mutated = self.catalog.change_mask(id, new_mask);
        if mutated {
            self.persist();
        }
        mutated
    }

    /// Write the catalog back to the store.
    ///
    /// A failed save keeps the in-memory mutation and is reported via the
    /// log only — the mutation itself already happened and callers treat
    /// the operation as done.
    fn persist(&self) {
        if let Err(err) = self.store.save(&self.catalog) {
            warn!("failed to persist catalog: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn small_catalog() -> RuleCatalog {
        defaults::default_catalog()
    }

    // ── RuleCatalog mutations ────────────────────────────────────────────

    #[test]
    fn get_finds_rules_by_id() {
        let catalog = small_catalog();
        assert_eq!(catalog.get("1").map(|r| r.display_name.as_str()), Some("Локальная смета"));
        assert!(catalog.get("99").is_none());
    }

    #[test]
    fn add_tag_appends_to_the_requested_area() {
        let mut catalog = small_catalog();
        assert!(catalog.add_tag("1", "смета лок", TagArea::Name));
        let rule = catalog.get("1").unwrap();
        assert_eq!(rule.name_tags.last().map(String::as_str), Some("смета лок"));
        // Content area untouched.
        assert_eq!(rule.content_tags, ["локальная смета"]);
    }

    #[test]
    fn add_tag_rejects_unknown_id_duplicate_and_blank() {
        let mut catalog = small_catalog();
        assert!(!catalog.add_tag("99", "лс", TagArea::Name), "unknown id");
        assert!(!catalog.add_tag("1", "лс", TagArea::Name), "duplicate");
        assert!(!catalog.add_tag("1", "   ", TagArea::Name), "whitespace only");
        assert!(!catalog.add_tag("1", "", TagArea::Name), "empty");
    }

    #[test]
    fn add_tag_trims_surrounding_whitespace() {
        let mut catalog = small_catalog();
        assert!(catalog.add_tag("1", "  новый тэг  ", TagArea::Content));
        let rule = catalog.get("1").unwrap();
        assert!(rule.content_tags.iter().any(|t| t == "новый тэг"));
        // The trimmed form is now a duplicate.
        assert!(!catalog.add_tag("1", "новый тэг", TagArea::Content));
    }

    #[test]
    fn remove_tag_is_case_sensitive_exact_match() {
        let mut catalog = small_catalog();
        assert!(!catalog.remove_tag("1", "ЛС", TagArea::Name), "case differs");
        assert!(catalog.remove_tag("1", "лс", TagArea::Name));
        assert!(!catalog.remove_tag("1", "лс", TagArea::Name), "already gone");
        assert!(!catalog.remove_tag("99", "лс", TagArea::Name), "unknown id");
    }

    /// Adding a tag and removing it again restores the original tag set.
    #[test]
    fn add_then_remove_round_trips() {
        let mut catalog = small_catalog();
        let before = catalog.get("2").unwrap().name_tags.clone();
        assert!(catalog.add_tag("2", "объект", TagArea::Name));
        assert!(catalog.remove_tag("2", "объект", TagArea::Name));
        assert_eq!(catalog.get("2").unwrap().name_tags, before);
    }

    #[test]
    fn change_mask_replaces_and_rejects_blank() {
        let mut catalog = small_catalog();
        assert!(catalog.change_mask("1", " ЛС-НОВ "));
        assert_eq!(catalog.get("1").unwrap().mask, "ЛС-НОВ");
        assert!(!catalog.change_mask("1", "   "));
        assert_eq!(catalog.get("1").unwrap().mask, "ЛС-НОВ");
        assert!(!catalog.change_mask("99", "X"));
    }

    /// Setting the current mask again is still a successful mutation.
    #[test]
    fn change_mask_to_same_value_succeeds() {
        let mut catalog = small_catalog();
        let mask = catalog.get("1").unwrap().mask.clone();
        assert!(catalog.change_mask("1", &mask));
    }

    // ── ManagedCatalog persistence ───────────────────────────────────────

    /// Store that counts saves and can be pre-seeded with a load result.
    struct CountingStore {
        saves: Arc<AtomicUsize>,
        load_result: fn() -> Result<RuleCatalog, CatalogStoreError>,
    }

    impl CatalogStore for CountingStore {
        fn load(&self) -> Result<RuleCatalog, CatalogStoreError> {
            (self.load_result)()
        }
        fn save(&self, _catalog: &RuleCatalog) -> Result<(), CatalogStoreError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn counting_managed(
        load_result: fn() -> Result<RuleCatalog, CatalogStoreError>,
    ) -> (ManagedCatalog, Arc<AtomicUsize>) {
        let saves = Arc::new(AtomicUsize::new(0));
        let store = CountingStore {
            saves: saves.clone(),
            load_result,
        };
        (ManagedCatalog::open(Box::new(store)), saves)
    }

    /// Every successful mutation saves exactly once; rejected mutations
    /// never touch the store.
    #[test]
    fn successful_mutations_persist_exactly_once() {
        let (mut managed, saves) = counting_managed(|| Ok(defaults::default_catalog()));
        assert_eq!(saves.load(Ordering::SeqCst), 0, "open must not save");

        assert!(managed.add_tag("1", "тэг", TagArea::Name));
        assert_eq!(saves.load(Ordering::SeqCst), 1);

        assert!(!managed.add_tag("1", "тэг", TagArea::Name), "duplicate");
        assert_eq!(saves.load(Ordering::SeqCst), 1, "rejection must not save");

        assert!(managed.remove_tag("1", "тэг", TagArea::Name));
        assert_eq!(saves.load(Ordering::SeqCst), 2);

        assert!(managed.change_mask("1", "М"));
        assert_eq!(saves.load(Ordering::SeqCst), 3);

        assert!(!managed.change_mask("нет", "М"));
        assert_eq!(saves.load(Ordering::SeqCst), 3);
    }

    /// A missing catalog file is seeded with the defaults (one save).
    #[test]
    fn open_seeds_defaults_when_store_is_empty() {
        let (managed, saves) = counting_managed(|| Err(CatalogStoreError::NotFound));
        assert_eq!(saves.load(Ordering::SeqCst), 1, "defaults must be written");
        assert_eq!(managed.catalog().len(), defaults::default_catalog().len());
    }

    /// A malformed catalog falls back to defaults WITHOUT overwriting the
    /// damaged file.
    #[test]
    fn open_keeps_damaged_file_on_parse_failure() {
        let (managed, saves) = counting_managed(|| {
            Err(CatalogStoreError::Malformed(
                serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
            ))
        });
        assert_eq!(saves.load(Ordering::SeqCst), 0, "must not overwrite");
        assert!(!managed.catalog().is_empty());
    }
}
