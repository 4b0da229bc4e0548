//! Validated, ordered view of an example catalog.
//!
//! The index keeps entries in menu order and a key map for lookup. Building
//! one is strict about duplicates, blank names and code, and the presence of
//! the `custom` scaffold so the host tool never receives a catalog it cannot
//! render.

use crate::catalog::builtin::builtin_entries;
use crate::catalog::error::CatalogError;
use crate::catalog::identity::{CUSTOM_KEY, ExampleKey};
use crate::catalog::model::{
    CATALOG_SCHEMA_VERSION, CUSTOM_NAME, CatalogDocument, ExampleEntry, ExampleMap,
    is_placeholder_scaffold,
};
use crate::schema::validate_document;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

#[derive(Clone, Debug)]
/// Example entries plus a derived index keyed by example key.
pub struct ExampleCatalog {
    entries: Vec<ExampleEntry>,
    by_key: BTreeMap<ExampleKey, usize>,
}

impl ExampleCatalog {
    /// The table shipped with the crate, built on first use.
    pub fn builtin() -> &'static ExampleCatalog {
        static BUILTIN: OnceLock<ExampleCatalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let entries = builtin_entries();
            let by_key = key_positions(&entries);
            ExampleCatalog { entries, by_key }
        })
    }

    /// Build a catalog from entries in menu order, enforcing catalog invariants.
    pub fn from_entries(entries: Vec<ExampleEntry>) -> Result<Self> {
        let by_key = build_index(&entries)?;
        Ok(Self { entries, by_key })
    }

    /// Build a catalog from an already parsed document.
    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        validate_schema_version(&document.schema_version)?;
        Self::from_entries(document.examples.0)
    }

    /// Parse, schema-check and validate a catalog document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).context("parsing catalog document")?;
        validate_document(&value)?;
        // `Value` objects neither keep key order nor repeated keys; decode the
        // typed document from the text itself.
        let document: CatalogDocument =
            serde_json::from_str(text).context("decoding catalog document")?;
        Self::from_document(document)
    }

    /// Load and validate a catalog document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let catalog =
            Self::from_json_str(&text).with_context(|| format!("loading {}", path.display()))?;
        debug!(
            path = %path.display(),
            entries = catalog.len(),
            "loaded example catalog"
        );
        Ok(catalog)
    }

    /// Resolve an entry by key.
    ///
    /// Unknown keys yield `None`; no default entry is substituted.
    pub fn get(&self, key: &str) -> Option<&ExampleEntry> {
        self.by_key.get(key).map(|&idx| &self.entries[idx])
    }

    /// Like `get`, but reports the missing key as an error.
    pub fn require(&self, key: &str) -> Result<&ExampleEntry, CatalogError> {
        self.get(key).ok_or_else(|| CatalogError::KeyNotFound {
            key: ExampleKey::from(key),
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Entries in menu order.
    pub fn list(&self) -> &[ExampleEntry] {
        &self.entries
    }

    /// Keys in menu order.
    pub fn keys(&self) -> impl Iterator<Item = &ExampleKey> + '_ {
        self.entries.iter().map(|entry| &entry.key)
    }

    /// The blank scaffold entry.
    pub fn custom(&self) -> &ExampleEntry {
        // Every constructor guarantees the custom entry exists.
        &self.entries[self.by_key[CUSTOM_KEY]]
    }

    /// The entry the host tool shows first.
    pub fn default_entry(&self) -> &ExampleEntry {
        &self.entries[0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Versioned document for export.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            schema_version: CATALOG_SCHEMA_VERSION.to_string(),
            examples: ExampleMap(self.entries.clone()),
        }
    }
}

impl PartialEq for ExampleCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for ExampleCatalog {}

impl<'a> IntoIterator for &'a ExampleCatalog {
    type Item = &'a ExampleEntry;
    type IntoIter = std::slice::Iter<'a, ExampleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }
    if schema_version != CATALOG_SCHEMA_VERSION {
        bail!(
            "schema_version '{}' not supported (expected '{}')",
            schema_version,
            CATALOG_SCHEMA_VERSION
        );
    }
    Ok(())
}

fn key_positions(entries: &[ExampleEntry]) -> BTreeMap<ExampleKey, usize> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| (entry.key.clone(), idx))
        .collect()
}

fn build_index(entries: &[ExampleEntry]) -> Result<BTreeMap<ExampleKey, usize>> {
    if entries.is_empty() {
        bail!("catalog contains no examples");
    }

    let mut map = BTreeMap::new();
    for (idx, entry) in entries.iter().enumerate() {
        if !entry.key.is_well_formed() {
            bail!("example key '{}' must match ^[A-Za-z0-9_.-]+$", entry.key);
        }
        if map.contains_key(&entry.key) {
            bail!("duplicate example key {}", entry.key);
        }
        if entry.name.trim().is_empty() {
            bail!("example {} has an empty name", entry.key);
        }
        if entry.code.trim().is_empty() {
            bail!("example {} has no code", entry.key);
        }
        if entry.is_custom() {
            if entry.name != CUSTOM_NAME {
                bail!(
                    "example {} must be named '{CUSTOM_NAME}', got '{}'",
                    entry.key,
                    entry.name
                );
            }
            if !is_placeholder_scaffold(&entry.code) {
                bail!(
                    "example {} may only hold comments and empty declarations",
                    entry.key
                );
            }
        } else if is_placeholder_scaffold(&entry.code) {
            bail!("example {} holds only a placeholder scaffold", entry.key);
        }
        map.insert(entry.key.clone(), idx);
    }

    if !map.contains_key(CUSTOM_KEY) {
        bail!("catalog is missing the '{CUSTOM_KEY}' scaffold entry");
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::identity::TimeWindow;

    fn entry(key: &str, name: &str, code: &str) -> ExampleEntry {
        ExampleEntry {
            key: ExampleKey::from(key),
            name: name.to_string(),
            code: code.to_string(),
            time_window: TimeWindow::DEFAULT,
        }
    }

    fn custom() -> ExampleEntry {
        entry("custom", "Custom", "const {  } = Rx;")
    }

    #[test]
    fn builtin_passes_full_validation() {
        let builtin = ExampleCatalog::builtin();
        let rebuilt = ExampleCatalog::from_entries(builtin.list().to_vec()).unwrap();
        assert_eq!(&rebuilt, builtin);
    }

    #[test]
    fn builtin_is_initialised_once() {
        let first: *const ExampleCatalog = ExampleCatalog::builtin();
        let second: *const ExampleCatalog = ExampleCatalog::builtin();
        assert_eq!(first, second);
    }

    #[test]
    fn lookup_by_key() {
        let catalog =
            ExampleCatalog::from_entries(vec![entry("first", "First", "of(1)"), custom()])
                .unwrap();
        assert_eq!(catalog.get("first").map(|e| e.name.as_str()), Some("First"));
        assert!(catalog.get("missing").is_none());
        assert!(catalog.contains("custom"));
        assert_eq!(catalog.default_entry().key.as_str(), "first");
        assert_eq!(catalog.custom().name, "Custom");
    }

    #[test]
    fn require_reports_missing_key() {
        let catalog = ExampleCatalog::from_entries(vec![custom()]).unwrap();
        let err = catalog.require("nope").unwrap_err();
        assert_eq!(
            err,
            CatalogError::KeyNotFound {
                key: ExampleKey::from("nope")
            }
        );
        assert_eq!(err.to_string(), "unknown example 'nope'");
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = ExampleCatalog::from_entries(vec![
            entry("twice", "One", "of(1)"),
            entry("twice", "Two", "of(2)"),
            custom(),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate example key twice"));
    }

    #[test]
    fn rejects_blank_name_and_code() {
        let err = ExampleCatalog::from_entries(vec![entry("a", "  ", "of(1)"), custom()])
            .unwrap_err();
        assert!(err.to_string().contains("example a has an empty name"));

        let err =
            ExampleCatalog::from_entries(vec![entry("b", "B", "\n  \n"), custom()]).unwrap_err();
        assert!(err.to_string().contains("example b has no code"));
    }

    #[test]
    fn rejects_missing_custom_and_empty_catalog() {
        let err = ExampleCatalog::from_entries(vec![entry("a", "A", "of(1)")]).unwrap_err();
        assert!(err.to_string().contains("'custom' scaffold"));

        let err = ExampleCatalog::from_entries(Vec::new()).unwrap_err();
        assert!(err.to_string().contains("no examples"));
    }

    #[test]
    fn custom_entry_must_be_a_named_scaffold() {
        let renamed = vec![entry("custom", "Anything", "const {  } = Rx;")];
        let err = ExampleCatalog::from_entries(renamed).unwrap_err();
        assert!(err.to_string().contains("must be named 'Custom'"));

        let runnable = vec![entry("custom", "Custom", "fetch('/x'); Rx.interval(1)")];
        let err = ExampleCatalog::from_entries(runnable).unwrap_err();
        assert!(err.to_string().contains("only hold comments"));

        let second_scaffold = vec![entry("a", "A", "const {  } = Rx;"), custom()];
        let err = ExampleCatalog::from_entries(second_scaffold).unwrap_err();
        assert!(err.to_string().contains("example a holds only a placeholder"));
    }

    #[test]
    fn rejects_malformed_key() {
        let err = ExampleCatalog::from_entries(vec![entry("a b", "A", "of(1)"), custom()])
            .unwrap_err();
        assert!(err.to_string().contains("'a b'"));
    }

    #[test]
    fn rejects_unknown_schema_version() {
        let mut document = ExampleCatalog::builtin().to_document();
        document.schema_version = "rxviz_examples_v9".to_string();
        let err = ExampleCatalog::from_document(document).unwrap_err();
        assert!(err.to_string().contains("rxviz_examples_v9"));
    }

    #[test]
    fn document_text_round_trip_keeps_order() {
        let builtin = ExampleCatalog::builtin();
        let text = serde_json::to_string_pretty(&builtin.to_document()).unwrap();
        let parsed = ExampleCatalog::from_json_str(&text).unwrap();
        assert_eq!(&parsed, builtin);
        assert!(parsed.keys().eq(builtin.keys()));
    }
}
