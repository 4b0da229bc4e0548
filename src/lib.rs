//! Catalog of RxViz example snippets.
//!
//! Each example pairs a stable key with a display name, a block of RxJS code
//! for the visualizer to run, and a time window in milliseconds. The code is
//! carried as opaque text; nothing in this crate parses or executes it.
//!
//! `ExampleCatalog::builtin()` exposes the shipped table. Catalog documents
//! (see `schema/example_catalog.schema.json`) can be exported and loaded back
//! for hosts that want to edit or extend the set.

pub mod catalog;
pub mod runtime;
pub mod schema;

pub use catalog::{
    CATALOG_SCHEMA_VERSION, CUSTOM_KEY, CUSTOM_NAME, CatalogDocument, CatalogError, EntryBody,
    ExampleCatalog, ExampleEntry, ExampleKey, ExampleMap, TimeWindow, is_placeholder_scaffold,
    load_document_from_path,
};
pub use runtime::{CATALOG_ENV, CatalogSource, init_tracing};
pub use schema::validate_document;

/// Look up a built-in example by key.
pub fn get(key: &str) -> Option<&'static ExampleEntry> {
    ExampleCatalog::builtin().get(key)
}

/// Built-in examples in menu order.
pub fn list() -> &'static [ExampleEntry] {
    ExampleCatalog::builtin().list()
}

/// Built-in example keys in menu order.
pub fn keys() -> impl Iterator<Item = &'static ExampleKey> {
    ExampleCatalog::builtin().keys()
}
