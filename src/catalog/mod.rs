//! Example catalog wiring.
//!
//! The built-in table lives in `builtin`; `ExampleCatalog` is the validated,
//! ordered view callers read from. Document types mirror
//! `schema/example_catalog.schema.json` for export and for loading catalogs
//! from disk.

mod builtin;
pub mod error;
pub mod identity;
pub mod index;
pub mod model;

pub use error::CatalogError;
pub use identity::{CUSTOM_KEY, ExampleKey, TimeWindow};
pub use index::ExampleCatalog;
pub use model::{
    CATALOG_SCHEMA_VERSION, CUSTOM_NAME, CatalogDocument, EntryBody, ExampleEntry, ExampleMap,
    is_placeholder_scaffold, load_document_from_path,
};
