//! Serializable representation of an example catalog document.
//!
//! The `examples` object is the shape the host tool imports: key to
//! `{ name, code, timeWindow }`, in menu order. `ExampleMap` keeps that order
//! in both directions. Use `ExampleCatalog` for validation and lookup; use these
//! types when reading or writing documents directly.

use crate::catalog::identity::{ExampleKey, TimeWindow};
use anyhow::{Context, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::path::Path;

/// Document version written by this crate and the only one it accepts.
pub const CATALOG_SCHEMA_VERSION: &str = "rxviz_examples_v1";

#[derive(Clone, Debug, Eq, PartialEq)]
/// One named example: display label, opaque code payload and time window.
pub struct ExampleEntry {
    pub key: ExampleKey,
    pub name: String,
    pub code: String,
    pub time_window: TimeWindow,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
/// Borrowed entry body as it appears under its key in a document.
pub struct EntryBody<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub time_window: TimeWindow,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct OwnedEntryBody {
    name: String,
    code: String,
    time_window: TimeWindow,
}

impl ExampleEntry {
    /// The entry without its key, ready to serialize.
    pub fn body(&self) -> EntryBody<'_> {
        EntryBody {
            name: &self.name,
            code: &self.code,
            time_window: self.time_window,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.key.is_custom()
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
/// Ordered key to entry mapping.
///
/// Deserialization keeps document order and does not drop repeated keys;
/// `ExampleCatalog` reports those as duplicates.
pub struct ExampleMap(pub Vec<ExampleEntry>);

impl Serialize for ExampleMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.key, &entry.body())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ExampleMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ExampleMapVisitor)
    }
}

struct ExampleMapVisitor;

impl<'de> Visitor<'de> for ExampleMapVisitor {
    type Value = ExampleMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of example keys to { name, code, timeWindow }")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, body)) = access.next_entry::<ExampleKey, OwnedEntryBody>()? {
            entries.push(ExampleEntry {
                key,
                name: body.name,
                code: body.code,
                time_window: body.time_window,
            });
        }
        Ok(ExampleMap(entries))
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// Versioned catalog document as written by `rxviz-examples export`.
pub struct CatalogDocument {
    pub schema_version: String,
    pub examples: ExampleMap,
}

/// Name the `custom` entry must carry.
pub const CUSTOM_NAME: &str = "Custom";

/// True when `code` holds nothing but `//` comments and empty destructuring
/// declarations such as `const {  } = Rx;`.
///
/// This is a line-shape check, not a parse; the payload stays opaque.
pub fn is_placeholder_scaffold(code: &str) -> bool {
    code.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .all(|line| line.starts_with("//") || is_empty_destructuring(line))
}

fn is_empty_destructuring(line: &str) -> bool {
    let Some(rest) = line.strip_prefix("const") else {
        return false;
    };
    let Some(rest) = rest.trim_start().strip_prefix('{') else {
        return false;
    };
    let Some((inner, tail)) = rest.split_once('}') else {
        return false;
    };
    inner.trim().is_empty() && tail.trim_start().starts_with('=')
}

/// Read and parse a catalog document from disk without additional validation.
pub fn load_document_from_path(path: &Path) -> Result<CatalogDocument> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let document: CatalogDocument =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(document)
}
