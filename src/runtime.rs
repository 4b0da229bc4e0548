//! Runtime helpers shared across binaries.
//!
//! Centralizes catalog source selection and log setup so every entry point
//! honors the same flags and environment variables.

use crate::catalog::ExampleCatalog;
use anyhow::Result;
use std::borrow::Cow;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable naming a catalog document to use instead of the
/// built-in table.
pub const CATALOG_ENV: &str = "RXVIZ_EXAMPLES_CATALOG";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Where the active catalog comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl CatalogSource {
    /// Pick a source: explicit flag, then `RXVIZ_EXAMPLES_CATALOG`, then the
    /// built-in table.
    pub fn resolve(flag: Option<PathBuf>) -> Self {
        Self::resolve_with(flag, env::var_os(CATALOG_ENV))
    }

    /// Same as `resolve` with the environment value supplied by the caller.
    ///
    /// Empty or whitespace-only values are ignored.
    pub fn resolve_with(flag: Option<PathBuf>, env_value: Option<OsString>) -> Self {
        if let Some(path) = flag {
            return CatalogSource::File(path);
        }
        match env_value {
            Some(value) if !value.to_string_lossy().trim().is_empty() => {
                CatalogSource::File(PathBuf::from(value))
            }
            Some(_) => {
                warn!("{CATALOG_ENV} is set but blank; using built-in example catalog");
                CatalogSource::Builtin
            }
            None => CatalogSource::Builtin,
        }
    }

    /// Load the catalog this source points at.
    pub fn load(&self) -> Result<Cow<'static, ExampleCatalog>> {
        match self {
            CatalogSource::Builtin => {
                debug!("using built-in example catalog");
                Ok(Cow::Borrowed(ExampleCatalog::builtin()))
            }
            CatalogSource::File(path) => {
                info!(path = %path.display(), "loading example catalog from file");
                ExampleCatalog::load(path).map(Cow::Owned)
            }
        }
    }
}

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `warn` when `RUST_LOG` is unset or invalid. Safe to call more
/// than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_LEVEL))
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn flag_wins_over_environment() {
        let source = CatalogSource::resolve_with(
            Some(PathBuf::from("flag.json")),
            Some(OsString::from("env.json")),
        );
        assert_eq!(source, CatalogSource::File(PathBuf::from("flag.json")));
    }

    #[test]
    fn environment_used_when_flag_absent() {
        let source = CatalogSource::resolve_with(None, Some(OsString::from("env.json")));
        assert_eq!(source, CatalogSource::File(PathBuf::from("env.json")));
    }

    #[test]
    fn blank_environment_falls_back_to_builtin() {
        assert_eq!(
            CatalogSource::resolve_with(None, Some(OsString::from("  "))),
            CatalogSource::Builtin
        );
        assert_eq!(
            CatalogSource::resolve_with(None, None),
            CatalogSource::Builtin
        );
    }

    #[test]
    fn builtin_source_borrows_static_catalog() {
        let catalog = CatalogSource::Builtin.load().unwrap();
        assert!(matches!(catalog, Cow::Borrowed(_)));
        assert_eq!(catalog.len(), ExampleCatalog::builtin().len());
    }

    #[test]
    fn file_source_loads_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let document = ExampleCatalog::builtin().to_document();
        fs::write(&path, serde_json::to_string(&document).unwrap()).unwrap();

        let catalog = CatalogSource::File(path).load().unwrap();
        assert!(matches!(catalog, Cow::Owned(_)));
        assert_eq!(&*catalog, ExampleCatalog::builtin());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = CatalogSource::File(PathBuf::from("/nonexistent/catalog.json"))
            .load()
            .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/catalog.json"));
    }

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
