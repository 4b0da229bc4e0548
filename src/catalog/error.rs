use crate::catalog::identity::ExampleKey;

/// Lookup failures for callers that prefer `?` over `Option`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown example '{key}'")]
    KeyNotFound { key: ExampleKey },
}
