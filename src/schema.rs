//! JSON Schema validation for catalog documents.
//!
//! The schema ships inside the binary so validation does not depend on the
//! working directory. Documents are checked against it before typed parsing so
//! errors point at the offending JSON path instead of a serde position.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

/// Bundled copy of `schema/example_catalog.schema.json`.
pub const CATALOG_SCHEMA_JSON: &str = include_str!("../schema/example_catalog.schema.json");

/// Parse and compile the bundled catalog schema.
pub fn compile_catalog_schema() -> Result<JSONSchema> {
    let raw: Value =
        serde_json::from_str(CATALOG_SCHEMA_JSON).context("parsing bundled catalog schema")?;
    let compiled = JSONSchema::compile(&raw)
        .map_err(|err| anyhow!("compiling bundled catalog schema: {err}"))?;
    Ok(compiled)
}

/// Validate a parsed document, reporting every violation at once.
pub fn validate_document(document: &Value) -> Result<()> {
    let compiled = compile_catalog_schema()?;
    if let Err(errors) = compiled.validate(document) {
        let details = errors
            .map(|err| {
                let path = err.instance_path.to_string();
                if path.is_empty() {
                    err.to_string()
                } else {
                    format!("{path}: {err}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        bail!("catalog document failed schema validation:\n{details}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG_SCHEMA_VERSION;
    use serde_json::json;

    fn bundled_schema_version() -> Option<String> {
        let raw: Value = serde_json::from_str(CATALOG_SCHEMA_JSON).ok()?;
        raw.pointer("/properties/schema_version/const")
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn minimal() -> Value {
        json!({
            "schema_version": CATALOG_SCHEMA_VERSION,
            "examples": {
                "custom": {"name": "Custom", "code": "const {  } = Rx;", "timeWindow": 10000}
            }
        })
    }

    #[test]
    fn bundled_schema_compiles_and_matches_crate_version() {
        compile_catalog_schema().unwrap();
        assert_eq!(
            bundled_schema_version().as_deref(),
            Some(CATALOG_SCHEMA_VERSION)
        );
    }

    #[test]
    fn accepts_minimal_document() {
        validate_document(&minimal()).unwrap();
    }

    #[test]
    fn rejects_wrong_version_and_bad_fields() {
        let mut wrong_version = minimal();
        wrong_version["schema_version"] = json!("rxviz_examples_v0");
        assert!(validate_document(&wrong_version).is_err());

        let mut zero_window = minimal();
        zero_window["examples"]["custom"]["timeWindow"] = json!(0);
        let err = validate_document(&zero_window).unwrap_err().to_string();
        assert!(err.contains("/examples/custom/timeWindow"), "{err}");

        let mut empty_name = minimal();
        empty_name["examples"]["custom"]["name"] = json!("");
        assert!(validate_document(&empty_name).is_err());

        let mut bad_key = minimal();
        bad_key["examples"]["has space"] =
            json!({"name": "X", "code": "of(1)", "timeWindow": 1});
        assert!(validate_document(&bad_key).is_err());
    }
}
