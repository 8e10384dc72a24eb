use crate::ir::*;
use schemars::{schema_for, JsonSchema};
use serde_json::Value;
use std::collections::BTreeMap;

/// Draft-07 page schema bundled at build time
pub const PAGE_SCHEMA_SOURCE: &str = include_str!("../schema/page_schema.json");

/// Parse the bundled page schema document
pub fn page_schema_document() -> serde_json::Result<Value> {
    serde_json::from_str(PAGE_SCHEMA_SOURCE)
}

/// Generate JSON schemas for the report types emitted by the tooling
pub fn generate_schemas() -> serde_json::Result<BTreeMap<String, Value>> {
    let mut schemas = BTreeMap::new();

    schemas.insert("ValidationReport".to_string(), generate_schema::<ValidationReport>()?);
    schemas.insert("BuildReport".to_string(), generate_schema::<BuildReport>()?);
    schemas.insert("SchemaViolation".to_string(), generate_schema::<SchemaViolation>()?);

    Ok(schemas)
}

/// Generate a single schema for a given type
pub fn generate_schema<T: JsonSchema>() -> serde_json::Result<Value> {
    serde_json::to_value(schema_for!(T))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_schema_is_draft_07() {
        let doc = page_schema_document().expect("bundled schema parses");
        assert_eq!(doc["$schema"], "http://json-schema.org/draft-07/schema#");
        assert!(doc.get("required").is_none());
        assert_eq!(doc["properties"]["pages"]["type"], "array");
    }

    #[test]
    fn report_schemas_are_generated() {
        let schemas = generate_schemas().expect("schemas serialize");
        assert_eq!(schemas.len(), 3);
        let report = &schemas["ValidationReport"];
        assert!(report["properties"]["autoFixes"].is_object());
        assert!(schemas["BuildReport"]["properties"]["files"].is_object());
    }
}
