use crate::ir::{BlockKind, SchemaViolation, ValidationReport};
use crate::locale::Locale;
use crate::normalize::{self, NormalizeLimits};
use crate::schema;
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

/// The bundled page schema could not be turned into a validator
#[derive(Error, Debug)]
#[error("LS0001: bundled page schema failed to compile: {0}")]
pub struct SchemaCompileError(String);

/// Fatal validation errors with diagnostic codes
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("LS1001: schema is not valid JSON: {0}")]
    NotJson(#[source] serde_json::Error),

    #[error("LS1002: document does not match page schema: {}", summarize(.violations))]
    SchemaMismatch { violations: Vec<SchemaViolation> },

    #[error("LS1003: failed to encode normalized schema: {0}")]
    Encode(#[source] serde_json::Error),
}

fn summarize(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.path, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// A schema that passed the structural check, after business-rule fixes
#[derive(Debug, Clone)]
pub struct Validated {
    /// Normalized document encoded as JSON
    pub normalized: String,
    /// Deduplicated fix identifiers in order of first occurrence
    pub auto_fixes: Vec<String>,
    /// Non-fatal findings, e.g. block types outside the known set
    pub warnings: Vec<String>,
}

/// Compiled page-schema validator.
///
/// Construct once at startup and share by reference; validation only reads
/// the compiled schema, so one instance serves concurrent callers.
pub struct Validator {
    schema: JSONSchema,
    limits: NormalizeLimits,
    locale: Locale,
}

impl Validator {
    pub fn new() -> Result<Self, SchemaCompileError> {
        Self::with_options(NormalizeLimits::default(), Locale::default())
    }

    pub fn with_options(
        limits: NormalizeLimits,
        locale: Locale,
    ) -> Result<Self, SchemaCompileError> {
        let document = schema::page_schema_document()
            .map_err(|e| SchemaCompileError(format!("schema document is not JSON: {}", e)))?;
        let compiled = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&document)
            .map_err(|e| SchemaCompileError(e.to_string()))?;

        Ok(Self {
            schema: compiled,
            limits,
            locale,
        })
    }

    pub fn limits(&self) -> &NormalizeLimits {
        &self.limits
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Parse, check against the page schema, then apply business-rule fixes
    pub fn validate(&self, raw: &[u8]) -> Result<Validated, ValidationError> {
        let mut doc: Value = serde_json::from_slice(raw).map_err(ValidationError::NotJson)?;
        self.check_structure(&doc)?;

        let warnings = block_warnings(&doc);
        let fixes = normalize::apply_business_rules(&mut doc, &self.limits, self.locale.phrases());
        let normalized = serde_json::to_string(&doc).map_err(ValidationError::Encode)?;

        Ok(Validated {
            normalized,
            auto_fixes: dedup_fixes(fixes),
            warnings,
        })
    }

    /// Validate and fold the outcome into a serializable report
    pub fn report(&self, raw: &[u8]) -> ValidationReport {
        match self.validate(raw) {
            Ok(validated) => ValidationReport {
                valid: true,
                normalized: serde_json::from_str(&validated.normalized).ok(),
                auto_fixes: validated.auto_fixes,
                warnings: validated.warnings,
                error: None,
                violations: Vec::new(),
            },
            Err(error) => {
                let violations = match &error {
                    ValidationError::SchemaMismatch { violations } => violations.clone(),
                    _ => Vec::new(),
                };
                ValidationReport {
                    valid: false,
                    auto_fixes: Vec::new(),
                    warnings: Vec::new(),
                    error: Some(error.to_string()),
                    violations,
                    normalized: None,
                }
            }
        }
    }

    fn check_structure(&self, doc: &Value) -> Result<(), ValidationError> {
        if let Err(errors) = self.schema.validate(doc) {
            let violations = errors
                .map(|error| SchemaViolation {
                    path: format_json_path(&error.instance_path.to_string()),
                    message: error.to_string(),
                })
                .collect();
            return Err(ValidationError::SchemaMismatch { violations });
        }
        Ok(())
    }
}

/// Format JSON path from instance path for better error messages
fn format_json_path(instance_path: &str) -> String {
    if instance_path.is_empty() {
        "$".to_string()
    } else {
        format!("${}", instance_path)
    }
}

fn block_warnings(doc: &Value) -> Vec<String> {
    let mut warnings = Vec::new();
    let pages = doc.get("pages").and_then(Value::as_array);
    for (page_index, page) in pages.into_iter().flatten().enumerate() {
        let blocks = page.get("blocks").and_then(Value::as_array);
        for (block_index, block) in blocks.into_iter().flatten().enumerate() {
            let kind = BlockKind::of_block(block);
            if !kind.is_known() {
                warnings.push(format!(
                    "page {} block {}: unknown block type '{}' will render as a placeholder",
                    page_index,
                    block_index,
                    kind.as_str()
                ));
            }
        }
    }
    warnings
}

fn dedup_fixes(fixes: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    fixes
        .into_iter()
        .filter(|fix| !fix.is_empty() && seen.insert(fix.clone()))
        .collect()
}
