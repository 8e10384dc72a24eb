use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Block types named by the page schema contract
pub const KNOWN_BLOCK_TYPES: [&str; 9] = [
    "hero",
    "features",
    "pricing",
    "testimonials",
    "faq",
    "cta",
    "gallery",
    "about",
    "contact",
];

/// Block type resolved from the raw `type` string of a block.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Every type
/// without dedicated normalization or rendering logic, including the known
/// `gallery`, `about` and `contact` types, lands in `Unsupported` carrying the
/// trimmed original spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Hero,
    Features,
    Pricing,
    Cta,
    Testimonials,
    Faq,
    Unsupported(String),
}

impl BlockKind {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_lowercase().as_str() {
            "hero" => BlockKind::Hero,
            "features" => BlockKind::Features,
            "pricing" => BlockKind::Pricing,
            "cta" => BlockKind::Cta,
            "testimonials" => BlockKind::Testimonials,
            "faq" => BlockKind::Faq,
            _ => BlockKind::Unsupported(trimmed.to_string()),
        }
    }

    /// Parse the `type` field of a block object; a missing or non-string type
    /// is unsupported with an empty name.
    pub fn of_block(block: &Value) -> Self {
        Self::parse(block.get("type").and_then(Value::as_str).unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        match self {
            BlockKind::Hero => "hero",
            BlockKind::Features => "features",
            BlockKind::Pricing => "pricing",
            BlockKind::Cta => "cta",
            BlockKind::Testimonials => "testimonials",
            BlockKind::Faq => "faq",
            BlockKind::Unsupported(name) => name,
        }
    }

    /// Whether the type belongs to the contract's closed set of block types
    pub fn is_known(&self) -> bool {
        let lowered = self.as_str().to_lowercase();
        KNOWN_BLOCK_TYPES.contains(&lowered.as_str())
    }
}

/// A single structural problem reported by the JSON-Schema check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SchemaViolation {
    /// Location inside the document, `$` for the root
    pub path: String,
    /// Human readable description from the schema validator
    pub message: String,
}

/// Machine readable outcome of validating one raw schema document
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Whether the document passed parsing and the structural check
    pub valid: bool,
    /// Deduplicated identifiers of the business-rule fixes applied
    #[serde(default)]
    pub auto_fixes: Vec<String>,
    /// Non-fatal findings such as unknown block types
    #[serde(default)]
    pub warnings: Vec<String>,
    /// Fatal error message when the document was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Structural problems when the document failed the schema check
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<SchemaViolation>,
    /// The normalized document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<Value>,
}

/// Summary of a static build, the set of files a publisher uploads
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
    /// Project identifier the build directory is keyed by
    pub project_id: String,
    /// Absolute or configured path of the build directory
    pub build_dir: String,
    /// Files written, relative to the build directory with `/` separators
    pub files: Vec<String>,
    /// Fixes applied while normalizing the schema before rendering
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auto_fixes: Vec<String>,
}
