//! Page schema contract for Landly: the Draft-07 structural check, the
//! business-rule normalizer and the lenient prop accessors shared with the
//! static renderer.

pub mod config;
pub mod ir;
pub mod locale;
pub mod normalize;
pub mod props;
pub mod schema;
pub mod validation;

pub use config::{ConfigError, LandlyConfig};
pub use ir::*;
pub use locale::{FeatureTemplate, Locale, Phrases, UnknownLocale};
pub use normalize::NormalizeLimits;
pub use validation::{SchemaCompileError, Validated, ValidationError, Validator};
