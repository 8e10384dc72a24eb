use crate::locale::{Locale, UnknownLocale};
use crate::normalize::NormalizeLimits;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: {source}")]
    Locale {
        key: String,
        #[source]
        source: UnknownLocale,
    },
}

/// Tool configuration, usually read from `landly.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandlyConfig {
    pub app: AppConfig,
    pub render: RenderConfig,
    pub limits: NormalizeLimits,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Language of default copy and of the generated `lang` attribute
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Root under which per-project build directories are created
    pub out_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("build"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LandlyConfig {
    pub const FILE_NAME: &'static str = "landly.toml";

    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load configuration and apply `LANDLY_*` environment overrides.
    ///
    /// An explicit path must exist; without one, `landly.toml` in the current
    /// directory is used when present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::read_file(path)?,
            None => {
                let default_path = Path::new(Self::FILE_NAME);
                if default_path.exists() {
                    Self::read_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Apply overrides from a key lookup (the process environment in `load`)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = lookup("LANDLY_LOCALE") {
            self.app.locale = locale.parse().map_err(|source| ConfigError::Locale {
                key: "LANDLY_LOCALE".to_string(),
                source,
            })?;
        }
        if let Some(out_dir) = lookup("LANDLY_OUT_DIR").filter(|v| !v.trim().is_empty()) {
            self.render.out_dir = PathBuf::from(out_dir);
        }
        if let Some(level) = lookup("LANDLY_LOG_LEVEL").filter(|v| !v.trim().is_empty()) {
            self.logging.level = level;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_file_yields_defaults() {
        let config = LandlyConfig::from_toml_str("", Path::new("landly.toml")).unwrap();
        assert_eq!(config, LandlyConfig::default());
        assert_eq!(config.limits.title_max, 90);
        assert_eq!(config.render.out_dir, PathBuf::from("build"));
        assert_eq!(config.app.locale, Locale::Ru);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let toml_str = r#"
[app]
locale = "en"

[limits]
title_max = 60
"#;
        let config = LandlyConfig::from_toml_str(toml_str, Path::new("landly.toml")).unwrap();
        assert_eq!(config.app.locale, Locale::En);
        assert_eq!(config.limits.title_max, 60);
        assert_eq!(config.limits.description_max, 160);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_errors_name_the_file() {
        let err = LandlyConfig::from_toml_str("[limits]\ntitle_max = \"x\"", Path::new("conf/landly.toml")).unwrap_err();
        assert!(err.to_string().contains("conf/landly.toml"), "unexpected error: {}", err);
    }

    #[test]
    fn env_overrides_win() {
        let env: HashMap<&str, &str> = [
            ("LANDLY_LOCALE", "en"),
            ("LANDLY_OUT_DIR", "/tmp/sites"),
            ("LANDLY_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();
        let mut config = LandlyConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.app.locale, Locale::En);
        assert_eq!(config.render.out_dir, PathBuf::from("/tmp/sites"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn bad_locale_override_is_rejected() {
        let mut config = LandlyConfig::default();
        let err = config
            .apply_overrides(|key| (key == "LANDLY_LOCALE").then(|| "fr".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Locale { .. }));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LandlyConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
