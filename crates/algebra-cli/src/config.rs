//! CLI configuration.
//!
//! Looked up in this order:
//!
//! 1. `--config <path>`
//! 2. `$ALGEBRA_CONFIG`
//! 3. `<config dir>/algebra/config.toml`
//!
//! A missing file at the default location means defaults. A missing file
//! named explicitly is an error.

use crate::{Error, Result};
use algebra_cayley_dickson::MAX_TABLE_LEVEL;
use algebra_core::table::DEFAULT_SYMBOLS;
use algebra_group::MAX_CONSTRUCTED_ORDER;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for the `algebra` binary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgebraConfig {
    /// Largest group the CLI will construct.
    pub max_group_order: usize,
    /// Largest Cayley-Dickson level for tables and law checks.
    pub max_cd_level: u32,
    /// Symbols used for Cayley tables with wide labels.
    pub symbols: String,
    /// Log filter used when neither `-v` nor `RUST_LOG` is given.
    pub log_level: String,
}

impl Default for AlgebraConfig {
    fn default() -> Self {
        Self {
            max_group_order: MAX_CONSTRUCTED_ORDER,
            max_cd_level: 4,
            symbols: DEFAULT_SYMBOLS.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl AlgebraConfig {
    /// Name used for the config directory and in user-facing hints.
    pub const PROJECT_NAME: &'static str = "algebra";

    /// Environment variable holding an explicit config path.
    pub const ENV_VAR: &'static str = "ALGEBRA_CONFIG";

    /// `<config dir>/algebra/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::PROJECT_NAME).join("config.toml"))
    }

    /// Resolves the config path from the flag, the environment and the
    /// platform default. Empty values count as unset.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        Self::resolve_with(explicit, std::env::var(Self::ENV_VAR).ok())
    }

    fn resolve_with(explicit: Option<&str>, env: Option<String>) -> Option<PathBuf> {
        Self::named_path(explicit, env).or_else(Self::default_config_path)
    }

    fn named_path(explicit: Option<&str>, env: Option<String>) -> Option<PathBuf> {
        explicit
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| env.filter(|p| !p.is_empty()).map(PathBuf::from))
    }

    /// Loads and validates the configuration.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        Self::load_with(explicit, std::env::var(Self::ENV_VAR).ok())
    }

    fn load_with(explicit: Option<&str>, env: Option<String>) -> Result<Self> {
        let path = match Self::named_path(explicit, env) {
            Some(path) if !path.exists() => {
                return Err(Error::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            Some(path) => path,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        tracing::debug!(path = %path.display(), "loading configuration");
        Self::from_toml_str(&content)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Writes the settings to `path`, creating parent directories.
    ///
    /// An existing file is only replaced when `overwrite` is set.
    pub fn save(&self, path: &Path, overwrite: bool) -> Result<()> {
        if path.exists() && !overwrite {
            return Err(Error::config(format!(
                "Config file already exists at {}. Use --force to overwrite.",
                path.display()
            )));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
        }
        std::fs::write(path, self.to_toml_string()?).map_err(|e| Error::io_with_path(e, path))
    }

    /// Rejects settings the libraries cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.symbols.chars().count() < 2 {
            return Err(Error::config("symbols must contain at least two characters"));
        }
        if self.max_cd_level > MAX_TABLE_LEVEL {
            return Err(Error::config(format!(
                "max_cd_level must be at most {MAX_TABLE_LEVEL}"
            )));
        }
        if self.max_group_order > MAX_CONSTRUCTED_ORDER {
            tracing::warn!(
                max_group_order = self.max_group_order,
                "family constructors stop at {MAX_CONSTRUCTED_ORDER} regardless"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AlgebraConfig::default();
        assert_eq!(config.max_group_order, 720);
        assert_eq!(config.max_cd_level, 4);
        assert!(config.symbols.starts_with('e'));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = AlgebraConfig::from_toml_str("max_cd_level = 3").unwrap();
        assert_eq!(config.max_cd_level, 3);
        assert_eq!(config.max_group_order, 720);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = AlgebraConfig {
            symbols: "xyz".to_string(),
            ..AlgebraConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("symbols = \"xyz\""));
        assert_eq!(AlgebraConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_validation() {
        assert!(AlgebraConfig::from_toml_str("symbols = \"e\"").is_err());
        assert!(AlgebraConfig::from_toml_str("max_cd_level = 9").is_err());
        assert!(AlgebraConfig::from_toml_str("max_cd_level = \"three\"").is_err());
    }

    #[test]
    fn test_resolution_order() {
        let explicit = AlgebraConfig::resolve_with(Some("/a.toml"), Some("/b.toml".into()));
        assert_eq!(explicit, Some(PathBuf::from("/a.toml")));
        let from_env = AlgebraConfig::resolve_with(None, Some("/b.toml".into()));
        assert_eq!(from_env, Some(PathBuf::from("/b.toml")));
        let fallback = AlgebraConfig::resolve_with(None, Some(String::new()));
        assert_eq!(fallback, AlgebraConfig::default_config_path());
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let from_flag = AlgebraConfig::resolve_with(Some(""), Some("/b.toml".into()));
        assert_eq!(from_flag, Some(PathBuf::from("/b.toml")));
        assert_eq!(AlgebraConfig::named_path(Some(""), Some(String::new())), None);
    }

    #[test]
    fn test_load_with_empty_path_uses_default_location() {
        let unset = AlgebraConfig::load_with(None, None).unwrap();
        assert_eq!(AlgebraConfig::load_with(Some(""), None).unwrap(), unset);
        assert_eq!(AlgebraConfig::load_with(None, Some(String::new())).unwrap(), unset);
    }

    #[test]
    fn test_load_from_env_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("env.toml");
        std::fs::write(&path, "max_cd_level = 2\n").unwrap();
        let env = Some(path.to_str().unwrap().to_string());
        assert_eq!(AlgebraConfig::load_with(None, env).unwrap().max_cd_level, 2);
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_group_order = 100\n").unwrap();
        let config = AlgebraConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.max_group_order, 100);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("a").join("b.toml");
        let config = AlgebraConfig {
            max_group_order: 60,
            ..AlgebraConfig::default()
        };
        config.save(&path, false).unwrap();
        assert!(AlgebraConfig::default().save(&path, false).is_err());
        assert_eq!(AlgebraConfig::load(Some(path.to_str().unwrap())).unwrap(), config);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        let err = AlgebraConfig::load(Some(path.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
