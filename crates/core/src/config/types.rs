use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::Language;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub language: LanguageConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
}

/// Catalog source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Optional HTTP source. When set it takes precedence over `path`.
    #[serde(default)]
    pub url: Option<String>,
    /// Local document path (default: "data/recipes.json").
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
    /// HTTP fetch timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: None,
            path: default_catalog_path(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/recipes.json")
}

fn default_timeout() -> u32 {
    30
}

/// Language configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LanguageConfig {
    /// Language used before any preference is restored (default: de).
    #[serde(default)]
    pub default: Language,
}

/// Preference store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreferencesConfig {
    /// Path of the preference database (default: "kesselbuch.db").
    #[serde(default = "default_prefs_path")]
    pub path: PathBuf,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            path: default_prefs_path(),
        }
    }
}

fn default_prefs_path() -> PathBuf {
    PathBuf::from("kesselbuch.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.catalog.url, None);
        assert_eq!(config.catalog.path.to_str().unwrap(), "data/recipes.json");
        assert_eq!(config.catalog.timeout_secs, 30);
        assert_eq!(config.language.default, Language::De);
        assert_eq!(config.preferences.path.to_str().unwrap(), "kesselbuch.db");
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
[catalog]
url = "https://example.com/data/recipes.json"
timeout_secs = 10

[language]
default = "en"

[preferences]
path = "/data/prefs.db"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.catalog.url.as_deref(),
            Some("https://example.com/data/recipes.json")
        );
        assert_eq!(config.catalog.timeout_secs, 10);
        assert_eq!(config.language.default, Language::En);
        assert_eq!(config.preferences.path.to_str().unwrap(), "/data/prefs.db");
    }

    #[test]
    fn test_deserialize_rejects_unknown_language() {
        let toml = r#"
[language]
default = "fr"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}
