//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::search::{CategoryFilter, SortKey};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Default listing selections.
    #[serde(default)]
    pub browse: BrowseConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Where the catalog comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog JSON file. The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Selections applied when `browse` is given none.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Category id or `all`.
    #[serde(default)]
    pub category: CategoryFilter,

    /// One of `name`, `price-low`, `price-high`, `featured`.
    #[serde(default)]
    pub sort: SortKey,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Logging configuration. `RUST_LOG` overrides `level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

[catalog]
# path = "catalog.json"

[browse]
category = "all"
sort = "name"

[logging]
level = "warn"
format = "human"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: StorefrontConfig = toml::from_str(&generate_default_config()).unwrap();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.browse.category, CategoryFilter::All);
        assert_eq!(config.browse.sort, SortKey::Name);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_partial_config() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            [browse]
            category = "oils"
            sort = "price-high"
            "#,
        )
        .unwrap();
        assert_eq!(config.browse.category.as_str(), "oils");
        assert_eq!(config.browse.sort, SortKey::PriceHigh);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.json");
        std::fs::write(
            &path,
            r#"{"browse": {"sort": "featured"}, "logging": {"format": "json"}}"#,
        )
        .unwrap();

        let loaded = StorefrontConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.browse.sort, SortKey::Featured);
        assert_eq!(loaded.browse.category, CategoryFilter::All);
        assert_eq!(loaded.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_missing_file() {
        let err = StorefrontConfig::load("/nonexistent/storefront.toml").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config file"));
    }
}
