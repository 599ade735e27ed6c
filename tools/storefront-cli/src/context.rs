//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_commerce::catalog::{seed, Catalog};

use crate::config::StorefrontConfig;
use crate::output::Output;

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: StorefrontConfig,
    /// Catalog the commands operate on.
    pub catalog: Catalog,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Resolve the config: an explicit path, else the nearest config file
    /// at or above `cwd`, else defaults.
    pub fn resolve_config(config_path: Option<&str>, cwd: &Path) -> Result<StorefrontConfig> {
        match config_path {
            Some(path) => StorefrontConfig::load(path),
            None => Ok(Self::find_config(cwd).unwrap_or_default()),
        }
    }

    /// Build the context around `config`, loading its catalog.
    ///
    /// `catalog_path` overrides the catalog path from the config file.
    pub fn load(
        config: StorefrontConfig,
        cwd: PathBuf,
        catalog_path: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let catalog = match catalog_path.or(config.catalog.path.as_deref()) {
            Some(path) => load_catalog(Path::new(path))?,
            None => seed::catalog(),
        };

        Ok(Self {
            config,
            catalog,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<StorefrontConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = StorefrontConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }
}

/// Read and validate a catalog JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    Catalog::from_json(&content)
        .with_context(|| format!("Failed to load catalog: {}", path.display()))
}
