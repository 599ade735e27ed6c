//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config.catalog.path.as_deref().unwrap_or("(built-in)"),
    );

    ctx.output.info("[browse]");
    ctx.output.kv("category", ctx.config.browse.category.as_str());
    ctx.output.kv("sort", ctx.config.browse.sort.as_str());

    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output.kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());

    ctx.output.info(&format!(
        "Catalog: {} products in {} categories",
        ctx.catalog.len(),
        ctx.catalog.categories().len()
    ));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Wrote {}", config_path.display()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorefrontConfig;
    use crate::output::Output;
    use storefront_commerce::catalog::seed;

    fn ctx_in(dir: &std::path::Path) -> Context {
        Context {
            config: StorefrontConfig::default(),
            catalog: seed::catalog(),
            output: Output::new(false, true),
            cwd: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx_in(dir.path());

        init_config(false, &ctx).unwrap();
        let path = dir.path().join("storefront.toml");
        assert!(StorefrontConfig::load(path.to_str().unwrap()).is_ok());

        assert!(init_config(false, &ctx).is_err());
        assert!(init_config(true, &ctx).is_ok());
    }
}
