//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, FashConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force, output } => init_config(force, output.as_deref(), ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "built-in defaults"),
    }
    ctx.output.line("");
    ctx.output.line(toml::to_string_pretty(&ctx.config)?.trim_end());

    Ok(())
}

fn init_config(force: bool, output: Option<&str>, ctx: &Context) -> Result<()> {
    let config_path = match output {
        Some(path) => ctx.cwd.join(path),
        None => ctx.default_config_path(),
    };

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let path_str = config_path
        .to_str()
        .with_context(|| format!("Config path is not valid UTF-8: {}", config_path.display()))?;
    if path_str.ends_with(".json") {
        FashConfig::default().save(path_str)?;
    } else {
        fs::write(&config_path, generate_default_config())
            .with_context(|| format!("Failed to write config file: {}", path_str))?;
    }
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut warnings: Vec<String> = Vec::new();
    if ctx.config.store.name.trim().is_empty() {
        warnings.push("store.name is empty; the banner will be blank".to_string());
    }
    if ctx.config.products.is_empty() {
        warnings.push("no [[products]] configured; the catalog starts empty".to_string());
    }

    ctx.config.validate()?;

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }
    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
    } else {
        ctx.output.success("Configuration is valid (with warnings)");
    }

    Ok(())
}
