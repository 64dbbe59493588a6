//! Show or initialize configuration.

use anyhow::{bail, Context as _, Result};
use clap::Args;
use std::path::Path;

use crate::config::{generate_default_config, DEFAULT_CONFIG_PATH};
use crate::context::Context;

/// Arguments for `urban config`.
#[derive(Args)]
pub struct ConfigArgs {
    /// Write a commented default urban.toml in the working directory
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,

    /// Write the effective configuration to a file (.toml or .json)
    #[arg(long, value_name = "PATH")]
    pub export: Option<String>,
}

pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    if args.init {
        if Path::new(DEFAULT_CONFIG_PATH).exists() && !args.force {
            bail!("{DEFAULT_CONFIG_PATH} ya existe (usa --force para sobrescribir)");
        }
        std::fs::write(DEFAULT_CONFIG_PATH, generate_default_config())
            .with_context(|| format!("Failed to write config file: {DEFAULT_CONFIG_PATH}"))?;
        ctx.output.success(&format!("{DEFAULT_CONFIG_PATH} creado"));
        return Ok(());
    }

    if let Some(path) = &args.export {
        ctx.config.save(path)?;
        ctx.output.success(&format!("Configuración exportada a {path}"));
        return Ok(());
    }

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Configuración efectiva");
    let rendered =
        toml::to_string_pretty(&ctx.config).context("Failed to render configuration")?;
    println!("{rendered}");

    Ok(())
}
