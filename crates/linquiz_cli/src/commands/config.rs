//! config subcommand handler.

use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;
use std::process::ExitCode;

use crate::config::LinquizConfig;

/// Arguments for config subcommand
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Rewrite the config file with default settings
    #[arg(long, default_value_t = false)]
    pub reset: bool,
}

pub fn run(args: ConfigArgs, path: &Path) -> Result<ExitCode> {
    let config = if args.reset {
        let config = LinquizConfig::restore(path)
            .with_context(|| format!("cannot write {}", path.display()))?;
        eprintln!("Restored defaults in {}", path.display());
        config
    } else {
        LinquizConfig::load(path)
    };

    print!("{}", config.to_toml()?);
    Ok(ExitCode::SUCCESS)
}
