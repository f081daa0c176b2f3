use crate::cli::summarize::resolve_config;
use crate::conf::ConfigOverrides;
use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to the config file [default: telesum.hcl, if present]
        path: Option<PathBuf>,
    },

    /// Print resolved configuration
    Dump {
        /// Path to the config file [default: telesum.hcl, if present]
        path: Option<PathBuf>,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(path),
        ConfigCmd::Dump { path, json, yaml } => dump(path, json, yaml),
    }
}

pub fn check(path: Option<PathBuf>) -> Result<()> {
    let cfg = resolve_config(path.as_deref(), &ConfigOverrides::default())?;

    println!("{} Config loaded successfully", "✔".green());
    println!(
        "{} telemetry root {}",
        "✔".green(),
        cfg.telemetry_root.display()
    );
    println!("{} summary at {}", "✔".green(), cfg.output_path().display());
    println!(
        "{} {} concurrent file reads",
        "✔".green(),
        cfg.max_concurrent_reads
    );
    if cfg.releases.enabled {
        println!("{} releases from {}", "✔".green(), cfg.releases.url);
    } else {
        println!("{} release fetching disabled", "-".yellow());
    }
    Ok(())
}

fn dump(path: Option<PathBuf>, json: bool, yaml: bool) -> Result<()> {
    let cfg = resolve_config(path.as_deref(), &ConfigOverrides::default())?;

    if yaml && !json {
        dump_yaml(&cfg)
    } else {
        dump_json(&cfg)
    }
}

fn dump_json<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn dump_yaml<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}
