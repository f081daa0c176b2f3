use crate::conf::{ConfigOverrides, TelesumConfig, load_config, validate_config};
use crate::output::{to_json, write_summary};
use crate::pipeline::summarize_root;
use crate::releases::{GithubReleases, NoReleases, ReleaseSource};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub struct SummarizeArgs {
    /// Path to the config file [default: telesum.hcl, if present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the YYYY-MM-DD.log files
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Maximum number of day files read at once
    #[arg(long)]
    pub parallel: Option<usize>,

    /// Summary file, relative to the telemetry root
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Ignore day files after this date (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<NaiveDate>,

    /// Skip fetching release download counts
    #[arg(long)]
    pub no_releases: bool,

    /// Print the summary instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

impl SummarizeArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            telemetry_root: self.root.clone(),
            max_concurrent_reads: self.parallel,
            output: self.output.clone(),
            no_releases: self.no_releases,
        }
    }
}

/// Loads the config file, applies command line overrides and validates.
pub fn resolve_config(config: Option<&Path>, overrides: &ConfigOverrides) -> Result<TelesumConfig> {
    let cfg = load_config(config)?.with_overrides(overrides);
    validate_config(&cfg)?;
    Ok(cfg)
}

pub async fn summarize(args: SummarizeArgs) -> Result<()> {
    let cfg = resolve_config(args.config.as_deref(), &args.overrides())?;

    let source: Box<dyn ReleaseSource> = if cfg.releases.enabled {
        match GithubReleases::new(&cfg.releases) {
            Ok(source) => Box::new(source),
            Err(e) => {
                tracing::warn!(error = %e, "Release source unavailable, skipping releases");
                Box::new(NoReleases)
            }
        }
    } else {
        Box::new(NoReleases)
    };

    let summary = summarize_root(
        &cfg.telemetry_root,
        args.until,
        cfg.max_concurrent_reads,
        source.as_ref(),
    )
    .await
    .with_context(|| {
        format!(
            "failed to summarize telemetry in {}",
            cfg.telemetry_root.display()
        )
    })?;

    if args.stdout {
        println!("{}", to_json(&summary)?);
        return Ok(());
    }

    let path = cfg.output_path();
    write_summary(&path, &summary)?;

    eprintln!(
        "{} {} days summarized into {}",
        "✔".green(),
        summary.telemetry.len(),
        path.display()
    );
    Ok(())
}
