use crate::cli::summarize::resolve_config;
use crate::conf::ConfigOverrides;
use crate::ingest::select_day_files;
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct FilesArgs {
    /// Path to the config file [default: telesum.hcl, if present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the YYYY-MM-DD.log files
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Ignore day files after this date (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<NaiveDate>,
}

/// Lists the day files a summarization run would read.
pub fn files(args: FilesArgs) -> Result<()> {
    let overrides = ConfigOverrides {
        telemetry_root: args.root,
        ..Default::default()
    };
    let cfg = resolve_config(args.config.as_deref(), &overrides)?;

    let files = select_day_files(&cfg.telemetry_root, args.until)?;
    for file in &files {
        let size = fs::metadata(&file.path).map(|m| m.len()).unwrap_or(0);
        println!("{}  {:>12}  {}", file.date, size, file.path.display());
    }

    Ok(())
}
