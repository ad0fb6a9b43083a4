use crate::cli::{dump_json, dump_yaml};
use crate::conf::AnalyzerConfig;
use crate::stats::{analyze_file, render_summary};
use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Log file to analyze [default: configured input]
    pub file: Option<PathBuf>,

    /// Output statistics as JSON
    #[arg(long, conflicts_with = "yaml")]
    pub json: bool,

    /// Output statistics as YAML
    #[arg(long)]
    pub yaml: bool,
}

pub fn run(args: AnalyzeArgs, cfg: &AnalyzerConfig) -> Result<()> {
    let path = args.file.unwrap_or_else(|| cfg.input.clone());
    print_analysis(&path, args.json, args.yaml)
}

pub(crate) fn print_analysis(path: &Path, json: bool, yaml: bool) -> Result<()> {
    let stats =
        analyze_file(path).with_context(|| format!("cannot analyze {}", path.display()))?;

    if json {
        dump_json(&stats)?;
    } else if yaml {
        dump_yaml(&stats)?;
    } else {
        print!("{}", render_summary(&stats, &path.display().to_string()));
    }

    Ok(())
}
