use crate::conf::AnalyzerConfig;
use crate::filter::{FilterCriteria, filter_file};
use crate::record::Level;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum FilterCmd {
    /// Keep entries of one severity (E, W, error, warning, ...)
    Level {
        level: Level,

        #[command(flatten)]
        files: FilterFiles,
    },

    /// Keep entries whose tag contains TAG, ignoring case
    Tag {
        tag: String,

        #[command(flatten)]
        files: FilterFiles,
    },
}

#[derive(Args, Debug)]
pub struct FilterFiles {
    /// Log file to read [default: configured input]
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Destination file [default: <prefix>_<level|tag>.txt]
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(cmd: FilterCmd, cfg: &AnalyzerConfig) -> Result<()> {
    let (criteria, files) = match cmd {
        FilterCmd::Level { level, files } => (FilterCriteria::level(level), files),
        FilterCmd::Tag { tag, files } => (FilterCriteria::tag(&tag), files),
    };
    let input = files.input.unwrap_or_else(|| cfg.input.clone());

    let outcome = filter_file(
        &input,
        files.output.as_deref(),
        &criteria,
        &cfg.output_prefix,
    )
    .with_context(|| format!("cannot filter {}", input.display()))?;

    println!(
        "Filtered {} {criteria} to {}",
        outcome.matched,
        outcome.output.display()
    );
    Ok(())
}
