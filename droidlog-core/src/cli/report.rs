use crate::conf::AnalyzerConfig;
use crate::report::write_report;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Log file to read [default: configured input]
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Report destination [default: configured report_file]
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ReportArgs, cfg: &AnalyzerConfig) -> Result<()> {
    let input = args.input.unwrap_or_else(|| cfg.input.clone());
    let output = args.output.unwrap_or_else(|| cfg.report_file.clone());

    let outcome = write_report(&input, &output).with_context(|| {
        format!(
            "cannot build a report from {}; capture one first with `droidlog capture`",
            input.display()
        )
    })?;

    println!("Critical issues report saved to: {}", outcome.output.display());
    println!("   Total Errors: {}", outcome.total_errors);
    println!("   Total Warnings: {}", outcome.total_warnings);
    println!("   Unique Error Types: {}", outcome.unique_error_types);
    Ok(())
}
