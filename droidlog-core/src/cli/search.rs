use crate::conf::AnalyzerConfig;
use crate::search::{SEARCH_RESULT_LIMIT, SearchOutcome, search_file};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for anywhere in a line
    pub keyword: String,

    /// Log file to search [default: configured input]
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Match case exactly
    #[arg(long, short = 'c')]
    pub case_sensitive: bool,
}

pub fn run(args: SearchArgs, cfg: &AnalyzerConfig) -> Result<()> {
    let input = args.input.unwrap_or_else(|| cfg.input.clone());
    println!("Searching for '{}'...\n", args.keyword);

    let outcome = search_file(&input, &args.keyword, args.case_sensitive)
        .with_context(|| format!("cannot search {}", input.display()))?;

    print!("{}", render_results(&outcome));
    Ok(())
}

/// The hit listing printed after the search banner.
pub fn render_results(outcome: &SearchOutcome) -> String {
    if outcome.hits.is_empty() {
        return format!("No matches found for '{}'\n", outcome.keyword);
    }

    let mut out = String::new();
    for hit in &outcome.hits {
        out.push_str(&format!("Line {}: {}\n", hit.line_number, hit.line.trim()));
    }
    if outcome.limit_reached {
        out.push_str(&format!(
            "\n... showing first {SEARCH_RESULT_LIMIT} results\n"
        ));
    }
    out.push_str(&format!("\nTotal matches: {}\n", outcome.hits.len()));
    out
}
