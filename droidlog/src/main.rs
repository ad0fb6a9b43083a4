use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use droidlog_core::cli;
use droidlog_core::conf::{AnalyzerConfig, resolve_config};
use droidlog_core::logging::{LogFormat, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "droidlog",
    version,
    about = "droidlog: Android logcat capture and analysis"
)]
struct Cli {
    /// Path to a droidlog.hcl config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit diagnostics as JSON on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record the device log to a file, then analyze it
    Capture(cli::capture::CaptureArgs),

    /// Summarize levels, tags, errors and warnings in a log file
    Analyze(cli::analyze::AnalyzeArgs),

    /// Copy matching entries into a new file
    Filter {
        #[command(subcommand)]
        cmd: cli::filter::FilterCmd,
    },

    /// Print lines containing a keyword
    Search(cli::search::SearchArgs),

    /// Write the critical issues report
    Report(cli::report::ReportArgs),

    /// Follow the live device log for one app or component
    Monitor(cli::capture::MonitorArgs),

    /// Pass the live device log through to the terminal
    Stream,

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    });

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config, command, ..
    } = cli;
    // Config commands report on the file themselves; everything else needs it valid.
    let load = || -> Result<AnalyzerConfig> {
        resolve_config(config.as_deref()).context("failed to load configuration")
    };

    match command {
        Command::Capture(args) => cli::capture::run_capture(args, &load()?),
        Command::Analyze(args) => cli::analyze::run(args, &load()?),
        Command::Filter { cmd } => cli::filter::run(cmd, &load()?),
        Command::Search(args) => cli::search::run(args, &load()?),
        Command::Report(args) => cli::report::run(args, &load()?),
        Command::Monitor(args) => cli::capture::run_monitor(args, &load()?),
        Command::Stream => cli::capture::run_stream(&load()?),
        Command::Config { cmd } => cli::conf::run(cmd, config.as_deref()),
    }
}
