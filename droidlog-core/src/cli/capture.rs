use crate::capture::{
    AdbCommand, EchoKind, Interrupt, StopReason, capture, default_monitor_output, monitor, stream,
};
use crate::cli::analyze::print_analysis;
use crate::conf::AnalyzerConfig;
use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct CaptureArgs {
    /// Seconds to record [default: capture.duration_secs]
    #[arg(long, short, value_parser = clap::value_parser!(u64).range(1..))]
    pub duration: Option<u64>,

    /// Destination file [default: configured input]
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Skip the analysis that normally follows a capture
    #[arg(long)]
    pub no_analyze: bool,
}

#[derive(Args, Debug)]
pub struct MonitorArgs {
    /// Package name or tag to follow, matched anywhere in a line ignoring case
    pub pattern: String,

    /// Seconds to monitor [default: monitor.duration_secs]
    #[arg(long, short, value_parser = clap::value_parser!(u64).range(1..))]
    pub duration: Option<u64>,

    /// Destination file [default: monitor_<pattern>.txt]
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run_capture(args: CaptureArgs, cfg: &AnalyzerConfig) -> Result<()> {
    let adb = AdbCommand::from(&cfg.adb);
    let duration = args
        .duration
        .map(Duration::from_secs)
        .unwrap_or_else(|| cfg.capture.duration());
    let output = args.output.unwrap_or_else(|| cfg.input.clone());
    let interrupt = Interrupt::install()?;

    println!("Capturing logcat for {} seconds...", duration.as_secs());
    let outcome = capture(&adb, duration, &output, &interrupt)
        .with_context(|| format!("capture into {} failed", output.display()))?;
    println!(
        "Logcat captured and saved to {} ({} bytes, {})",
        outcome.output.display(),
        outcome.bytes,
        outcome.stopped_by
    );

    if args.no_analyze {
        return Ok(());
    }
    print_analysis(&outcome.output, false, false)
}

pub fn run_monitor(args: MonitorArgs, cfg: &AnalyzerConfig) -> Result<()> {
    let adb = AdbCommand::from(&cfg.adb);
    let duration = args
        .duration
        .map(Duration::from_secs)
        .unwrap_or_else(|| cfg.monitor.duration());
    let output = args
        .output
        .unwrap_or_else(|| default_monitor_output(&args.pattern));
    let interrupt = Interrupt::install()?;
    let color = io::stdout().is_terminal();

    println!(
        "\nMonitoring '{}' for {} seconds...",
        args.pattern,
        duration.as_secs()
    );
    println!("Press Ctrl+C to stop early\n");

    let summary = monitor(
        &adb,
        &args.pattern,
        duration,
        &output,
        &interrupt,
        |kind, line| print_echo(kind, line, color),
    )
    .with_context(|| format!("monitoring '{}' failed", args.pattern))?;

    let rule = "=".repeat(60);
    println!("\n{rule}");
    if summary.stopped_by == StopReason::Interrupted {
        println!("Monitoring stopped by user.");
    } else {
        println!("Monitoring complete!");
    }
    println!("  Total lines captured: {}", summary.lines);
    println!("  Errors: {}", summary.errors);
    println!("  Warnings: {}", summary.warnings);
    println!("  Saved to: {}", summary.output.display());
    println!("{rule}\n");
    Ok(())
}

fn print_echo(kind: EchoKind, line: &str, color: bool) {
    let marker = match kind {
        EchoKind::Error => "[E]",
        EchoKind::Warning => "[W]",
        EchoKind::Info => "[I]",
    };

    if !color {
        println!("{marker} {line}");
        return;
    }
    match kind {
        EchoKind::Error => println!("{} {}", marker.red().bold(), line.red()),
        EchoKind::Warning => println!("{} {}", marker.yellow().bold(), line.yellow()),
        EchoKind::Info => println!("{} {}", marker.dimmed(), line.dimmed()),
    }
}

pub fn run_stream(cfg: &AnalyzerConfig) -> Result<()> {
    let adb = AdbCommand::from(&cfg.adb);
    let interrupt = Interrupt::install()?;

    println!("Starting live logcat stream (press Ctrl+C to stop)...");
    let stopped_by = stream(&adb, &interrupt).context("live stream failed")?;
    if stopped_by == StopReason::Interrupted {
        println!("\n\nLogcat stream stopped.");
    }
    Ok(())
}
