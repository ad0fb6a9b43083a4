use crate::capture::adb::{AdbCommand, POLL_INTERVAL, StopReason, stop_child};
use crate::capture::interrupt::Interrupt;
use crate::error::{AnalyzerError, Result};
use crate::source::{LineReader, RawLine};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// Severity of an echoed monitor line, judged by its ` X/` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoKind {
    Error,
    Warning,
    /// Info or debug.
    Info,
}

impl EchoKind {
    fn classify(line: &str) -> Option<Self> {
        if line.contains(" E/") {
            Some(EchoKind::Error)
        } else if line.contains(" W/") {
            Some(EchoKind::Warning)
        } else if line.contains(" I/") || line.contains(" D/") {
            Some(EchoKind::Info)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonitorSummary {
    pub output: PathBuf,
    pub lines: u64,
    pub errors: u64,
    pub warnings: u64,
    pub stopped_by: StopReason,
}

/// `monitor_<pattern>.txt`, with dots and spaces in the pattern replaced by `_`.
pub fn default_monitor_output(pattern: &str) -> PathBuf {
    let safe: String = pattern
        .chars()
        .map(|c| if c == '.' || c == ' ' { '_' } else { c })
        .collect();
    PathBuf::from(format!("monitor_{safe}.txt"))
}

/// Follows the live device log for up to `duration`, keeping only lines that
/// contain `pattern` (case-insensitive).
///
/// Kept lines are appended to `output` byte for byte. Error, warning, info and
/// debug lines among them are also handed to `echo` without their terminator.
pub fn monitor<F>(
    adb: &AdbCommand,
    pattern: &str,
    duration: Duration,
    output: &Path,
    interrupt: &Interrupt,
    mut echo: F,
) -> Result<MonitorSummary>
where
    F: FnMut(EchoKind, &str),
{
    if pattern.is_empty() {
        return Err(AnalyzerError::EmptyPattern);
    }
    let needle = pattern.to_lowercase();

    adb.clear_buffer()?;

    let file = File::create(output).map_err(|e| AnalyzerError::write(output, e))?;
    let mut out = BufWriter::new(file);

    let mut child = adb
        .stream_command()
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| adb.spawn_error(e))?;

    let Some(stdout) = child.stdout.take() else {
        stop_child(&mut child, adb)?;
        return Err(adb.supervise_error(io::Error::other("child stdout was not captured")));
    };

    tracing::debug!(pid = child.id(), pattern, "monitor started");

    // Reader thread: child stdout -> RawLine -> channel.
    let (tx, rx) = mpsc::channel::<RawLine>();
    let reader_handle = thread::spawn(move || {
        for line in LineReader::new(BufReader::new(stdout)).map_while(|l| l.ok()) {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let deadline = Instant::now() + duration;
    let mut lines = 0;
    let mut errors = 0;
    let mut warnings = 0;

    let stopped_by = loop {
        if interrupt.is_triggered() {
            break StopReason::Interrupted;
        }
        let now = Instant::now();
        if now >= deadline {
            break StopReason::Deadline;
        }

        let line = match rx.recv_timeout(POLL_INTERVAL.min(deadline - now)) {
            Ok(line) => line,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break StopReason::SourceClosed,
        };

        let text = line.display_text();
        if !text.to_lowercase().contains(&needle) {
            continue;
        }

        if let Err(e) = out.write_all(&line.bytes) {
            stop_child(&mut child, adb)?;
            return Err(AnalyzerError::write(output, e));
        }
        lines += 1;

        let Some(kind) = EchoKind::classify(&text) else {
            continue;
        };
        match kind {
            EchoKind::Error => errors += 1,
            EchoKind::Warning => warnings += 1,
            EchoKind::Info => {}
        }
        echo(kind, text.trim());
    };

    stop_child(&mut child, adb)?;
    // Once the child is gone the pipe closes and the reader drains out.
    drop(rx);
    if stopped_by == StopReason::SourceClosed {
        let _ = reader_handle.join();
    }

    out.flush().map_err(|e| AnalyzerError::write(output, e))?;

    tracing::info!(
        pattern,
        output = %output.display(),
        lines,
        errors,
        warnings,
        stopped_by = %stopped_by,
        "monitor finished"
    );

    Ok(MonitorSummary {
        output: output.to_path_buf(),
        lines,
        errors,
        warnings,
        stopped_by,
    })
}
