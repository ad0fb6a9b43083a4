use crate::capture::adb::{AdbCommand, StopReason, supervise_child};
use crate::capture::interrupt::Interrupt;
use crate::error::{AnalyzerError, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureOutcome {
    pub output: PathBuf,
    pub bytes: u64,
    pub stopped_by: StopReason,
}

/// Clears the device buffer, then records `adb logcat -v time` into `output`
/// for at most `duration`.
pub fn capture(
    adb: &AdbCommand,
    duration: Duration,
    output: &Path,
    interrupt: &Interrupt,
) -> Result<CaptureOutcome> {
    adb.clear_buffer()?;

    let file = File::create(output).map_err(|e| AnalyzerError::write(output, e))?;
    let mut child = adb
        .stream_command()
        .stdin(Stdio::null())
        .stdout(Stdio::from(file))
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| adb.spawn_error(e))?;

    tracing::debug!(
        pid = child.id(),
        duration_secs = duration.as_secs_f64(),
        output = %output.display(),
        "logcat capture started"
    );

    let deadline = Instant::now() + duration;
    let stopped_by = supervise_child(&mut child, adb, Some(deadline), interrupt)?;

    let bytes = fs::metadata(output)
        .map_err(|e| AnalyzerError::read(output, e))?
        .len();

    tracing::info!(
        output = %output.display(),
        bytes,
        stopped_by = %stopped_by,
        "logcat capture finished"
    );

    Ok(CaptureOutcome {
        output: output.to_path_buf(),
        bytes,
        stopped_by,
    })
}
