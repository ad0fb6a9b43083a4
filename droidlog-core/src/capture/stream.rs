use crate::capture::adb::{AdbCommand, StopReason, supervise_child};
use crate::capture::interrupt::Interrupt;
use crate::error::Result;
use std::process::Stdio;

/// Passes `adb logcat -v time` straight through to the terminal until the
/// child exits or the user interrupts.
pub fn stream(adb: &AdbCommand, interrupt: &Interrupt) -> Result<StopReason> {
    let mut child = adb
        .stream_command()
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| adb.spawn_error(e))?;

    tracing::debug!(pid = child.id(), "live stream started");
    let stopped_by = supervise_child(&mut child, adb, None, interrupt)?;
    tracing::info!(stopped_by = %stopped_by, "live stream ended");

    Ok(stopped_by)
}
