use crate::conf::AdbConfig;
use crate::capture::interrupt::Interrupt;
use crate::error::{AnalyzerError, Result};
use serde::Serialize;
use std::fmt;
use std::io;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// How often supervising loops look at the child and the interrupt flag.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    Deadline,
    Interrupted,
    /// The child exited or closed its output on its own.
    SourceClosed,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopReason::Deadline => "duration elapsed",
            StopReason::Interrupted => "interrupted",
            StopReason::SourceClosed => "log source closed",
        };
        f.write_str(s)
    }
}

/// An `adb` invocation, optionally pinned to one device serial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdbCommand {
    program: String,
    serial: Option<String>,
}

impl AdbCommand {
    pub fn new(program: impl Into<String>, serial: Option<String>) -> Self {
        Self {
            program: program.into(),
            serial,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn base(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(serial) = &self.serial {
            cmd.args(["-s", serial.as_str()]);
        }
        cmd
    }

    /// `adb logcat -c`
    pub fn clear_command(&self) -> Command {
        let mut cmd = self.base();
        cmd.args(["logcat", "-c"]);
        cmd
    }

    /// `adb logcat -v time`
    pub fn stream_command(&self) -> Command {
        let mut cmd = self.base();
        cmd.args(["logcat", "-v", "time"]);
        cmd
    }

    /// Clears the device log buffer. A non-zero exit is logged and ignored;
    /// failing to start `adb` at all is an error.
    pub fn clear_buffer(&self) -> Result<()> {
        let status = self
            .clear_command()
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| self.spawn_error(e))?;

        if status.success() {
            tracing::debug!(program = %self.program, "device log buffer cleared");
        } else {
            tracing::warn!(program = %self.program, %status, "clearing the device log buffer failed");
        }
        Ok(())
    }

    pub(crate) fn spawn_error(&self, source: io::Error) -> AnalyzerError {
        AnalyzerError::Spawn {
            program: self.program.clone(),
            source,
        }
    }

    pub(crate) fn supervise_error(&self, source: io::Error) -> AnalyzerError {
        AnalyzerError::Supervise {
            program: self.program.clone(),
            source,
        }
    }
}

impl Default for AdbCommand {
    fn default() -> Self {
        Self::new("adb", None)
    }
}

impl From<&AdbConfig> for AdbCommand {
    fn from(cfg: &AdbConfig) -> Self {
        Self::new(cfg.program.clone(), cfg.serial.clone())
    }
}

/// Polls `child` until it exits, `interrupt` fires, or `deadline` passes.
/// A child still running at that point is killed. The child is always reaped.
pub(crate) fn supervise_child(
    child: &mut Child,
    adb: &AdbCommand,
    deadline: Option<Instant>,
    interrupt: &Interrupt,
) -> Result<StopReason> {
    loop {
        if child
            .try_wait()
            .map_err(|e| adb.supervise_error(e))?
            .is_some()
        {
            return Ok(StopReason::SourceClosed);
        }

        if interrupt.is_triggered() {
            stop_child(child, adb)?;
            return Ok(StopReason::Interrupted);
        }

        let mut nap = POLL_INTERVAL;
        if let Some(deadline) = deadline {
            let now = Instant::now();
            if now >= deadline {
                stop_child(child, adb)?;
                return Ok(StopReason::Deadline);
            }
            nap = nap.min(deadline - now);
        }

        thread::sleep(nap);
    }
}

pub(crate) fn stop_child(child: &mut Child, adb: &AdbCommand) -> Result<()> {
    if let Err(e) = child.kill() {
        tracing::warn!(error = %e, program = %adb.program, "failed to kill logcat process");
    }
    let status = child.wait().map_err(|e| adb.supervise_error(e))?;
    tracing::debug!(program = %adb.program, %status, "logcat process reaped");
    Ok(())
}
