use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Log file read by analyze, filter, search and report, and written by capture.
    pub input: PathBuf,
    pub report_file: PathBuf,
    /// Prefix of default filter output names (`<prefix>_<level>.txt`).
    pub output_prefix: String,
    pub adb: AdbConfig,
    pub capture: CaptureConfig,
    pub monitor: MonitorConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("logcat.txt"),
            report_file: PathBuf::from("critical_report.txt"),
            output_prefix: "logcat".to_string(),
            adb: AdbConfig::default(),
            capture: CaptureConfig::default(),
            monitor: MonitorConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdbConfig {
    pub program: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
}

impl Default for AdbConfig {
    fn default() -> Self {
        Self {
            program: "adb".to_string(),
            serial: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub duration_secs: u64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self { duration_secs: 10 }
    }
}

impl CaptureConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub duration_secs: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self { duration_secs: 30 }
    }
}

impl MonitorConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }
}
