use crate::conf::error::ConfigError;
use crate::conf::types::AnalyzerConfig;

pub fn validate_config(cfg: &AnalyzerConfig) -> Result<(), ConfigError> {
    //-------------------------------------------------------------------------
    // File names
    //-------------------------------------------------------------------------
    if cfg.input.as_os_str().is_empty() {
        return Err(empty("input"));
    }
    if cfg.report_file.as_os_str().is_empty() {
        return Err(empty("report_file"));
    }
    if cfg.output_prefix.trim().is_empty() {
        return Err(empty("output_prefix"));
    }

    //-------------------------------------------------------------------------
    // Device access
    //-------------------------------------------------------------------------
    if cfg.adb.program.trim().is_empty() {
        return Err(empty("adb.program"));
    }
    if cfg.adb.serial.as_deref().is_some_and(|s| s.trim().is_empty()) {
        return Err(ConfigError::Invalid {
            field: "adb.serial",
            reason: "must be omitted or non-empty",
        });
    }

    //-------------------------------------------------------------------------
    // Durations
    //-------------------------------------------------------------------------
    if cfg.capture.duration_secs == 0 {
        return Err(zero("capture.duration_secs"));
    }
    if cfg.monitor.duration_secs == 0 {
        return Err(zero("monitor.duration_secs"));
    }

    Ok(())
}

fn empty(field: &'static str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: "must not be empty",
    }
}

fn zero(field: &'static str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: "must be at least one second",
    }
}
