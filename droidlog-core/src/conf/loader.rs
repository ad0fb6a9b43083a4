use crate::conf::error::ConfigError;
use crate::conf::types::AnalyzerConfig;
use crate::conf::validate::validate_config;
use std::fs;
use std::path::Path;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "droidlog.hcl";

/// Reads, parses and validates the config file at `path`, which must exist.
pub fn load_config(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let src = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg: AnalyzerConfig = hcl::from_str(&src).map_err(|e| ConfigError::parse(path, e))?;

    validate_config(&cfg)?;
    tracing::debug!(path = %path.display(), "config loaded");

    Ok(cfg)
}

/// Loads `explicit` when given; otherwise loads [`DEFAULT_CONFIG_FILE`] from
/// `dir` if present and falls back to defaults when it is not.
pub fn discover_config(dir: &Path, explicit: Option<&Path>) -> Result<AnalyzerConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let implicit = dir.join(DEFAULT_CONFIG_FILE);
    if implicit.is_file() {
        load_config(&implicit)
    } else {
        tracing::debug!("no config file found, using defaults");
        Ok(AnalyzerConfig::default())
    }
}

/// [`discover_config`] relative to the working directory.
pub fn resolve_config(explicit: Option<&Path>) -> Result<AnalyzerConfig, ConfigError> {
    discover_config(Path::new("."), explicit)
}
