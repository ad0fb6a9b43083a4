//! Optional `droidlog.hcl` settings: default file names, the `adb` binary and
//! device serial, and capture/monitor durations.

mod error;
mod loader;
mod types;
mod validate;


pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, discover_config, load_config, resolve_config};
pub use types::*;
pub use validate::validate_config;
