use crate::cli::{dump_json, dump_yaml};
use crate::conf::resolve_config;
use std::path::Path;

/// Prints the resolved configuration as YAML, or as JSON otherwise.
pub fn dump(path: Option<&Path>, yaml: bool) -> anyhow::Result<()> {
    let cfg = resolve_config(path)?;

    if yaml {
        dump_yaml(&cfg)?;
    } else {
        dump_json(&cfg)?;
    }

    Ok(())
}
