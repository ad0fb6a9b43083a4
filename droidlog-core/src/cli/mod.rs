//! Command handlers behind the `droidlog` binary. Each returns
//! `anyhow::Result` and prints operator-facing output on stdout.

pub mod analyze;
pub mod capture;
pub mod conf;
pub mod filter;
pub mod report;
pub mod search;


use anyhow::Result;
use serde::Serialize;

pub(crate) fn dump_json<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

pub(crate) fn dump_yaml<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}
