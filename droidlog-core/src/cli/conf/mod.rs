mod check;
mod dump;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Config file [default: --config, then ./droidlog.hcl]
        path: Option<PathBuf>,
    },

    /// Print resolved configuration
    Dump {
        /// Config file [default: --config, then ./droidlog.hcl]
        path: Option<PathBuf>,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },
}

/// `global` is the top-level `--config` flag, used when the subcommand names no path.
pub fn run(cmd: ConfigCmd, global: Option<&Path>) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(path.as_deref().or(global)),
        ConfigCmd::Dump { path, json, yaml } => dump(path.as_deref().or(global), yaml && !json),
    }
}
