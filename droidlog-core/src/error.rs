use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    //-------------------------------------------------------------------------
    // Input
    //-------------------------------------------------------------------------
    #[error("log source {path} is not available: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log source {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Output
    //-------------------------------------------------------------------------
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to move finished output into place at {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },

    //-------------------------------------------------------------------------
    // Capture
    //-------------------------------------------------------------------------
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to supervise '{program}': {source}")]
    Supervise {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to install interrupt handler: {0}")]
    InterruptHandler(#[from] ctrlc::Error),

    #[error("a monitor pattern is required")]
    EmptyPattern,
}

impl AnalyzerError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = AnalyzerError> = std::result::Result<T, E>;
