use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// A scratch directory holding a copy of one fixture log.
pub struct Workspace {
    dir: TempDir,
    log: PathBuf,
}

impl Workspace {
    pub fn with_fixture(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let log = dir.path().join(name);
        fs::copy(fixture_path(name), &log).expect("failed to copy fixture");
        Self { dir, log }
    }

    pub fn log(&self) -> &Path {
        &self.log
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("failed to read output")
    }
}
