use crate::error::{AnalyzerError, Result};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// A destination file that is written in full or not at all.
///
/// Content is staged in a temporary file next to the destination and renamed
/// into place by [`AtomicOutput::commit`]. Dropping an uncommitted output
/// removes the staged file and leaves the destination untouched.
///
/// A new destination gets the same mode as a plainly created file. Replacing an
/// existing destination keeps its mode.
pub struct AtomicOutput {
    path: PathBuf,
    writer: BufWriter<NamedTempFile>,
}

impl AtomicOutput {
    pub fn create(path: &Path) -> Result<Self> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        #[cfg_attr(not(unix), allow(unused_mut))]
        let mut builder = Builder::new();
        // The staged file is otherwise private to the owner. The umask still applies.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }

        let staged = builder
            .tempfile_in(dir)
            .map_err(|e| AnalyzerError::write(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(staged),
        })
    }

    pub fn commit(self) -> Result<PathBuf> {
        let Self { path, writer } = self;

        let staged = writer
            .into_inner()
            .map_err(|e| AnalyzerError::write(&path, e.into_error()))?;

        if let Ok(existing) = fs::metadata(&path) {
            staged
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| AnalyzerError::write(&path, e))?;
        }

        staged
            .persist(&path)
            .map_err(|source| AnalyzerError::Persist {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }
}

impl Write for AtomicOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
