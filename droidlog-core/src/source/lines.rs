use crate::error::{AnalyzerError, Result};
use crate::record::{LogRecord, parse_line};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// One line exactly as it appeared in the source, terminator included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// 1-based position in the source.
    pub number: usize,
    pub bytes: Vec<u8>,
}

impl RawLine {
    /// Lossy decode; invalid UTF-8 becomes U+FFFD.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Decoded text with the trailing `\n` / `\r\n` removed.
    pub fn display_text(&self) -> String {
        let mut bytes = self.bytes.as_slice();
        if let Some(rest) = bytes.strip_suffix(b"\n") {
            bytes = rest;
        }
        if let Some(rest) = bytes.strip_suffix(b"\r") {
            bytes = rest;
        }
        String::from_utf8_lossy(bytes).into_owned()
    }

    pub fn record(&self) -> Option<LogRecord> {
        parse_line(&self.text())
    }
}

pub struct LineReader<R> {
    reader: R,
    number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, number: 0 }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<RawLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut bytes = Vec::new();
        match self.reader.read_until(b'\n', &mut bytes) {
            Ok(0) => None,
            Ok(_) => {
                self.number += 1;
                Some(Ok(RawLine {
                    number: self.number,
                    bytes,
                }))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Parsed records of `reader`, skipping every line that is not a log entry.
pub fn records<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<LogRecord>> {
    LineReader::new(reader).filter_map(|line| match line {
        Ok(line) => line.record().map(Ok),
        Err(e) => Some(Err(e)),
    })
}

/// Opens a captured log file for reading.
///
/// # Errors
///
/// Returns `AnalyzerError::SourceUnavailable` if the file cannot be opened.
pub fn open_source(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| AnalyzerError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Reads every record of the file at `path`.
pub fn read_records(path: &Path) -> Result<Vec<LogRecord>> {
    records(open_source(path)?)
        .collect::<io::Result<Vec<_>>>()
        .map_err(|e| AnalyzerError::read(path, e))
}
