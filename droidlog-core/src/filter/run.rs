use crate::error::{AnalyzerError, Result};
use crate::filter::criteria::FilterCriteria;
use crate::record::Level;
use crate::source::{AtomicOutput, LineReader, open_source};
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub output: PathBuf,
    pub matched: u64,
}

/// Copies every line of `reader` whose record satisfies `criteria` to `writer`,
/// byte for byte. Unparseable lines are never copied.
pub fn filter_lines<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    criteria: &FilterCriteria,
) -> io::Result<u64> {
    let mut matched = 0;

    for line in LineReader::new(reader) {
        let line = line?;
        if line.record().is_some_and(|r| criteria.matches(&r)) {
            writer.write_all(&line.bytes)?;
            matched += 1;
        }
    }

    writer.flush()?;
    Ok(matched)
}

/// Filters the file at `input` into `output`, or into the criteria's default
/// file name under `prefix` when no output is given.
///
/// The destination is only created once the whole input has been processed.
pub fn filter_file(
    input: &Path,
    output: Option<&Path>,
    criteria: &FilterCriteria,
    prefix: &str,
) -> Result<FilterOutcome> {
    let reader = open_source(input)?;
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| criteria.default_output(prefix));

    let mut out = AtomicOutput::create(&output)?;
    let mut source = ReadSide::new(reader);
    let matched = filter_lines(&mut source, &mut out, criteria).map_err(|e| {
        if source.failed {
            AnalyzerError::read(input, e)
        } else {
            AnalyzerError::write(&output, e)
        }
    })?;

    let output = out.commit()?;
    tracing::info!(
        matched,
        source = %input.display(),
        output = %output.display(),
        "filtered {criteria}"
    );

    Ok(FilterOutcome { output, matched })
}

pub fn filter_by_level(
    input: &Path,
    level: Level,
    output: Option<&Path>,
    prefix: &str,
) -> Result<FilterOutcome> {
    filter_file(input, output, &FilterCriteria::level(level), prefix)
}

pub fn filter_by_tag(
    input: &Path,
    tag: &str,
    output: Option<&Path>,
    prefix: &str,
) -> Result<FilterOutcome> {
    filter_file(input, output, &FilterCriteria::tag(tag), prefix)
}

/// Remembers whether an I/O error came from the wrapped reader, so a failed
/// copy can be blamed on the right file.
struct ReadSide<R> {
    inner: R,
    failed: bool,
}

impl<R> ReadSide<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            failed: false,
        }
    }
}

impl<R: Read> Read for ReadSide<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf).inspect_err(|_| self.failed = true)
    }
}

impl<R: BufRead> BufRead for ReadSide<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self.inner.fill_buf() {
            Ok(buf) => Ok(buf),
            Err(e) => {
                self.failed = true;
                Err(e)
            }
        }
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}
