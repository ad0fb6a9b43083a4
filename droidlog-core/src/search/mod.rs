use crate::error::{AnalyzerError, Result};
use crate::source::{LineReader, open_source};
use serde::Serialize;
use std::io::{self, BufRead};
use std::path::Path;


/// Most hits a search reports; scanning stops once it is reached.
pub const SEARCH_RESULT_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub line_number: usize,
    /// The matching line without its terminator.
    pub line: String,
}

/// Lazy keyword scan over raw lines, parsed or not.
pub struct Search<R> {
    lines: LineReader<R>,
    needle: String,
    case_sensitive: bool,
    remaining: usize,
}

pub fn search<R: BufRead>(reader: R, keyword: &str, case_sensitive: bool) -> Search<R> {
    let needle = if case_sensitive {
        keyword.to_string()
    } else {
        keyword.to_lowercase()
    };

    Search {
        lines: LineReader::new(reader),
        needle,
        case_sensitive,
        remaining: SEARCH_RESULT_LIMIT,
    }
}

impl<R> Search<R> {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.remaining = limit;
        self
    }
}

impl<R: BufRead> Iterator for Search<R> {
    type Item = io::Result<SearchHit>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        for line in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };

            let text = line.text();
            let found = if self.case_sensitive {
                text.contains(&self.needle)
            } else {
                text.to_lowercase().contains(&self.needle)
            };

            if found {
                self.remaining -= 1;
                return Some(Ok(SearchHit {
                    line_number: line.number,
                    line: line.display_text(),
                }));
            }
        }

        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub keyword: String,
    pub hits: Vec<SearchHit>,
    /// True when the scan stopped at [`SEARCH_RESULT_LIMIT`].
    pub limit_reached: bool,
}

pub fn search_file(path: &Path, keyword: &str, case_sensitive: bool) -> Result<SearchOutcome> {
    let hits = search(open_source(path)?, keyword, case_sensitive)
        .collect::<io::Result<Vec<_>>>()
        .map_err(|e| AnalyzerError::read(path, e))?;

    let limit_reached = hits.len() >= SEARCH_RESULT_LIMIT;
    tracing::info!(
        source = %path.display(),
        keyword,
        case_sensitive,
        hits = hits.len(),
        "search complete"
    );

    Ok(SearchOutcome {
        keyword: keyword.to_string(),
        hits,
        limit_reached,
    })
}
