use crate::error::{AnalyzerError, Result};
use crate::record::{Level, LogRecord, truncate_chars};
use crate::source::{open_source, records};
use crate::stats::constants::{SUMMARY_MESSAGE_CHARS, TOP_TAGS};
use crate::stats::counter::{LevelCounts, TallyCounter};
use serde::Serialize;
use std::path::Path;

/// An error or warning retained for the summary listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueEntry {
    pub tag: String,
    /// Full message; shortened only when rendered.
    pub message: String,
}

impl IssueEntry {
    pub fn summary(&self) -> String {
        format!(
            "{}: {}",
            self.tag,
            truncate_chars(&self.message, SUMMARY_MESSAGE_CHARS)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelShare {
    pub level: Level,
    pub count: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogStats {
    pub total: u64,
    pub levels: LevelCounts,
    pub tags: TallyCounter,
    pub errors: Vec<IssueEntry>,
    pub warnings: Vec<IssueEntry>,
}

impl LogStats {
    /// Non-zero levels in display order with their share of all records.
    ///
    /// Empty when no records were seen.
    pub fn level_shares(&self) -> Vec<LevelShare> {
        if self.total == 0 {
            return Vec::new();
        }

        Level::DISPLAY_ORDER
            .iter()
            .map(|&level| (level, self.levels.get(level)))
            .filter(|(_, count)| *count > 0)
            .map(|(level, count)| LevelShare {
                level,
                count,
                percent: count as f64 / self.total as f64 * 100.0,
            })
            .collect()
    }

    pub fn top_tags(&self) -> Vec<(&str, u64)> {
        self.tags.most_common(TOP_TAGS)
    }
}

#[derive(Debug, Default)]
pub struct StatsAggregator {
    levels: LevelCounts,
    tags: TallyCounter,
    errors: Vec<IssueEntry>,
    warnings: Vec<IssueEntry>,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: &LogRecord) {
        self.levels.record(record.level);
        self.tags.record(&record.tag);

        let bucket = match record.level {
            Level::Error => &mut self.errors,
            Level::Warning => &mut self.warnings,
            _ => return,
        };

        bucket.push(IssueEntry {
            tag: record.tag.clone(),
            message: record.message.clone(),
        });
    }

    pub fn finish(self) -> LogStats {
        LogStats {
            total: self.levels.total(),
            levels: self.levels,
            tags: self.tags,
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}

pub fn aggregate<'a>(records: impl IntoIterator<Item = &'a LogRecord>) -> LogStats {
    let mut agg = StatsAggregator::new();
    for record in records {
        agg.push(record);
    }
    agg.finish()
}

/// Streams the file at `path` through a [`StatsAggregator`].
pub fn analyze_file(path: &Path) -> Result<LogStats> {
    let mut agg = StatsAggregator::new();

    for record in records(open_source(path)?) {
        let record = record.map_err(|e| AnalyzerError::read(path, e))?;
        agg.push(&record);
    }

    let stats = agg.finish();
    tracing::info!(
        source = %path.display(),
        total = stats.total,
        errors = stats.errors.len(),
        warnings = stats.warnings.len(),
        "analysis complete"
    );

    Ok(stats)
}
