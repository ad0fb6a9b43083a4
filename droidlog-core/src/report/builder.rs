use crate::record::{Level, LogRecord};
use crate::report::constants::{
    DEDUP_KEY_CHARS, ISSUE_KEY_CHARS, RANKING_LIMIT, UNIQUE_MESSAGE_LIMIT,
};
use crate::stats::TallyCounter;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub name: String,
    pub count: u64,
}

/// A distinct error, with its message untruncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorExcerpt {
    pub timestamp: String,
    pub tag: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticalReport {
    pub generated_at: DateTime<Local>,
    pub source: String,
    pub total_errors: u64,
    pub total_warnings: u64,
    /// Most frequent error issue keys.
    pub frequent_errors: Vec<RankedEntry>,
    /// Tags ranked by error count.
    pub error_components: Vec<RankedEntry>,
    /// First distinct error messages, in file order.
    pub unique_errors: Vec<ErrorExcerpt>,
    /// Tags ranked by warning count.
    pub warning_components: Vec<RankedEntry>,
    pub unique_error_types: usize,
    pub unique_warning_types: usize,
}

#[derive(Debug, Default)]
pub struct ReportBuilder {
    total_errors: u64,
    total_warnings: u64,
    error_tags: TallyCounter,
    warning_tags: TallyCounter,
    error_issues: TallyCounter,
    warning_issues: TallyCounter,
    excerpts: Vec<ErrorExcerpt>,
    seen_excerpts: HashSet<String>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: &LogRecord) {
        match record.level {
            Level::Error => {
                self.total_errors += 1;
                self.error_tags.record(&record.tag);
                self.error_issues.record(&record.issue_key(ISSUE_KEY_CHARS));

                if self.excerpts.len() < UNIQUE_MESSAGE_LIMIT
                    && self.seen_excerpts.insert(record.issue_key(DEDUP_KEY_CHARS))
                {
                    self.excerpts.push(ErrorExcerpt {
                        timestamp: record.timestamp.clone(),
                        tag: record.tag.clone(),
                        message: record.message.clone(),
                    });
                }
            }
            Level::Warning => {
                self.total_warnings += 1;
                self.warning_tags.record(&record.tag);
                self.warning_issues.record(&record.issue_key(ISSUE_KEY_CHARS));
            }
            _ => {}
        }
    }

    pub fn finish(self, source: &str, generated_at: DateTime<Local>) -> CriticalReport {
        CriticalReport {
            generated_at,
            source: source.to_string(),
            total_errors: self.total_errors,
            total_warnings: self.total_warnings,
            frequent_errors: ranked(&self.error_issues),
            error_components: ranked(&self.error_tags),
            unique_errors: self.excerpts,
            warning_components: ranked(&self.warning_tags),
            unique_error_types: self.error_issues.len(),
            unique_warning_types: self.warning_issues.len(),
        }
    }
}

fn ranked(counter: &TallyCounter) -> Vec<RankedEntry> {
    counter
        .most_common(RANKING_LIMIT)
        .into_iter()
        .map(|(name, count)| RankedEntry {
            name: name.to_string(),
            count,
        })
        .collect()
}

pub fn synthesize<'a>(
    records: impl IntoIterator<Item = &'a LogRecord>,
    source: &str,
    generated_at: DateTime<Local>,
) -> CriticalReport {
    let mut builder = ReportBuilder::new();
    for record in records {
        builder.push(record);
    }
    builder.finish(source, generated_at)
}
