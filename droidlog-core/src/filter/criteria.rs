use crate::record::{Level, LogRecord};
use std::fmt;
use std::path::PathBuf;

/// Which records a filter pass keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCriteria {
    /// Exact level match.
    Level(Level),
    /// Case-insensitive substring of the tag.
    Tag {
        pattern: String,
        needle: String,
    },
}

impl FilterCriteria {
    pub fn level(level: Level) -> Self {
        FilterCriteria::Level(level)
    }

    pub fn tag(pattern: &str) -> Self {
        FilterCriteria::Tag {
            pattern: pattern.to_string(),
            needle: pattern.to_lowercase(),
        }
    }

    pub fn matches(&self, record: &LogRecord) -> bool {
        match self {
            FilterCriteria::Level(level) => record.level == *level,
            FilterCriteria::Tag { needle, .. } => record.tag.to_lowercase().contains(needle),
        }
    }

    /// `<prefix>_<level letter>.txt` or `<prefix>_<tag>.txt`, spaces in the tag
    /// replaced with underscores.
    pub fn default_output(&self, prefix: &str) -> PathBuf {
        let suffix = match self {
            FilterCriteria::Level(level) => level.letter().to_ascii_lowercase().to_string(),
            FilterCriteria::Tag { pattern, .. } => pattern.replace(' ', "_"),
        };
        PathBuf::from(format!("{prefix}_{suffix}.txt"))
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterCriteria::Level(level) => write!(f, "{} entries", level.label()),
            FilterCriteria::Tag { pattern, .. } => write!(f, "entries with tag '{pattern}'"),
        }
    }
}
