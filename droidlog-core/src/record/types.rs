use crate::record::Level;
use serde::Serialize;

/// One structured logcat entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// `MM-DD HH:MM:SS.mmm`, kept verbatim.
    pub timestamp: String,
    pub level: Level,
    pub tag: String,
    pub pid: String,
    pub message: String,
}

impl LogRecord {
    /// `tag: message`, with the message cut to `limit` characters.
    ///
    /// Records sharing a key are treated as the same recurring issue.
    pub fn issue_key(&self, limit: usize) -> String {
        format!("{}: {}", self.tag, truncate_chars(&self.message, limit))
    }
}

/// Returns the prefix of `s` holding at most `max` characters.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
