use crate::record::{Level, LogRecord};
use once_cell::sync::Lazy;
use regex::Regex;

/// Buffer separator lines emitted by logcat, e.g. `--------- beginning of main`.
pub const SEPARATOR_PREFIX: &str = "--------- beginning of";

// MM-DD HH:MM:SS.mmm L/Tag( PID): message
static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}-\d{2}\s+\d{2}:\d{2}:\d{2}\.\d+)\s+([VDIWEF])/([^(]+)\(\s*(\d+)\):\s*(.*)")
        .expect("logcat line pattern is valid")
});

/// Parses one `logcat -v time` line.
///
/// Returns `None` for separator lines and anything that does not follow the
/// `<timestamp> <level>/<tag>(<pid>): <message>` layout. Trailing line
/// terminators are tolerated.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    if line.starts_with(SEPARATOR_PREFIX) {
        return None;
    }

    let caps = LINE_PATTERN.captures(line.trim())?;

    let tag = caps[3].trim();
    if tag.is_empty() {
        return None;
    }

    let level = caps[2].chars().next().and_then(Level::from_letter)?;

    Some(LogRecord {
        timestamp: caps[1].to_string(),
        level,
        tag: tag.to_string(),
        pid: caps[4].to_string(),
        message: caps[5].to_string(),
    })
}
