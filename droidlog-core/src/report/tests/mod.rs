
use crate::record::{Level, LogRecord};
use chrono::{DateTime, Local, TimeZone};

pub(super) fn record(level: Level, timestamp: &str, tag: &str, pid: &str, message: &str) -> LogRecord {
    LogRecord {
        timestamp: timestamp.to_string(),
        level,
        tag: tag.to_string(),
        pid: pid.to_string(),
        message: message.to_string(),
    }
}

pub(super) fn fixed_time() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
}
