mod counter_tests;

use crate::record::{Level, LogRecord};

pub(super) fn record(level: Level, tag: &str, message: &str) -> LogRecord {
    LogRecord {
        timestamp: "12-31 14:19:40.332".to_string(),
        level,
        tag: tag.to_string(),
        pid: "1000".to_string(),
        message: message.to_string(),
    }
}
