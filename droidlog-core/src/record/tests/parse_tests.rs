use crate::record::{Level, LogRecord, parse_line, truncate_chars};
use pretty_assertions::assert_eq;

#[test]
fn parse_well_formed_line() {
    // Arrange
    let line = "12-31 14:19:40.332 D/BatteryChargeControl( 2026): hello world";

    // Act
    let record = parse_line(line);

    // Assert
    assert_eq!(
        record,
        Some(LogRecord {
            timestamp: "12-31 14:19:40.332".to_string(),
            level: Level::Debug,
            tag: "BatteryChargeControl".to_string(),
            pid: "2026".to_string(),
            message: "hello world".to_string(),
        })
    );
}

#[test]
fn parse_tolerates_trailing_newline() {
    let record = parse_line("01-02 03:04:05.678 E/ActivityManager(  512): ANR in app\r\n").unwrap();

    assert_eq!(record.level, Level::Error);
    assert_eq!(record.tag, "ActivityManager");
    assert_eq!(record.pid, "512");
    assert_eq!(record.message, "ANR in app");
}

#[test]
fn parse_rejects_separator_lines() {
    assert_eq!(parse_line("--------- beginning of main"), None);
    assert_eq!(parse_line("--------- beginning of system\n"), None);
}

#[test]
fn parse_rejects_free_text() {
    assert_eq!(parse_line("not a log line at all"), None);
    assert_eq!(parse_line(""), None);
    assert_eq!(parse_line("   \n"), None);
}

#[test]
fn parse_rejects_unknown_level() {
    assert_eq!(parse_line("12-31 14:19:40.332 X/Tag( 1): message"), None);
    assert_eq!(parse_line("12-31 14:19:40.332 e/Tag( 1): message"), None);
}

#[test]
fn parse_rejects_truncated_record() {
    // A capture killed mid-write leaves a partial final line behind.
    assert_eq!(parse_line("12-31 14:19:40.332 W/WifiStateMachi"), None);
    assert_eq!(parse_line("12-31 14:19:40.332 W/Wifi( 10"), None);
}

#[test]
fn parse_rejects_non_numeric_pid() {
    assert_eq!(parse_line("12-31 14:19:40.332 I/Tag(abc): message"), None);
}

#[test]
fn parse_rejects_blank_tag() {
    assert_eq!(parse_line("12-31 14:19:40.332 I/   ( 12): message"), None);
}

#[test]
fn parse_keeps_tag_spaces_and_trims_edges() {
    let record = parse_line("12-31 14:19:40.332 W/Wifi HAL Service ( 733): scan failed").unwrap();

    assert_eq!(record.tag, "Wifi HAL Service");
    assert_eq!(record.message, "scan failed");
}

#[test]
fn parse_allows_empty_message() {
    let record = parse_line("12-31 14:19:40.332 V/Choreographer( 99):").unwrap();

    assert_eq!(record.level, Level::Verbose);
    assert_eq!(record.message, "");
}

#[test]
fn parse_message_may_contain_header_delimiters() {
    let record =
        parse_line("12-31 14:19:40.332 E/DnsProxy( 42): lookup(foo): failed E/x(1): y").unwrap();

    assert_eq!(record.tag, "DnsProxy");
    assert_eq!(record.message, "lookup(foo): failed E/x(1): y");
}

#[test]
fn parse_handles_non_ascii_messages() {
    let record = parse_line("12-31 14:19:40.332 I/Ünïcödé( 7): 日本語 ✓ \u{FFFD}").unwrap();

    assert_eq!(record.tag, "Ünïcödé");
    assert_eq!(record.message, "日本語 ✓ \u{FFFD}");
}

#[test]
fn parse_accepts_wide_whitespace_between_date_and_time() {
    let record = parse_line("12-31   14:19:40.33 F/libc( 1): Fatal signal 11").unwrap();

    assert_eq!(record.timestamp, "12-31   14:19:40.33");
    assert_eq!(record.level, Level::Fatal);
}

#[test]
fn issue_key_truncates_by_characters() {
    let record = parse_line("12-31 14:19:40.332 E/Tag( 1): ééééé").unwrap();

    assert_eq!(record.issue_key(3), "Tag: ééé");
    assert_eq!(record.issue_key(50), "Tag: ééééé");
}

#[test]
fn truncate_chars_never_splits_code_points() {
    assert_eq!(truncate_chars("日本語テキスト", 2), "日本");
    assert_eq!(truncate_chars("short", 100), "short");
    assert_eq!(truncate_chars("", 5), "");
}
