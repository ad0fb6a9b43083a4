use droidlog_core::filter::filter_by_level;
use droidlog_core::record::Level;
use droidlog_core::report::write_report;
use droidlog_core::stats::analyze_file;
use integration_tests::harness::{Workspace, events_with_message, init_test_tracing};
use pretty_assertions::assert_eq;

fn for_source<'a>(
    events: &'a [integration_tests::harness::CapturedEvent],
    ws: &Workspace,
) -> Vec<&'a integration_tests::harness::CapturedEvent> {
    let source = ws.log().display().to_string();
    events
        .iter()
        .filter(|e| e.field("source") == Some(source.as_str()))
        .collect()
}

#[test]
fn analysis_emits_completion_event() {
    // Arrange
    let events = init_test_tracing();
    let ws = Workspace::with_fixture("sample_logcat.txt");

    // Act
    analyze_file(ws.log()).unwrap();

    // Assert
    let done = events_with_message(&events, "analysis complete");
    let mine = for_source(&done, &ws);
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].level, tracing::Level::INFO);
    assert_eq!(mine[0].field("total"), Some("17"));
    assert_eq!(mine[0].field("errors"), Some("6"));
}

#[test]
fn filter_emits_match_count() {
    let events = init_test_tracing();
    let ws = Workspace::with_fixture("sample_logcat.txt");

    filter_by_level(ws.log(), Level::Warning, Some(&ws.path("w.txt")), "logcat").unwrap();

    let done = events_with_message(&events, "filtered Warning entries");
    let mine = for_source(&done, &ws);
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].field("matched"), Some("3"));
}

#[test]
fn report_emits_totals() {
    let events = init_test_tracing();
    let ws = Workspace::with_fixture("sample_logcat.txt");

    write_report(ws.log(), &ws.path("report.txt")).unwrap();

    let done = events_with_message(&events, "critical report written");
    let mine = for_source(&done, &ws);
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].field("unique_error_types"), Some("3"));
    assert_eq!(mine[0].field("warnings"), Some("3"));
}
