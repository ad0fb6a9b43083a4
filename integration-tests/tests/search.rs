use droidlog_core::search::search_file;
use integration_tests::harness::Workspace;
use pretty_assertions::assert_eq;

#[test]
fn search_matches_any_line_ignoring_case() {
    // Arrange
    let ws = Workspace::with_fixture("sample_logcat.txt");

    // Act
    let outcome = search_file(ws.log(), "EXAMPLE", false).unwrap();

    // Assert
    let numbers: Vec<_> = outcome.hits.iter().map(|h| h.line_number).collect();
    assert_eq!(numbers, vec![2, 5, 6, 12, 17, 18, 19]);
    assert!(!outcome.limit_reached);
    assert_eq!(
        outcome.hits[4].line,
        "    at com.example.chat.MainActivity.onCreate(MainActivity.java:42)"
    );
}

#[test]
fn case_sensitive_search_can_miss() {
    let ws = Workspace::with_fixture("sample_logcat.txt");

    let outcome = search_file(ws.log(), "Example", true).unwrap();

    assert!(outcome.hits.is_empty());
}
