use droidlog_core::record::Level;
use droidlog_core::stats::{analyze_file, render_summary};
use integration_tests::harness::Workspace;
use pretty_assertions::assert_eq;

const FIXTURE: &str = "sample_logcat.txt";

#[test]
fn fixture_statistics() {
    // Arrange
    let ws = Workspace::with_fixture(FIXTURE);

    // Act
    let stats = analyze_file(ws.log()).unwrap();

    // Assert
    assert_eq!(stats.total, 17);
    assert_eq!(stats.levels.get(Level::Error), 6);
    assert_eq!(stats.levels.get(Level::Info), 4);
    assert_eq!(stats.levels.get(Level::Warning), 3);
    assert_eq!(stats.levels.get(Level::Debug), 2);
    assert_eq!(stats.levels.get(Level::Verbose), 1);
    assert_eq!(stats.levels.get(Level::Fatal), 1);
    assert_eq!(stats.errors.len(), 6);
    assert_eq!(stats.warnings.len(), 3);
    assert_eq!(
        stats.top_tags(),
        vec![
            ("ChatClient", 5),
            ("ActivityManager", 3),
            ("WifiService", 3),
            ("netd", 2),
            ("ConnectivityService", 1),
            ("chatty", 1),
            ("SurfaceFlinger", 1),
            ("libc", 1),
        ]
    );
}

#[test]
fn fixture_summary_lines() {
    let ws = Workspace::with_fixture(FIXTURE);
    let stats = analyze_file(ws.log()).unwrap();

    let out = render_summary(&stats, "sample_logcat.txt");

    assert!(out.contains("LOGCAT ANALYSIS: sample_logcat.txt\n"));
    assert!(out.contains("  E (Error   ):      6 (35.29%)\n"));
    assert!(out.contains("  W (Warning ):      3 (17.65%)\n"));
    assert!(out.contains("  V (Verbose ):      1 ( 5.88%)\n"));
    assert!(out.contains("\n📝 TOTAL LOG ENTRIES: 17\n"));
    assert!(out.contains("       5 - ChatClient\n"));
    assert!(out.contains("\n❌ ERRORS FOUND (6 total):\n"));
    assert!(out.contains("  3. netd: socket() failed: Permission denied\n"));
    assert!(out.contains("\n⚠️  WARNINGS FOUND (3 total):\n"));
}

#[test]
fn statistics_serialize_with_level_letters() {
    let ws = Workspace::with_fixture(FIXTURE);
    let stats = analyze_file(ws.log()).unwrap();

    let json = serde_json::to_value(&stats).unwrap();

    assert_eq!(json["total"], 17);
    assert_eq!(json["levels"]["E"], 6);
    assert_eq!(json["levels"]["F"], 1);
    assert_eq!(json["tags"]["ChatClient"], 5);
    assert_eq!(json["errors"][0]["tag"], "ChatClient");
}
