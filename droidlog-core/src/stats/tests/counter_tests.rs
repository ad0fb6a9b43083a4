use crate::record::Level;
use crate::stats::{LevelCounts, TallyCounter};
use pretty_assertions::assert_eq;

#[test]
fn most_common_orders_by_count_descending() {
    // Arrange
    let mut counter = TallyCounter::new();
    for key in ["a", "b", "b", "c", "c", "c"] {
        counter.record(key);
    }

    // Act
    let ranked = counter.most_common(10);

    // Assert
    assert_eq!(ranked, vec![("c", 3), ("b", 2), ("a", 1)]);
}

#[test]
fn most_common_breaks_ties_by_first_appearance() {
    let mut counter = TallyCounter::new();
    for key in ["zeta", "alpha", "mid", "alpha", "zeta", "mid"] {
        counter.record(key);
    }

    let ranked = counter.most_common(2);

    assert_eq!(ranked, vec![("zeta", 2), ("alpha", 2)]);
}

#[test]
fn counter_tracks_totals_and_distinct_keys() {
    let mut counter = TallyCounter::new();
    counter.record("x");
    counter.record("x");
    counter.record("y");

    assert_eq!(counter.len(), 2);
    assert_eq!(counter.total(), 3);
    assert_eq!(counter.get("x"), 2);
    assert_eq!(counter.get("missing"), 0);
}

#[test]
fn counter_serializes_in_first_seen_order() {
    let mut counter = TallyCounter::new();
    counter.record("b");
    counter.record("a");
    counter.record("a");

    let json = serde_json::to_string(&counter).unwrap();

    assert_eq!(json, r#"{"b":1,"a":2}"#);
}

#[test]
fn level_counts_start_at_zero_for_every_level() {
    let mut counts = LevelCounts::default();
    counts.record(Level::Error);

    for level in Level::DISPLAY_ORDER {
        let expected = if level == Level::Error { 1 } else { 0 };
        assert_eq!(counts.get(level), expected);
    }
    assert_eq!(counts.total(), 1);
}

#[test]
fn level_counts_serialize_all_levels() {
    let counts = LevelCounts::default();

    let json = serde_json::to_string(&counts).unwrap();

    assert_eq!(json, r#"{"E":0,"W":0,"I":0,"D":0,"V":0,"F":0}"#);
}
