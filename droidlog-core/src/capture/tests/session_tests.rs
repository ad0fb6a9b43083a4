use super::{DEVICE_LOG, Tail, fake_adb};
use crate::capture::{AdbCommand, Interrupt, StopReason, capture};
use pretty_assertions::assert_eq;
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn capture_records_until_the_device_stream_ends() {
    // Arrange
    let dir = tempdir().unwrap();
    let adb = AdbCommand::new(fake_adb(dir.path(), 0, Tail::Exit).to_string_lossy(), None);
    let output = dir.path().join("logcat.txt");

    // Act
    let outcome = capture(
        &adb,
        Duration::from_secs(10),
        &output,
        &Interrupt::detached(),
    )
    .unwrap();

    // Assert
    assert_eq!(outcome.stopped_by, StopReason::SourceClosed);
    assert_eq!(outcome.output, output);
    assert_eq!(outcome.bytes, DEVICE_LOG.len() as u64);
    assert_eq!(fs::read_to_string(&output).unwrap(), DEVICE_LOG);
}

#[test]
fn capture_stops_at_the_deadline() {
    let dir = tempdir().unwrap();
    let adb = AdbCommand::new(fake_adb(dir.path(), 0, Tail::Hang).to_string_lossy(), None);
    let output = dir.path().join("logcat.txt");
    let started = Instant::now();

    let outcome = capture(
        &adb,
        Duration::from_millis(300),
        &output,
        &Interrupt::detached(),
    )
    .unwrap();

    assert_eq!(outcome.stopped_by, StopReason::Deadline);
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[test]
fn capture_stops_when_interrupted() {
    let dir = tempdir().unwrap();
    let adb = AdbCommand::new(fake_adb(dir.path(), 0, Tail::Hang).to_string_lossy(), None);
    let interrupt = Interrupt::detached();
    interrupt.trigger();
    let started = Instant::now();

    let outcome = capture(
        &adb,
        Duration::from_secs(30),
        &dir.path().join("logcat.txt"),
        &interrupt,
    )
    .unwrap();

    assert_eq!(outcome.stopped_by, StopReason::Interrupted);
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[test]
fn capture_clears_first_and_passes_the_serial() {
    let dir = tempdir().unwrap();
    let adb = AdbCommand::new(
        fake_adb(dir.path(), 0, Tail::Exit).to_string_lossy(),
        Some("emulator-5554".to_string()),
    );

    capture(
        &adb,
        Duration::from_secs(10),
        &dir.path().join("logcat.txt"),
        &Interrupt::detached(),
    )
    .unwrap();

    let invocations = fs::read_to_string(dir.path().join("args.log")).unwrap();
    assert_eq!(
        invocations,
        "-s emulator-5554 logcat -c\n-s emulator-5554 logcat -v time\n"
    );
}

#[test]
fn failed_buffer_clear_does_not_abort_the_capture() {
    let dir = tempdir().unwrap();
    let adb = AdbCommand::new(fake_adb(dir.path(), 1, Tail::Exit).to_string_lossy(), None);

    let outcome = capture(
        &adb,
        Duration::from_secs(10),
        &dir.path().join("logcat.txt"),
        &Interrupt::detached(),
    )
    .unwrap();

    assert_eq!(outcome.bytes, DEVICE_LOG.len() as u64);
}
