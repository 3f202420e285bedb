use std::fs;

use tempfile::TempDir;
use tierlog::{Logger, color};

fn quiet_logger(threshold: i32) -> Logger<Vec<u8>> {
    color::set_enabled(false);
    Logger::with_writer(threshold, Vec::new())
}

#[test]
fn test_threshold_scenario() {
    let mut log = quiet_logger(3);

    log.warn("low", 5);
    log.warn("mid", 2);
    log.set_level(10);
    log.warn("low", 5);

    let out = String::from_utf8(log.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("WARN: mid"));
    assert!(lines[1].contains("WARN: low"));
}

#[test]
fn test_info_fragment_feeds_warn() {
    let mut log = quiet_logger(2);

    let fragment = log.info(2, &[&"with info", &42]);
    log.warn(&fragment, 2);

    let out = String::from_utf8(log.into_inner()).unwrap();
    assert_eq!(out, "[ WARN: with info, 42 ]\n");
}

#[test]
fn test_fatal_converts_into_anyhow() {
    fn run(log: &Logger<Vec<u8>>) -> anyhow::Result<()> {
        log.fatal("shutting down", 1)?;
        Ok(())
    }

    let log = quiet_logger(1);
    let err = run(&log).unwrap_err();
    assert!(err.to_string().contains("FATAL: shutting down"));
}

#[test]
fn test_disable_then_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demo.log");
    let mut log = quiet_logger(9);

    log.log("kept", &path, 1);
    log.disable();
    log.log("dropped", &path, 1);
    log.debug_to_file("dropped", &path, 1);

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("| kept]"));
    assert!(log.into_inner().is_empty());
}
