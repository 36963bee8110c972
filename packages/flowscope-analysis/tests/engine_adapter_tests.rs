//! Engine adapter tests
//!
//! EngineCommand is exercised against small shell scripts standing in for a
//! real engine; ReportReplay against report files on disk.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use flowscope_analysis::{EngineCommand, ErrorKind, ReportReplay, SymbolicEngine};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

mod common;

/// Drop an executable engine script into `dir`
fn script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn report_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("report.json");
    fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// EngineCommand
// ============================================================================

#[test]
fn command_reads_stdin_and_decodes_stdout() {
    let dir = TempDir::new().unwrap();
    let report = report_file(&dir, common::SAMPLE_REPORT);
    let engine = script(
        &dir,
        "engine.sh",
        &format!("cat > /dev/null\ncat {}", report.display()),
    );

    let report = EngineCommand::new(&engine)
        .analyze(common::SAMPLE_SOURCE)
        .unwrap();

    assert_eq!(report.method.name, "foo");
    assert_eq!(report.cfg.entry_block_id(), Some(5));
    assert_eq!(report.exec.nodes.len(), 3);
}

#[test]
fn command_passes_configured_arguments() {
    let dir = TempDir::new().unwrap();
    let report = report_file(&dir, common::SAMPLE_REPORT);
    // Engine that only answers when called with the expected flag
    let engine = script(
        &dir,
        "engine.sh",
        &format!(
            "cat > /dev/null\n[ \"$1\" = \"--dialect=java\" ] || exit 9\ncat {}",
            report.display()
        ),
    );

    let ok = EngineCommand::new(&engine)
        .with_args(vec!["--dialect=java".to_string()])
        .analyze(common::SAMPLE_SOURCE);
    assert!(ok.is_ok());

    let err = EngineCommand::new(&engine)
        .analyze(common::SAMPLE_SOURCE)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Engine);
}

#[test]
fn command_surfaces_stderr_on_failure() {
    let dir = TempDir::new().unwrap();
    let engine = script(&dir, "engine.sh", "echo 'analysis exploded' >&2\nexit 3");

    let err = EngineCommand::new(&engine)
        .analyze(common::SAMPLE_SOURCE)
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Engine);
    assert!(err.message.contains("analysis exploded"));
}

#[test]
fn command_rejects_malformed_engine_output() {
    let dir = TempDir::new().unwrap();
    let engine = script(&dir, "engine.sh", "cat > /dev/null\necho 'not json'");

    let err = EngineCommand::new(&engine)
        .analyze(common::SAMPLE_SOURCE)
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Report);
}

#[test]
fn command_reports_a_missing_executable() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("no-such-engine");

    let err = EngineCommand::new(&missing)
        .analyze(common::SAMPLE_SOURCE)
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Engine);
    assert!(err.message.contains("failed to spawn"));
}

// ============================================================================
// ReportReplay
// ============================================================================

#[test]
fn replay_serves_the_report_file() {
    let dir = TempDir::new().unwrap();
    let path = report_file(&dir, common::SAMPLE_REPORT);

    let report = ReportReplay::new(&path).analyze("ignored").unwrap();

    assert_eq!(report.method.name, "foo");
    assert_eq!(report.exec.nodes[1].edges[0].parent, 0);
}

#[test]
fn replay_rereads_the_file_on_every_request() {
    let dir = TempDir::new().unwrap();
    let path = report_file(&dir, common::SAMPLE_REPORT);
    let replay = ReportReplay::new(&path);

    assert_eq!(replay.analyze("ignored").unwrap().method.name, "foo");

    let edited = common::SAMPLE_REPORT.replace("\"name\": \"foo\"", "\"name\": \"bar\"");
    fs::write(&path, edited).unwrap();

    assert_eq!(replay.analyze("ignored").unwrap().method.name, "bar");
}

#[test]
fn replay_rejects_a_malformed_report() {
    let dir = TempDir::new().unwrap();
    let path = report_file(&dir, "{ not json");

    let err = ReportReplay::new(&path).analyze("ignored").unwrap_err();

    assert_eq!(err.kind, ErrorKind::Report);
}

#[test]
fn replay_reports_a_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone.json");

    let err = ReportReplay::new(&missing).analyze("ignored").unwrap_err();

    assert_eq!(err.kind, ErrorKind::Engine);
    assert!(err.message.contains("failed to read report"));
}
