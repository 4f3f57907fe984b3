// file: tests/integration_test.rs
// version: 0.3.0
// guid: 5c6d7e8f-9a0b-1c2d-3e4f-5a6b7c8d9e0f

//! Integration tests for Argo

use argo::{
    backup::{compose, BackupRequest},
    update::checker::{compare_versions, parse_remote_version},
    update::UpdateOutcome,
    Result,
};
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn log_path() -> PathBuf {
    PathBuf::from("C:\\Users\\test\\Argo.log")
}

#[test]
fn test_end_to_end_composition_scenario() -> Result<()> {
    // Arrange: the canonical all-options-exercised request
    let mut request = BackupRequest::new();
    request.set_source("C:\\A");
    request.set_destination("D:\\B");
    request.mirror = true;
    request.logging = false;
    request.retry_immediately = true;
    request.exclude_file("C:\\A\\x.tmp");
    request.set_file_types_raw("");
    request.max_file_size = String::new();

    // Act
    let command = compose(&request, &log_path())?;

    // Assert: token-for-token
    assert_eq!(command.program, "robocopy");
    assert_eq!(
        command.args,
        vec![
            "C:\\A".to_string(),
            "D:\\B".to_string(),
            "/mir".to_string(),
            "/r:0".to_string(),
            "/w:0".to_string(),
            "/xf".to_string(),
            "C:\\A\\x.tmp".to_string(),
        ]
    );

    Ok(())
}

#[test]
fn test_composition_with_all_exclusion_kinds() -> Result<()> {
    // Arrange
    let mut request = BackupRequest::new();
    request.set_source("C:\\Data");
    request.set_destination("E:\\Backup");
    request.logging = true;
    request.exclude_file("C:\\Data\\skip.iso");
    request.exclude_folder("C:\\Data\\cache");
    request.set_file_types_raw("mp4,mp3");
    request.max_file_size = "1048576".to_string();

    // Act
    let command = compose(&request, &log_path())?;

    // Assert: flags, then file pairs, then folder pairs, then type pairs,
    // then the size cap
    assert_eq!(
        command.args,
        vec![
            "C:\\Data".to_string(),
            "E:\\Backup".to_string(),
            "/log+:C:\\Users\\test\\Argo.log".to_string(),
            "/xf".to_string(),
            "C:\\Data\\skip.iso".to_string(),
            "/xd".to_string(),
            "C:\\Data\\cache".to_string(),
            "/xf".to_string(),
            "mp4".to_string(),
            "/xf".to_string(),
            "mp3".to_string(),
            "/max:1048576".to_string(),
        ]
    );

    Ok(())
}

#[test]
fn test_version_scrape_and_compare_flow() {
    // Arrange: a page in the release-list format with a matching version
    let body = format!("<html><li>Version {}</li></html>", argo::VERSION);

    // Act
    let remote = parse_remote_version(&body).unwrap();
    let outcome = compare_versions(&remote, argo::VERSION);

    // Assert
    assert_eq!(outcome, UpdateOutcome::UpToDate);
}

#[test]
fn test_cli_dry_run_prints_composed_command() {
    let mut cmd = Command::cargo_bin("argo").unwrap();
    cmd.args([
        "backup",
        "--source",
        "C:\\A",
        "--destination",
        "D:\\B",
        "--mirror",
        "--retry-immediately",
        "--exclude-file",
        "C:\\A\\x.tmp",
        "--dry-run",
    ]);

    cmd.assert().success().stdout(predicate::str::contains(
        "robocopy C:\\A D:\\B /mir /r:0 /w:0 /xf C:\\A\\x.tmp",
    ));
}

#[test]
fn test_cli_dry_run_json_output() {
    let mut cmd = Command::cargo_bin("argo").unwrap();
    cmd.args([
        "backup",
        "--source",
        "C:\\A",
        "--destination",
        "D:\\B",
        "--dry-run",
        "--json",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"program\": \"robocopy\""));
}

#[test]
fn test_cli_backup_requires_source_and_destination() {
    let mut cmd = Command::cargo_bin("argo").unwrap();
    cmd.args(["backup", "--source", "C:\\A", "--dry-run"]);

    cmd.assert().failure();
}
