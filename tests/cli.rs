//! Integration tests for the snapkeep binary
//!
//! Safe mode makes the command surface testable without a ZFS pool or a
//! MySQL server: mutating commands are printed instead of executed.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn snapkeep(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("snapkeep").unwrap();
    cmd.env("SNAPKEEP_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn test_help_lists_commands() {
    let data_dir = TempDir::new().unwrap();

    snapkeep(&data_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("snapshot"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("dump"));
}

#[test]
fn test_snapshot_create_safe_mode_prints_command() {
    let data_dir = TempDir::new().unwrap();

    snapkeep(&data_dir)
        .args([
            "snapshot", "create", "--dataset", "tank/data", "--name", "nightly", "--ttl", "30d",
            "--safe",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Executing command: zfs snapshot tank/data@nightly_"))
        .stdout(predicate::str::contains("_exp_30d"));
}

#[test]
fn test_snapshot_create_recursive_safe_mode() {
    let data_dir = TempDir::new().unwrap();

    snapkeep(&data_dir)
        .args([
            "snapshot", "create", "-d", "tank", "-n", "hourly", "-t", "36h", "-r", "-s",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("zfs snapshot -r tank@hourly_"))
        .stdout(predicate::str::contains("_exp_36h"));
}

#[test]
fn test_invalid_ttl_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    snapkeep(&data_dir)
        .args([
            "snapshot", "create", "-d", "tank", "-n", "nightly", "-t", "30w", "-s",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported time-to-live unit"));
}

#[test]
fn test_export_without_destination_fails() {
    let data_dir = TempDir::new().unwrap();

    snapkeep(&data_dir)
        .args(["export", "--dataset", "tank/data", "--safe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no destination folder configured"));
}

#[test]
fn test_dump_safe_mode_prints_mysqldump_command() {
    let data_dir = TempDir::new().unwrap();
    let remote_dir = TempDir::new().unwrap();

    snapkeep(&data_dir)
        .args([
            "dump",
            "--database",
            "shop",
            "--db-user",
            "backup",
            "--db-host",
            "db.internal",
            "--ttl",
            "30d",
            "--remote",
            remote_dir.path().to_str().unwrap(),
            "--safe",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Executing command: mysqldump --user=backup --host=db.internal shop",
        ))
        .stdout(predicate::str::contains("_exp_30d.sql"));
}

#[test]
fn test_config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    snapkeep(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("snapkeep Configuration"))
        .stdout(predicate::str::contains("Spool directory"))
        .stdout(predicate::str::contains("(not set)"));
}
