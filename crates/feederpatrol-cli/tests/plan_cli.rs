use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
        .canonicalize()
        .expect("fixture table present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("feederpatrol");
    cmd.env("RUST_LOG", "error").arg("--no-color");
    cmd
}

#[test]
fn plan_prints_route_and_writes_table() {
    let temp = tempdir().expect("create temp dir");
    let output = temp.path().join("out").join("drone_path.csv");

    cli()
        .arg("plan")
        .arg("--input")
        .arg(fixture_path("feeder_nodes.csv"))
        .arg("--output-csv")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Worst path (weight 630):"))
        .stdout(predicate::str::contains("21 -> 30 -> 31 -> 32 -> 33"))
        .stdout(predicate::str::contains("1. * 21 (Drone 0)"))
        .stdout(predicate::str::contains("[Overlap]"))
        .stdout(predicate::str::contains("Drone 4: 370 meters"))
        .stdout(predicate::str::contains("Total path distance: 1810 meters"))
        .stdout(predicate::str::contains("Status: complete"));

    let written = fs::read_to_string(&output).expect("assignment table written");
    assert_eq!(written.lines().count(), 22);
    assert!(written.starts_with("NodeID,X,Y,drone_id\n21,500,500,0\n"));
}

#[test]
fn single_drone_has_no_overlap_lines() {
    let temp = tempdir().expect("create temp dir");
    let output = temp.path().join("drone_path.csv");

    cli()
        .arg("plan")
        .arg("--input")
        .arg(fixture_path("feeder_nodes.csv"))
        .arg("--output-csv")
        .arg(&output)
        .arg("--num-drones")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Overlap]").not())
        .stdout(predicate::str::contains("Drone 0: 1810 meters"));

    let written = fs::read_to_string(&output).expect("assignment table written");
    assert_eq!(written.lines().count(), 18);
}

#[test]
fn json_format_emits_summary() {
    let temp = tempdir().expect("create temp dir");
    let output = temp.path().join("drone_path.csv");

    let assert = cli()
        .arg("plan")
        .arg("--input")
        .arg(fixture_path("feeder_nodes.csv"))
        .arg("--output-csv")
        .arg(&output)
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["status"], "complete");
    assert_eq!(value["drone_count"], 5);
    assert_eq!(value["steps"].as_array().map(Vec::len), Some(21));
}

#[test]
fn disconnected_network_still_succeeds() {
    let temp = tempdir().expect("create temp dir");
    let output = temp.path().join("drone_path.csv");

    cli()
        .arg("plan")
        .arg("--input")
        .arg(fixture_path("disconnected_nodes.csv"))
        .arg("--output-csv")
        .arg(&output)
        .arg("--start-node")
        .arg("1")
        .arg("--num-drones")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: partial (2 unreached: 90, 91)"));

    assert!(output.exists());
}

#[test]
fn unknown_start_node_falls_back() {
    let temp = tempdir().expect("create temp dir");

    cli()
        .env("RUST_LOG", "warn")
        .arg("plan")
        .arg("--input")
        .arg(fixture_path("feeder_nodes.csv"))
        .arg("--output-csv")
        .arg(temp.path().join("drone_path.csv"))
        .arg("--start-node")
        .arg("999")
        .assert()
        .success()
        .stderr(predicate::str::contains("starting node '999' not found"))
        .stdout(predicate::str::contains("1. * 21 (Drone 0)"));
}

#[test]
fn missing_input_fails() {
    let temp = tempdir().expect("create temp dir");

    cli()
        .arg("plan")
        .arg("--input")
        .arg(temp.path().join("missing.csv"))
        .arg("--output-csv")
        .arg(temp.path().join("drone_path.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load node table"));
}
