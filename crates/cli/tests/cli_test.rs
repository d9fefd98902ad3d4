//! End-to-end tests for the mindstream binary against the demo data

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos/holiday")
        .join(name)
}

fn mindstream() -> Command {
    let mut cmd = Command::cargo_bin("mindstream").expect("binary is built");
    cmd.env_remove("RUST_LOG")
        .env_remove("MINDSTREAM_PRECISION")
        .env_remove("MINDSTREAM_CANVAS_SIZE");
    cmd
}

#[test]
fn test_validate_demo() {
    mindstream()
        .arg("validate")
        .arg(demo("associations.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("11 valid association records"));
}

#[test]
fn test_validate_rejects_whitespace() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"[{"a": "ice cream", "b": "cold"}]"#).unwrap();

    mindstream()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON object"));
}

#[test]
fn test_stream_writes_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let svg = dir.path().join("stream.svg");
    let csv = dir.path().join("stream.csv");
    let json = dir.path().join("stream.json");
    let dot = dir.path().join("stream.dot");

    mindstream()
        .arg("stream")
        .arg(demo("associations.json"))
        .arg("--valences")
        .arg(demo("valences.json"))
        .args(["--source", "Holiday", "--target", "relax"])
        .arg("--svg")
        .arg(&svg)
        .arg("--csv")
        .arg(&csv)
        .arg("--json")
        .arg(&json)
        .arg("--dot")
        .arg(&dot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mindset stream: holiday -> relax"))
        .stdout(predicate::str::contains("purely positive path"))
        .stdout(predicate::str::contains("mixed path"))
        .stdout(predicate::str::contains("Type betweenness centrality"));

    let figure = std::fs::read_to_string(&svg).unwrap();
    assert!(figure.starts_with("<svg"));

    let table = std::fs::read_to_string(&csv).unwrap();
    assert!(table.starts_with("Path Structure,Path Type,Sum of Edge Betweenness Centralities"));
    assert_eq!(table.lines().count(), 3);

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(report["source"], "holiday");
    assert_eq!(report["paths"].as_array().unwrap().len(), 2);

    assert!(std::fs::read_to_string(&dot).unwrap().contains("--"));
}

#[test]
fn test_stream_conflicting_path() {
    mindstream()
        .arg("stream")
        .arg(demo("associations.json"))
        .arg("--valences")
        .arg(demo("valences.json"))
        .args(["-s", "holiday", "-t", "office"])
        .assert()
        .success()
        .stdout(predicate::str::contains("conflicting path"));
}

#[test]
fn test_stream_precision_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("stream.json");

    mindstream()
        .env("MINDSTREAM_PRECISION", "1")
        .arg("stream")
        .arg(demo("associations.json"))
        .arg("--valences")
        .arg(demo("valences.json"))
        .args(["-s", "holiday", "-t", "relax", "--json"])
        .arg(&json)
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    for path in report["paths"].as_array().unwrap() {
        let betweenness = path["betweenness"].as_f64().unwrap();
        assert_eq!((betweenness * 10.0).round() / 10.0, betweenness);
    }
}

#[test]
fn test_stream_unknown_concept() {
    mindstream()
        .arg("stream")
        .arg(demo("associations.json"))
        .arg("--valences")
        .arg(demo("valences.json"))
        .args(["-s", "holiday", "-t", "mountain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Concept not found in graph: mountain"));
}

#[test]
fn test_paths() {
    mindstream()
        .arg("paths")
        .arg(demo("associations.json"))
        .args(["-s", "holiday", "-t", "relax"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2 shortest paths from holiday to relax (3 hops)",
        ))
        .stdout(predicate::str::contains("1. holiday -> sun -> beach -> relax"));
}

#[test]
fn test_stats_json() {
    let output = mindstream()
        .arg("stats")
        .arg(demo("associations.json"))
        .arg("--valences")
        .arg(demo("valences.json"))
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["node_count"], 10);
    assert_eq!(summary["edge_count"], 11);
    assert_eq!(summary["self_loops"], 1);
    assert_eq!(summary["negative"], 3);
}

#[test]
fn test_centrality_limit() {
    mindstream()
        .arg("centrality")
        .arg(demo("associations.json"))
        .args(["--limit", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Closeness centrality (top 3)"))
        .stdout(predicate::str::contains("  4.").not());
}
