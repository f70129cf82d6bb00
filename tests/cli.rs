//! Integration tests for the campus-nav binary against the bundled campus map

use std::path::PathBuf;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;

fn campus_nav() -> Command {
    let map = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/campus_map.json");
    let mut cmd = cargo_bin_cmd!("campus-nav");
    cmd.env_remove("CAMPUS_NAV_LOG").arg("--graph").arg(map);
    cmd
}

#[test]
fn test_found_route_exits_0_with_report() {
    campus_nav()
        .args(["--from", "main_gate", "--to", "medical"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total distance:  443.0 m"))
        .stdout(predicate::str::contains("Main Gate"))
        .stdout(predicate::str::contains("Medical Centre"));
}

#[test]
fn test_every_algorithm_is_accepted() {
    for algorithm in ["dijkstra", "astar-euclidean", "astar-manhattan"] {
        campus_nav()
            .args(["--from", "main_gate", "--to", "medical", "--algorithm", algorithm])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("Algorithm:       {algorithm}")));
    }
}

#[test]
fn test_unreachable_goal_exits_1_and_lists_explored() {
    campus_nav()
        .args(["--from", "hostel_a", "--to", "observatory"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No path found between hostel_a and observatory"))
        .stdout(predicate::str::contains("Nodes explored:  11"))
        .stdout(predicate::str::contains("1. Hostel A"));
}

#[test]
fn test_unknown_node_exits_2() {
    campus_nav()
        .args(["--from", "main_gate", "--to", "moon"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("moon"));
}

#[test]
fn test_same_endpoints_exits_2() {
    campus_nav()
        .args(["--from", "library", "--to", "library"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("same node"));
}

#[test]
fn test_unknown_algorithm_exits_2() {
    campus_nav()
        .args(["--from", "main_gate", "--to", "medical", "--algorithm", "bfs"])
        .assert()
        .code(2);
}

#[test]
fn test_json_unreachable_writes_null_cost() {
    campus_nav()
        .args(["--from", "hostel_a", "--to", "observatory", "--json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"cost\": null"))
        .stdout(predicate::str::contains("\"success\": false"));
}

#[test]
fn test_json_route_is_parseable() {
    let output = campus_nav()
        .args(["--from", "main_gate", "--to", "medical", "--json", "-a", "dijkstra"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["cost"], 443.0);
    assert_eq!(result["path"][0], "main_gate");
    assert_eq!(result["success"], true);
}
