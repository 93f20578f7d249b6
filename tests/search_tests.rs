//! Integration tests for the search and compare commands

mod common;

use common::{roadpath, stdout_json, write_file, LINE_NETWORK};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_default_search_is_dfs_karachi_to_islamabad() {
    let dir = tempdir().unwrap();
    roadpath(dir.path())
        .arg("search")
        .assert()
        .success()
        .stdout(predicate::str::contains("Algorithm: DFS"))
        .stdout(predicate::str::contains("Path:      Karachi → "))
        .stdout(predicate::str::contains(" → Islamabad"))
        .stdout(predicate::str::contains("does not guarantee the shortest path"));
}

#[test]
fn test_search_json_shape() {
    let dir = tempdir().unwrap();
    let output = roadpath(dir.path())
        .args(["--format", "json", "search", "--algo", "ucs", "--from", "Karachi", "--to", "Gilgit"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "UCS");
    assert_eq!(json["found"], true);
    assert_eq!(json["path"][0], "Karachi");
    let path = json["path"].as_array().unwrap();
    assert_eq!(path.last().unwrap(), "Gilgit");
    assert_eq!(json["hops"], path.len() - 1);
    assert_eq!(json["steps"], json["visited_order"].as_array().unwrap().len());
    assert!(json["cost"].as_u64().unwrap() > 1000);
}

#[test]
fn test_ucs_cost_not_above_others_via_compare() {
    let dir = tempdir().unwrap();
    let output = roadpath(dir.path())
        .args(["--format", "json", "compare", "--from", "Quetta", "--to", "Abbottabad"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    let cost = |i: usize| results[i]["cost"].as_u64().unwrap();
    assert_eq!(results[2]["algorithm"], "UCS");
    assert!(cost(2) <= cost(0));
    assert!(cost(2) <= cost(1));
}

#[test]
fn test_case_insensitive_city_names() {
    let dir = tempdir().unwrap();
    roadpath(dir.path())
        .args(["search", "--algo", "bfs", "--from", "karachi", "--to", "HYDERABAD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path:      Karachi → Hyderabad"));
}

#[test]
fn test_fewest_hops_versus_least_cost() {
    let dir = tempdir().unwrap();
    let network = write_file(dir.path(), "line.toml", LINE_NETWORK);

    let bfs = roadpath(dir.path())
        .arg("--network")
        .arg(&network)
        .args(["--format", "json", "search", "--algo", "bfs", "--from", "A", "--to", "D"])
        .output()
        .unwrap();
    let bfs = stdout_json(&bfs);
    assert_eq!(bfs["path"], serde_json::json!(["A", "X", "D"]));

    let ucs = roadpath(dir.path())
        .arg("--network")
        .arg(&network)
        .args(["--format", "json", "search", "--algo", "ucs", "--from", "A", "--to", "D"])
        .output()
        .unwrap();
    let ucs = stdout_json(&ucs);
    assert_eq!(ucs["path"], serde_json::json!(["A", "B", "C", "D"]));
    assert_eq!(ucs["cost"], 333);
    assert!(bfs["cost"].as_u64().unwrap() > 333);

    let dfs = roadpath(dir.path())
        .arg("--network")
        .arg(&network)
        .args(["--format", "json", "search", "--algo", "dfs", "--from", "A", "--to", "D"])
        .output()
        .unwrap();
    let dfs = stdout_json(&dfs);
    assert_eq!(dfs["path"], serde_json::json!(["A", "B", "C", "D"]));
    assert_eq!(dfs["steps"], 4);
}

#[test]
fn test_unreachable_goal_is_not_an_error() {
    let dir = tempdir().unwrap();
    let network = write_file(dir.path(), "line.toml", LINE_NETWORK);

    for algo in ["bfs", "dfs", "ucs"] {
        roadpath(dir.path())
            .arg("--network")
            .arg(&network)
            .args(["search", "--algo", algo, "--from", "A", "--to", "Z"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cost:      ∞"))
            .stdout(predicate::str::contains("Path:      No path found"))
            .stdout(predicate::str::contains("Steps:     5"));
    }
}

#[test]
fn test_unreachable_goal_json_cost_is_null() {
    let dir = tempdir().unwrap();
    let network = write_file(dir.path(), "line.toml", LINE_NETWORK);

    for algo in ["bfs", "dfs", "ucs"] {
        let output = roadpath(dir.path())
            .arg("--network")
            .arg(&network)
            .args(["--format", "json", "search", "--algo", algo, "--from", "Z", "--to", "A"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json = stdout_json(&output);
        assert_eq!(json["found"], false, "{algo}");
        assert_eq!(json["cost"], serde_json::Value::Null, "{algo}");
        assert_eq!(json["path"], serde_json::json!([]), "{algo}");
        assert_eq!(json["steps"], 1, "{algo}");
    }
}

#[test]
fn test_network_from_environment() {
    let dir = tempdir().unwrap();
    let network = write_file(dir.path(), "line.toml", LINE_NETWORK);

    roadpath(dir.path())
        .env("ROADPATH_NETWORK", &network)
        .args(["search", "--algo", "ucs", "--from", "A", "--to", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path:      A → B → C"))
        .stdout(predicate::str::contains("Cost:      222 km"));
}

#[test]
fn test_animate_path_only() {
    let dir = tempdir().unwrap();
    let network = write_file(dir.path(), "line.toml", LINE_NETWORK);

    roadpath(dir.path())
        .arg("--network")
        .arg(&network)
        .args([
            "search", "--algo", "ucs", "--from", "A", "--to", "C", "--animate", "--delay-ms", "0",
            "--mode", "path-only",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[path]  A → B\n[path]  B → C\n[done]"))
        .stdout(predicate::str::contains("[visit]").not());
}

#[test]
fn test_animate_visited() {
    let dir = tempdir().unwrap();
    let network = write_file(dir.path(), "line.toml", LINE_NETWORK);

    roadpath(dir.path())
        .arg("--network")
        .arg(&network)
        .args([
            "search", "--algo", "bfs", "--from", "A", "--to", "B", "--animate", "--delay-ms", "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[visit] A\n[visit] B\n[path]  A → B\n[done]"));
}

#[test]
fn test_compare_human_table() {
    let dir = tempdir().unwrap();
    roadpath(dir.path())
        .args(["compare", "--from", "Karachi", "--to", "Lahore"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Karachi → Lahore"))
        .stdout(predicate::str::contains("ALGO"))
        .stdout(predicate::str::contains("BFS"))
        .stdout(predicate::str::contains("DFS"))
        .stdout(predicate::str::contains("UCS"));
}

#[test]
fn test_repeated_searches_identical() {
    let dir = tempdir().unwrap();
    let run = || {
        roadpath(dir.path())
            .args(["--format", "json", "search", "--algo", "dfs", "--from", "Gilgit", "--to", "Karachi"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}
