use crate::cli::support::{sample_project, stderr_json, stdout_json, Fixture};
use predicates::prelude::*;

/// Run `issue list` with extra arguments and return the listed ids
fn list_ids(fixture: &Fixture, args: &[&str]) -> Vec<String> {
    let output = fixture
        .cmd()
        .args(["issue", "list"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "{args:?}");
    let json = stdout_json(&output);
    json["data"]["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["id"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// issue list
// ============================================================================

#[test]
fn test_issue_list_json() {
    let fixture = sample_project();

    let output = fixture.cmd().args(["issue", "list"]).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["ok"], true);
    assert_eq!(json["data"]["total"], 3);

    let issues = json["data"]["issues"].as_array().unwrap();
    let first = &issues[0];
    assert_eq!(first["id"], "ISS-1");
    assert_eq!(first["type"], "feature");
    assert_eq!(first["estimate"], serde_json::json!(5));
    assert_eq!(first["blocks"], serde_json::json!(["ISS-2"]));
    assert_eq!(first["children"], serde_json::json!(["ISS-3"]));
    assert_eq!(first["checklistProgress"], serde_json::Value::Null);
    assert!(first.get("content").is_none());
    assert!(first.get("log").is_none());
    assert!(first.get("filePath").is_none());

    assert_eq!(issues[1]["spent"], 1.5);
    assert_eq!(issues[2]["checklistTotal"], 1);
    assert_eq!(issues[2]["checklistProgress"], 0);
}

#[test]
fn test_issue_list_filters() {
    let fixture = sample_project();

    assert_eq!(list_ids(&fixture, &["--status", "to do,BACKLOG"]), ["ISS-1", "ISS-3"]);
    assert_eq!(list_ids(&fixture, &["--type", "bug"]), ["ISS-2"]);
    assert_eq!(list_ids(&fixture, &["--priority", "low"]), ["ISS-3"]);
    assert_eq!(list_ids(&fixture, &["--labels", "frontend,docs"]), ["ISS-2"]);
    assert_eq!(list_ids(&fixture, &["--assignee", "none"]), ["ISS-2", "ISS-3"]);
    assert_eq!(list_ids(&fixture, &["--milestone", "m-1"]), ["ISS-1", "ISS-2"]);
    assert_eq!(list_ids(&fixture, &["--milestone", "none"]), ["ISS-3"]);
    assert_eq!(list_ids(&fixture, &["--parent", "ISS-1"]), ["ISS-3"]);
    assert_eq!(list_ids(&fixture, &["--blocked", "true"]), ["ISS-2"]);
    assert_eq!(list_ids(&fixture, &["--blocked", "false"]), ["ISS-1", "ISS-3"]);
}

#[test]
fn test_issue_list_date_filters() {
    let fixture = sample_project();

    assert_eq!(
        list_ids(&fixture, &["--created-after", "2024-01-05"]),
        ["ISS-2", "ISS-3"]
    );
    // the before bound covers the whole day
    assert_eq!(
        list_ids(&fixture, &["--created-before", "2024-01-05"]),
        ["ISS-1", "ISS-2"]
    );
    // issues without a due date never match a due window
    assert_eq!(list_ids(&fixture, &["--due-before", "2024-12-31"]), ["ISS-1"]);
    assert!(list_ids(&fixture, &["--due-after", "2024-03-02"]).is_empty());
}

#[test]
fn test_issue_list_sort_and_order() {
    let fixture = sample_project();

    assert_eq!(
        list_ids(&fixture, &["--sort", "created", "--order", "desc"]),
        ["ISS-3", "ISS-2", "ISS-1"]
    );
    assert_eq!(
        list_ids(&fixture, &["--sort", "title"]),
        ["ISS-2", "ISS-1", "ISS-3"]
    );
}

#[test]
fn test_issue_list_table() {
    let fixture = sample_project();

    fixture
        .cmd()
        .args(["-f", "table", "issue", "list", "--status", "done"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ID        TITLE"))
        .stdout(predicate::str::contains("ISS-2     Fix login bug"))
        .stdout(predicate::str::contains("Urgent"))
        .stdout(predicate::str::ends_with("Total: 1\n"));

    fixture
        .cmd()
        .args(["-f", "table", "issue", "list", "--status", "nope"])
        .assert()
        .success()
        .stdout("(no results)\n\nTotal: 0\n");
}

#[test]
fn test_issue_list_rejects_bad_input() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["issue", "list", "--due-before", "31/12/2024"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let json = stderr_json(&output);
    assert_eq!(json["error"]["code"], "INVALID_DATE");
    assert_eq!(json["error"]["details"]["date"], "31/12/2024");

    let output = fixture
        .cmd()
        .args(["issue", "list", "--sort", "rank"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let json = stderr_json(&output);
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
    assert_eq!(json["error"]["details"]["sort"], "rank");

    let output = fixture
        .cmd()
        .args(["issue", "list", "--blocked", "maybe"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr_json(&output)["error"]["code"], "USAGE_ERROR");
}

// ============================================================================
// issue get
// ============================================================================

#[test]
fn test_issue_get_ignores_id_case() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["issue", "get", "--id", "iss-1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let issue = &stdout_json(&output)["data"];
    assert_eq!(issue["id"], "ISS-1");
    assert_eq!(issue["content"], "Use redis for session storage.\n");
    assert_eq!(issue["filePath"], ".mdp/issues/ISS-1-redis-cache/ISS-1-redis-cache.md");
    assert_eq!(issue["log"][0]["author"], "sam");
    assert_eq!(issue["children"], serde_json::json!(["ISS-3"]));
}

#[test]
fn test_issue_get_without_content() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["issue", "get", "--id", "ISS-2", "--no-include-content"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let issue = &stdout_json(&output)["data"];
    assert!(issue.get("content").is_none());
    assert_eq!(issue["blockedBy"], serde_json::json!(["ISS-1"]));

    // the last flag wins
    let output = fixture
        .cmd()
        .args([
            "issue",
            "get",
            "--id",
            "ISS-2",
            "--no-include-content",
            "--include-content",
        ])
        .output()
        .unwrap();
    assert!(stdout_json(&output)["data"].get("content").is_some());
}

#[test]
fn test_issue_get_table() {
    let fixture = sample_project();

    fixture
        .cmd()
        .args(["-f", "table", "issue", "get", "--id", "ISS-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title           Implement Redis caching layer"))
        .stdout(predicate::str::contains("blocks          ISS-2"))
        .stdout(predicate::str::contains(
            "lastLog         2024-01-02T00:00:00Z sam: Benchmarked the cache",
        ))
        .stdout(predicate::str::ends_with("\n\nUse redis for session storage.\n"));
}

#[test]
fn test_issue_get_not_found() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["issue", "get", "--id", "ISS-99"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let json = stderr_json(&output);
    assert_eq!(json["error"]["code"], "ISSUE_NOT_FOUND");
    assert_eq!(json["error"]["message"], "Issue ISS-99 not found");
    assert_eq!(json["error"]["details"]["id"], "ISS-99");
    assert!(json["error"]["details"]["projectPath"].is_string());
}

#[test]
fn test_issue_get_quiet() {
    let fixture = sample_project();

    fixture
        .cmd()
        .args(["-q", "issue", "get", "--id", "ISS-1"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
