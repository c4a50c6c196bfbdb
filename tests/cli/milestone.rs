use crate::cli::support::{
    sample_project, stderr_json, stdout_json, with_planning_milestone, Fixture,
};
use predicates::prelude::*;

fn list_ids(fixture: &Fixture, args: &[&str]) -> Vec<String> {
    let output = fixture
        .cmd()
        .args(["milestone", "list"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "{args:?}");
    stdout_json(&output)["data"]["milestones"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// milestone list
// ============================================================================

#[test]
fn test_milestone_list_progress() {
    let fixture = sample_project();
    with_planning_milestone(&fixture);

    let output = fixture.cmd().args(["milestone", "list"]).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["data"]["total"], 2);

    let launch = &json["data"]["milestones"][0];
    assert_eq!(launch["id"], "M-1");
    assert_eq!(launch["totalIssues"], 2);
    assert_eq!(launch["completedIssues"], 1);
    assert_eq!(launch["completionPercentage"], 50);
    assert_eq!(
        launch["statusBreakdown"],
        serde_json::json!({"Done": 1, "To Do": 1})
    );
    assert_eq!(launch["estimateTotal"], serde_json::json!(7));
    assert_eq!(launch["estimateCompleted"], serde_json::json!(2));
    assert_eq!(launch["spentTotal"], 1.5);
    assert_eq!(launch["isOverdue"], true);
    assert!(launch.get("content").is_none());
    assert!(launch.get("filePath").is_none());

    let polish = &json["data"]["milestones"][1];
    assert_eq!(polish["totalIssues"], 0);
    assert_eq!(polish["completionPercentage"], 0);
    assert_eq!(polish["isOverdue"], false);
}

#[test]
fn test_milestone_list_filters_and_sort() {
    let fixture = sample_project();
    with_planning_milestone(&fixture);

    assert_eq!(list_ids(&fixture, &["--status", "planning"]), ["M-2"]);
    assert_eq!(list_ids(&fixture, &["--priority", "HIGH"]), ["M-1"]);
    assert_eq!(list_ids(&fixture, &["--labels", "frontend"]), ["M-2"]);
    assert_eq!(list_ids(&fixture, &["--overdue", "true"]), ["M-1"]);
    assert_eq!(list_ids(&fixture, &["--overdue", "false"]), ["M-2"]);
    assert_eq!(
        list_ids(&fixture, &["--sort", "completion", "--order", "desc"]),
        ["M-1", "M-2"]
    );
    assert_eq!(
        list_ids(&fixture, &["--sort", "dueDate", "--order", "desc"]),
        ["M-2", "M-1"]
    );
}

#[test]
fn test_milestone_list_table() {
    let fixture = sample_project();

    fixture
        .cmd()
        .args(["-f", "table", "milestone", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ID      TITLE"))
        .stdout(predicate::str::contains("M-1     Public launch"))
        .stdout(predicate::str::contains("   50%       2  2000-01-01"))
        .stdout(predicate::str::ends_with("Total: 1\n"));
}

#[test]
fn test_milestone_list_rejects_bad_sort() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["milestone", "list", "--order", "sideways"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let json = stderr_json(&output);
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
    assert_eq!(json["error"]["details"]["order"], "sideways");
}

// ============================================================================
// milestone get
// ============================================================================

#[test]
fn test_milestone_get() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["milestone", "get", "--id", "m-1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let milestone = &stdout_json(&output)["data"];
    assert_eq!(milestone["id"], "M-1");
    assert_eq!(milestone["content"], "Ship after redis work lands.\n");
    assert_eq!(milestone["filePath"], ".mdp/milestones/M-1-launch/M-1-launch.md");
    assert_eq!(milestone["completionPercentage"], 50);

    let output = fixture
        .cmd()
        .args(["milestone", "get", "--id", "M-1", "--no-include-content"])
        .output()
        .unwrap();
    assert!(stdout_json(&output)["data"].get("content").is_none());
}

#[test]
fn test_milestone_get_table() {
    let fixture = sample_project();

    fixture
        .cmd()
        .args(["-f", "table", "milestone", "get", "--id", "M-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("progress        1/2 (50%)"))
        .stdout(predicate::str::contains("statuses        Done: 1, To Do: 1"))
        .stdout(predicate::str::contains("overdue         yes"))
        .stdout(predicate::str::ends_with("\n\nShip after redis work lands.\n"));
}

#[test]
fn test_milestone_get_not_found() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["milestone", "get", "--id", "M-9"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let json = stderr_json(&output);
    assert_eq!(json["error"]["code"], "MILESTONE_NOT_FOUND");
    assert_eq!(json["error"]["details"]["id"], "M-9");
}
