use crate::cli::support::{empty_project, sample_project, stderr_json, stdout_json};
use predicates::prelude::*;

#[test]
fn test_project_get() {
    let fixture = sample_project();

    let output = fixture.cmd().args(["project", "get"]).output().unwrap();
    assert!(output.status.success());

    let project = &stdout_json(&output)["data"];
    assert_eq!(project["title"], "Apollo");
    assert_eq!(project["description"], "Task tracker");
    assert_eq!(project["health"], "on-track");
    assert_eq!(project["filePath"], ".mdp/project.md");
    assert_eq!(project["content"], "Project overview.\n");
}

#[test]
fn test_project_get_without_content() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["project", "get", "--no-include-content"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let project = &stdout_json(&output)["data"];
    assert_eq!(project["title"], "Apollo");
    assert!(project.get("content").is_none());
}

#[test]
fn test_project_get_table() {
    let fixture = sample_project();

    fixture
        .cmd()
        .args(["-f", "table", "project", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title           Apollo"))
        .stdout(predicate::str::contains("health          on-track"))
        .stdout(predicate::str::ends_with("\n\nProject overview.\n"));
}

#[test]
fn test_project_get_missing_record() {
    let fixture = empty_project();

    let output = fixture.cmd().args(["project", "get"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let json = stderr_json(&output);
    assert_eq!(json["error"]["code"], "CONFIG_ERROR");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("project.md not found at"));
}
