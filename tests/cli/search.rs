use crate::cli::support::{
    empty_project, mdp, sample_project, stderr_json, stdout_json, write_entity,
};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Ranking and output
// ============================================================================

#[test]
fn test_search_ranks_title_match_first() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["search", "--query", "redis"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["ok"], true);
    assert_eq!(json["data"]["query"], "redis");
    assert_eq!(json["data"]["total"], 3);

    let first = &json["data"]["results"][0];
    assert_eq!(first["id"], "ISS-1");
    assert_eq!(first["entity"], "issue");
    assert_eq!(first["status"], "To Do");
    assert_eq!(first["matches"][0]["field"], "title");
    assert_eq!(
        first["matches"][0]["snippet"],
        "Implement **Redis** caching layer"
    );
    assert_eq!(first["matches"][1]["field"], "content");
}

#[test]
fn test_search_log_and_checklist_fields() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["search", "--query", "benchmarked"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["results"][0]["matches"][0]["field"], "log");

    let output = fixture
        .cmd()
        .args(["search", "--query", "api"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["data"]["results"][0]["id"], "ISS-3");
    assert_eq!(json["data"]["results"][0]["matches"][0]["field"], "checklist");
}

#[test]
fn test_search_project_record() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["search", "--query", "tracker"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let first = &json["data"]["results"][0];
    assert_eq!(first["id"], "project");
    assert_eq!(first["entity"], "project");
    assert_eq!(first["title"], "Apollo");
    assert_eq!(first["status"], "on-track");
}

#[test]
fn test_search_no_results() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["search", "--query", "kubernetes"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["data"]["total"], 0);
    assert_eq!(json["data"]["results"], serde_json::json!([]));
}

#[test]
fn test_search_empty_project() {
    let fixture = empty_project();

    let output = fixture
        .cmd()
        .args(["search", "--query", "anything"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["data"]["total"], 0);
}

#[test]
fn test_search_table_format() {
    let fixture = sample_project();

    fixture
        .cmd()
        .args(["search", "--query", "redis", "--format", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TYPE"))
        .stdout(predicate::str::contains("MATCHED IN"))
        .stdout(predicate::str::contains("ISS-1"))
        .stdout(predicate::str::contains("title, content"))
        .stdout(predicate::str::contains("Query: \"redis\" — 3 result(s)"));
}

#[test]
fn test_search_table_no_results() {
    let fixture = sample_project();

    fixture
        .cmd()
        .args(["-f", "table", "search", "--query", "kubernetes"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("(no results)"))
        .stdout(predicate::str::contains("0 result(s)"));
}

#[test]
fn test_global_config_default_format() {
    let fixture = sample_project();
    let settings = fixture.home().join(".mdp");
    fs::create_dir_all(&settings).unwrap();
    fs::write(
        settings.join("config.json"),
        r#"{"defaults":{"format":"table"}}"#,
    )
    .unwrap();

    fixture
        .cmd()
        .args(["search", "--query", "redis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MATCHED IN"));

    // explicit flag wins over the global default
    let output = fixture
        .cmd()
        .args(["search", "--query", "redis", "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["ok"], true);
}

#[test]
fn test_global_config_foreign_shapes_do_not_break_search() {
    let fixture = sample_project();
    let settings = fixture.home().join(".mdp");
    fs::create_dir_all(&settings).unwrap();

    for json in [
        r#"{"defaults":{"format":"yaml"}}"#,
        r#"{"tags":{"bug":null}}"#,
        r#"{"presets":{"mine":{"issues":{"statuses":{}}}}}"#,
        r#"{"projects":[{"name":"x"}]}"#,
    ] {
        fs::write(settings.join("config.json"), json).unwrap();
        let output = fixture
            .cmd()
            .args(["search", "--query", "redis"])
            .output()
            .unwrap();
        assert!(output.status.success(), "{json}");
        assert_eq!(stdout_json(&output)["ok"], true, "{json}");
    }
}

#[test]
fn test_global_config_syntax_error() {
    let fixture = sample_project();
    let settings = fixture.home().join(".mdp");
    fs::create_dir_all(&settings).unwrap();
    fs::write(settings.join("config.json"), "{\"defaults\":").unwrap();

    let output = fixture
        .cmd()
        .args(["search", "--query", "redis"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr_json(&output)["error"]["code"], "CONFIG_ERROR");
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_search_limit() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["search", "--query", "redis", "--limit", "1"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["results"][0]["id"], "ISS-1");
}

#[test]
fn test_search_entity_filter() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["search", "--query", "redis", "--entity", "milestones"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["results"][0]["id"], "M-1");
    assert_eq!(json["data"]["results"][0]["entity"], "milestone");
}

#[test]
fn test_search_status_filter_case_insensitive() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["search", "--query", "redis", "-s", "done"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["results"][0]["id"], "ISS-2");
}

#[test]
fn test_search_fields_filter() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["search", "--query", "redis", "--fields", "title"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["results"][0]["id"], "ISS-1");
    let matches = json["data"]["results"][0]["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
}

#[test]
fn test_search_skips_unreadable_issue() {
    let fixture = sample_project();
    write_entity(
        &fixture.project(),
        "issues",
        "ISS-4-broken",
        "---\ntitle: [redis\n---\n",
    );

    let output = fixture
        .cmd()
        .args(["search", "--query", "redis"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["data"]["total"], 3);
}

// ============================================================================
// Project resolution
// ============================================================================

#[test]
fn test_search_discovers_project_from_subdirectory() {
    let fixture = sample_project();
    let nested = fixture.project().join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();

    let output = mdp(&fixture.home())
        .current_dir(&nested)
        .args(["search", "--query", "redis"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["data"]["total"], 3);
}

#[test]
fn test_search_accepts_mdp_directory_path() {
    let fixture = sample_project();

    let output = mdp(&fixture.home())
        .arg("-p")
        .arg(fixture.project().join(".mdp"))
        .args(["search", "--query", "redis"])
        .output()
        .unwrap();
    assert!(output.status.success());
}

#[test]
fn test_search_project_not_found() {
    let dir = tempdir().unwrap();

    let output = mdp(dir.path())
        .arg("-p")
        .arg(dir.path())
        .args(["search", "--query", "redis"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let json = stderr_json(&output);
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"]["code"], "PROJECT_NOT_FOUND");
}

// ============================================================================
// Validation errors
// ============================================================================

#[test]
fn test_search_empty_query_rejected() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["search", "--query", "  "])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let json = stderr_json(&output);
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
    assert_eq!(json["error"]["message"], "Query cannot be empty");
}

#[test]
fn test_search_invalid_limit() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["search", "--query", "redis", "--limit", "0"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let json = stderr_json(&output);
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
    assert_eq!(json["error"]["details"]["limit"], "0");
}

#[test]
fn test_search_limit_must_be_a_whole_number() {
    let fixture = sample_project();

    for limit in ["5abc", "2.5"] {
        let output = fixture
            .cmd()
            .args(["search", "--query", "redis", "--limit", limit])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1), "{limit}");
        let json = stderr_json(&output);
        assert_eq!(json["error"]["code"], "INVALID_INPUT");
        assert_eq!(json["error"]["details"]["limit"], limit);
    }
}

#[test]
fn test_search_invalid_entity_and_field() {
    let fixture = sample_project();

    let output = fixture
        .cmd()
        .args(["search", "--query", "redis", "--entity", "notes"])
        .output()
        .unwrap();
    let json = stderr_json(&output);
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
    assert_eq!(json["error"]["details"]["entity"], "notes");

    let output = fixture
        .cmd()
        .args(["search", "--query", "redis", "--fields", "title,summary"])
        .output()
        .unwrap();
    let json = stderr_json(&output);
    assert_eq!(json["error"]["details"]["field"], "summary");
}

#[test]
fn test_missing_query_is_usage_error() {
    let fixture = sample_project();

    let output = fixture.cmd().arg("search").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr_json(&output)["error"]["code"], "USAGE_ERROR");
}

#[test]
fn test_quiet_suppresses_output() {
    let fixture = sample_project();

    fixture
        .cmd()
        .args(["-q", "search", "--query", "redis"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    fixture
        .cmd()
        .args(["-q", "search", "--query", "redis", "--limit", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}
