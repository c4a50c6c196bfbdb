use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Get a Command for mdp with a private HOME and no logging or project overrides
pub fn mdp(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("mdp");
    cmd.env("HOME", home)
        .env_remove("MDP_PROJECT_PATH")
        .env_remove("RUST_LOG")
        .env_remove("MDP_LOG");
    cmd
}

/// Write `.mdp/<kind>/<folder>/<folder>.md`
pub fn write_entity(root: &Path, kind: &str, folder: &str, text: &str) {
    let dir = root.join(".mdp").join(kind).join(folder);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{}.md", folder)), text).unwrap();
}

/// A temp directory holding a project (`project/`) and a home directory (`home/`)
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn project(&self) -> std::path::PathBuf {
        self.dir.path().join("project")
    }

    pub fn home(&self) -> std::path::PathBuf {
        self.dir.path().join("home")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = mdp(&self.home());
        cmd.arg("-p").arg(self.project());
        cmd
    }
}

/// An empty project with the default configuration
pub fn empty_project() -> Fixture {
    let dir = tempdir().unwrap();
    let fixture = Fixture { dir };
    fs::create_dir_all(fixture.home()).unwrap();
    let mdp_dir = fixture.project().join(".mdp");
    fs::create_dir_all(&mdp_dir).unwrap();
    fs::write(
        mdp_dir.join("project.json"),
        r#"{"issues":{"prefix":"ISS","statuses":{"completed":[{"name":"Done"}]}},"milestones":{"prefix":"M"}}"#,
    )
    .unwrap();
    fixture
}

/// A project with a project record, three issues and one milestone
pub fn sample_project() -> Fixture {
    let fixture = empty_project();
    let root = fixture.project();

    fs::write(
        root.join(".mdp").join("project.md"),
        "---\ntitle: Apollo\ndescription: Task tracker\nhealth: on-track\n---\n\nProject overview.\n",
    )
    .unwrap();

    write_entity(
        &root,
        "issues",
        "ISS-1-redis-cache",
        "---\nid: ISS-1\ntitle: Implement Redis caching layer\nstatus: To Do\n\
         type: feature\npriority: High\nassignee: sam\nmilestone: M-1\nlabels: [backend]\n\
         estimate: 5\ndueDate: 2024-03-01\ncreatedAt: 2024-01-01T09:00:00Z\n\
         log:\n  - timestamp: 2024-01-02T00:00:00Z\n    author: sam\n    body: Benchmarked the cache\n\
         ---\n\nUse redis for session storage.\n",
    );
    write_entity(
        &root,
        "issues",
        "ISS-2-login-bug",
        "---\nid: ISS-2\ntitle: Fix login bug\nstatus: Done\n\
         type: bug\npriority: Urgent\nmilestone: M-1\nlabels: [bug, frontend]\n\
         estimate: 2\nspent: 1.5\nblockedBy: [ISS-1]\ncreatedAt: 2024-01-05T09:00:00Z\n---\n\nUsers mention redis timeouts during login.\n",
    );
    write_entity(
        &root,
        "issues",
        "ISS-3-docs",
        "---\nid: ISS-3\ntitle: Write documentation\nstatus: Backlog\n\
         priority: Low\nparent: ISS-1\ncreatedAt: 2024-01-10T09:00:00Z\n\
         checklist:\n  - text: Cover the API\n    done: false\n---\n\nDocument everything.\n",
    );
    write_entity(
        &root,
        "milestones",
        "M-1-launch",
        "---\nid: M-1\ntitle: Public launch\nstatus: Active\npriority: High\n\
         dueDate: 2000-01-01\n---\n\nShip after redis work lands.\n",
    );

    fixture
}

/// A second milestone with no issues, due far in the future
pub fn with_planning_milestone(fixture: &Fixture) {
    write_entity(
        &fixture.project(),
        "milestones",
        "M-2-polish",
        "---\nid: M-2\ntitle: Polish\nstatus: Planning\ndueDate: 2999-12-31\n\
         labels: [frontend]\n---\n\nSmall fixes.\n",
    );
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Parse stderr as JSON
pub fn stderr_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).unwrap()
}
