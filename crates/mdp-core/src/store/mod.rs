//! Project store for mdp
//!
//! A project is any directory containing `.mdp/`:
//!
//! ```text
//! .mdp/
//!   project.json          configuration
//!   project.md            project record
//!   issues/<folder>/<folder>.md
//!   milestones/<folder>/<folder>.md
//! ```

pub(crate) mod io;
pub mod paths;

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;

use crate::config::ProjectConfig;
use crate::entity::{
    Issue, IssueFrontmatter, Milestone, MilestoneFrontmatter, Project, ProjectFrontmatter,
};
use crate::error::Result;
use crate::trace_time;
use paths::{ISSUES_DIR, MILESTONES_DIR, PROJECT_DIR, PROJECT_FILE, PROJECT_MD};

/// An opened mdp project
#[derive(Debug)]
pub struct Store {
    /// Project root (the directory containing `.mdp/`)
    root: PathBuf,
    config: ProjectConfig,
}

impl Store {
    /// Discover a project by walking up from the given directory
    pub fn discover(start: &Path) -> Result<Self> {
        let root = paths::discover_project(start)?;
        Self::open(&root)
    }

    /// Open a project at the given root or `.mdp` directory
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        let root = paths::resolve_project_root(path)?;
        let config = ProjectConfig::load(&root.join(PROJECT_DIR).join(PROJECT_FILE))?;
        debug!(root = %root.display(), "opened project");
        Ok(Store { root, config })
    }

    /// Project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `.mdp` directory
    pub fn project_dir(&self) -> PathBuf {
        self.root.join(PROJECT_DIR)
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Read all issues in folder-name order
    pub fn read_issues(&self) -> Vec<Issue> {
        let start = Instant::now();
        let base = self.project_dir().join(ISSUES_DIR);
        let relative = format!("{}/{}", PROJECT_DIR, ISSUES_DIR);

        let issues: Vec<Issue> = io::read_entity_files::<IssueFrontmatter>(&base, &relative)
            .into_iter()
            .map(|f| Issue::from_frontmatter(f.frontmatter, &f.folder, f.relative_path, f.content))
            .collect();

        trace_time!(start, "read_issues", count = issues.len());
        issues
    }

    /// Read all milestones in folder-name order
    pub fn read_milestones(&self) -> Vec<Milestone> {
        let start = Instant::now();
        let base = self.project_dir().join(MILESTONES_DIR);
        let relative = format!("{}/{}", PROJECT_DIR, MILESTONES_DIR);

        let milestones: Vec<Milestone> =
            io::read_entity_files::<MilestoneFrontmatter>(&base, &relative)
                .into_iter()
                .map(|f| {
                    Milestone::from_frontmatter(f.frontmatter, &f.folder, f.relative_path, f.content)
                })
                .collect();

        trace_time!(start, "read_milestones", count = milestones.len());
        milestones
    }

    /// Path of `project.md`
    pub fn project_md_path(&self) -> PathBuf {
        self.project_dir().join(PROJECT_MD)
    }

    /// Read the project record; `None` when `project.md` does not exist
    pub fn read_project(&self) -> Result<Option<Project>> {
        let path = self.project_md_path();
        if !path.exists() {
            return Ok(None);
        }

        let (frontmatter, content) = io::read_markdown::<ProjectFrontmatter>(&path)?;
        Ok(Some(Project::from_frontmatter(
            frontmatter,
            format!("{}/{}", PROJECT_DIR, PROJECT_MD),
            content,
        )))
    }
}
