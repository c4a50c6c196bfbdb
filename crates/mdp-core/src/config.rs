//! Project configuration for mdp
//!
//! Configuration is stored in `.mdp/project.json` as JSON.

pub mod global;
pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{MdpError, Result};

pub use global::GlobalConfig;
pub use types::{
    IssueConfig, IssueStatuses, LabelConfig, MilestoneConfig, MilestoneStatuses, NamedEntry,
    PriorityConfig, ProjectConfig, StatusConfig, TypeConfig,
};

impl ProjectConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MdpError::config(format!(
                "project.json not found at {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            MdpError::config(format!(
                "Invalid JSON in project config ({}): {}",
                path.display(),
                e
            ))
        })
    }

    /// Issue statuses in the `completed` category
    pub fn done_issue_statuses(&self) -> Vec<&str> {
        self.issues
            .statuses
            .completed
            .iter()
            .map(|s| s.name.as_str())
            .collect()
    }

    /// Every configured issue status name, in workflow order
    pub fn all_issue_statuses(&self) -> Vec<&str> {
        self.issues
            .statuses
            .categories()
            .into_iter()
            .flatten()
            .map(|s| s.name.as_str())
            .collect()
    }

    /// Every configured milestone status name, in workflow order
    pub fn all_milestone_statuses(&self) -> Vec<&str> {
        self.milestones
            .statuses
            .categories()
            .into_iter()
            .flatten()
            .map(|s| s.name.as_str())
            .collect()
    }

    /// Whether `status` names a configured issue or milestone status, ignoring case
    pub fn is_known_status(&self, status: &str) -> bool {
        self.all_issue_statuses()
            .into_iter()
            .chain(self.all_milestone_statuses())
            .any(|s| s.eq_ignore_ascii_case(status))
    }
}
