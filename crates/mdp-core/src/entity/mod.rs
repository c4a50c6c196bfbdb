//! Tracked entities: issues, milestones and the project record

pub mod computed;
pub mod frontmatter;

use std::fmt;

use serde::{Deserialize, Serialize};

use frontmatter::lenient;

/// A checklist item stored in front matter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistItem {
    #[serde(deserialize_with = "lenient::string")]
    text: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub done: bool,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>, done: bool) -> Self {
        ChecklistItem {
            text: Some(text.into()),
            done,
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// Project health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectHealth {
    OnTrack,
    AtRisk,
    OffTrack,
}

impl ProjectHealth {
    /// Parse a stored health value; unknown values are dropped
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "on-track" => Some(ProjectHealth::OnTrack),
            "at-risk" => Some(ProjectHealth::AtRisk),
            "off-track" => Some(ProjectHealth::OffTrack),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectHealth::OnTrack => "on-track",
            ProjectHealth::AtRisk => "at-risk",
            ProjectHealth::OffTrack => "off-track",
        }
    }
}

impl fmt::Display for ProjectHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A timestamped log entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogEntry {
    #[serde(deserialize_with = "lenient::string")]
    timestamp: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    author: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    body: Option<String>,
    /// Only meaningful on project log entries
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    health: Option<String>,
}

impl LogEntry {
    pub fn new(
        timestamp: impl Into<String>,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        LogEntry {
            timestamp: Some(timestamp.into()),
            author: Some(author.into()),
            body: Some(body.into()),
            health: None,
        }
    }

    pub fn timestamp(&self) -> &str {
        self.timestamp.as_deref().unwrap_or("")
    }

    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or("")
    }

    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    pub fn health(&self) -> Option<ProjectHealth> {
        self.health.as_deref().and_then(ProjectHealth::parse)
    }
}

/// Join log entry bodies into one space-separated string
pub fn join_log_bodies(log: &[LogEntry]) -> String {
    log.iter().map(LogEntry::body).collect::<Vec<_>>().join(" ")
}

/// Join checklist item texts into one space-separated string
pub fn join_checklist_texts(checklist: &[ChecklistItem]) -> String {
    checklist
        .iter()
        .map(ChecklistItem::text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Issue front matter (YAML header)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IssueFrontmatter {
    #[serde(deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub issue_type: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub priority: Option<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub labels: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub assignee: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub milestone: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub estimate: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub spent: Option<f64>,
    #[serde(deserialize_with = "lenient::string")]
    pub due_date: Option<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub blocked_by: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub parent: Option<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub related_to: Vec<String>,
    #[serde(deserialize_with = "lenient::records")]
    pub checklist: Vec<ChecklistItem>,
    #[serde(deserialize_with = "lenient::records")]
    pub log: Vec<LogEntry>,
    #[serde(deserialize_with = "lenient::string")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub updated_at: Option<String>,
}

/// An issue read from `.mdp/issues/<folder>/<folder>.md`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub issue_type: Option<String>,
    pub status: String,
    pub priority: Option<String>,
    pub labels: Vec<String>,
    pub assignee: Option<String>,
    pub milestone: Option<String>,
    #[serde(serialize_with = "crate::format::serialize_opt_number")]
    pub estimate: Option<f64>,
    #[serde(serialize_with = "crate::format::serialize_opt_number")]
    pub spent: Option<f64>,
    pub due_date: Option<String>,
    pub blocked_by: Vec<String>,
    pub parent: Option<String>,
    pub related_to: Vec<String>,
    pub checklist: Vec<ChecklistItem>,
    pub log: Vec<LogEntry>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub file_path: String,
    pub content: String,
}

impl Issue {
    pub fn from_frontmatter(
        fm: IssueFrontmatter,
        folder: &str,
        file_path: String,
        content: String,
    ) -> Self {
        Issue {
            id: fm.id.unwrap_or_else(|| id_from_folder(folder)),
            title: fm.title.unwrap_or_default(),
            issue_type: fm.issue_type,
            status: fm.status.unwrap_or_default(),
            priority: fm.priority,
            labels: fm.labels,
            assignee: fm.assignee,
            milestone: fm.milestone,
            estimate: fm.estimate,
            spent: fm.spent,
            due_date: fm.due_date,
            blocked_by: fm.blocked_by,
            parent: fm.parent,
            related_to: fm.related_to,
            checklist: fm.checklist,
            log: fm.log,
            created_at: fm.created_at,
            updated_at: fm.updated_at,
            file_path,
            content,
        }
    }
}

/// Milestone front matter (YAML header)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MilestoneFrontmatter {
    #[serde(deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub priority: Option<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub labels: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub due_date: Option<String>,
    #[serde(deserialize_with = "lenient::records")]
    pub checklist: Vec<ChecklistItem>,
    #[serde(deserialize_with = "lenient::records")]
    pub log: Vec<LogEntry>,
    #[serde(deserialize_with = "lenient::string")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub updated_at: Option<String>,
}

/// Status assigned to milestones that do not declare one
pub const DEFAULT_MILESTONE_STATUS: &str = "Planning";

/// Priority assigned to milestones that do not declare one
pub const DEFAULT_MILESTONE_PRIORITY: &str = "None";

/// A milestone read from `.mdp/milestones/<folder>/<folder>.md`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub status: String,
    pub priority: String,
    pub labels: Vec<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub checklist: Vec<ChecklistItem>,
    pub log: Vec<LogEntry>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub file_path: String,
    pub content: String,
}

impl Milestone {
    pub fn from_frontmatter(
        fm: MilestoneFrontmatter,
        folder: &str,
        file_path: String,
        content: String,
    ) -> Self {
        Milestone {
            id: fm.id.unwrap_or_else(|| id_from_folder(folder)),
            title: fm.title.unwrap_or_default(),
            status: fm
                .status
                .unwrap_or_else(|| DEFAULT_MILESTONE_STATUS.to_string()),
            priority: fm
                .priority
                .unwrap_or_else(|| DEFAULT_MILESTONE_PRIORITY.to_string()),
            labels: fm.labels,
            start_date: fm.start_date,
            due_date: fm.due_date,
            checklist: fm.checklist,
            log: fm.log,
            created_at: fm.created_at,
            updated_at: fm.updated_at,
            file_path,
            content,
        }
    }
}

/// Project front matter from `.mdp/project.md`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectFrontmatter {
    #[serde(deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub instructions: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub health: Option<String>,
    #[serde(deserialize_with = "lenient::records")]
    pub log: Vec<LogEntry>,
    #[serde(deserialize_with = "lenient::string")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub updated_at: Option<String>,
}

/// The project record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub health: Option<ProjectHealth>,
    pub log: Vec<LogEntry>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub file_path: String,
    pub content: String,
}

impl Project {
    pub fn from_frontmatter(fm: ProjectFrontmatter, file_path: String, content: String) -> Self {
        Project {
            title: fm.title.unwrap_or_default(),
            description: fm.description,
            instructions: fm.instructions,
            health: fm.health.as_deref().and_then(ProjectHealth::parse),
            log: fm.log,
            created_at: fm.created_at,
            updated_at: fm.updated_at,
            file_path,
            content,
        }
    }
}

/// Derive an id from a folder name like `ISS-12-fix-login` (first two dash-separated parts)
pub fn id_from_folder(folder: &str) -> String {
    folder.splitn(3, '-').take(2).collect::<Vec<_>>().join("-")
}
