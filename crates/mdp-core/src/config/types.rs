//! Configuration type definitions

use serde::Deserialize;

/// A named status, priority, label or type with a short description
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl NamedEntry {
    fn new(name: &str, description: &str) -> Self {
        NamedEntry {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

pub type StatusConfig = NamedEntry;
pub type PriorityConfig = NamedEntry;
pub type LabelConfig = NamedEntry;
pub type TypeConfig = NamedEntry;

/// Issue statuses grouped by workflow category
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct IssueStatuses {
    pub triage: Vec<StatusConfig>,
    pub backlog: Vec<StatusConfig>,
    pub unstarted: Vec<StatusConfig>,
    pub started: Vec<StatusConfig>,
    pub completed: Vec<StatusConfig>,
    pub canceled: Vec<StatusConfig>,
}

impl IssueStatuses {
    /// Categories in workflow order
    pub fn categories(&self) -> [&[StatusConfig]; 6] {
        [
            &self.triage,
            &self.backlog,
            &self.unstarted,
            &self.started,
            &self.completed,
            &self.canceled,
        ]
    }
}

/// Milestone statuses grouped by workflow category
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct MilestoneStatuses {
    pub backlog: Vec<StatusConfig>,
    pub planned: Vec<StatusConfig>,
    pub in_progress: Vec<StatusConfig>,
    pub completed: Vec<StatusConfig>,
    pub canceled: Vec<StatusConfig>,
}

impl MilestoneStatuses {
    /// Categories in workflow order
    pub fn categories(&self) -> [&[StatusConfig]; 5] {
        [
            &self.backlog,
            &self.planned,
            &self.in_progress,
            &self.completed,
            &self.canceled,
        ]
    }
}

/// Issue settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueConfig {
    pub prefix: String,
    #[serde(default)]
    pub statuses: IssueStatuses,
    #[serde(default)]
    pub priorities: Vec<PriorityConfig>,
    #[serde(default)]
    pub labels: Vec<LabelConfig>,
    #[serde(default)]
    pub types: Vec<TypeConfig>,
}

/// Milestone settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MilestoneConfig {
    pub prefix: String,
    #[serde(default)]
    pub statuses: MilestoneStatuses,
    #[serde(default)]
    pub priorities: Vec<PriorityConfig>,
    #[serde(default)]
    pub labels: Vec<LabelConfig>,
}

/// Project configuration, stored in `.mdp/project.json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectConfig {
    pub issues: IssueConfig,
    pub milestones: MilestoneConfig,
}

fn shared_priorities() -> Vec<PriorityConfig> {
    vec![
        NamedEntry::new("None", "No priority assigned"),
        NamedEntry::new("Low", "Low priority"),
        NamedEntry::new("Medium", "Medium priority"),
        NamedEntry::new("High", "High priority"),
        NamedEntry::new("Urgent", "Requires immediate attention"),
    ]
}

impl Default for ProjectConfig {
    /// The `software` preset
    fn default() -> Self {
        let labels = vec![
            NamedEntry::new("bug", "Bug report"),
            NamedEntry::new("enhancement", "Improvement to existing functionality"),
            NamedEntry::new("documentation", "Documentation related"),
            NamedEntry::new("security", "Security related"),
            NamedEntry::new("frontend", "Frontend related"),
            NamedEntry::new("backend", "Backend related"),
        ];

        ProjectConfig {
            issues: IssueConfig {
                prefix: "ISS".to_string(),
                statuses: IssueStatuses {
                    triage: vec![],
                    backlog: vec![NamedEntry::new("Backlog", "Not yet triaged")],
                    unstarted: vec![NamedEntry::new("To Do", "Ready to be worked on")],
                    started: vec![NamedEntry::new("In Progress", "Actively being worked on")],
                    completed: vec![NamedEntry::new("Done", "Work completed")],
                    canceled: vec![],
                },
                priorities: shared_priorities(),
                labels: labels.clone(),
                types: vec![
                    NamedEntry::new("task", "General work item"),
                    NamedEntry::new("bug", "Something broken"),
                    NamedEntry::new("feature", "New functionality"),
                    NamedEntry::new("chore", "Maintenance, refactoring"),
                    NamedEntry::new("spike", "Research or investigation"),
                ],
            },
            milestones: MilestoneConfig {
                prefix: "M".to_string(),
                statuses: MilestoneStatuses {
                    backlog: vec![],
                    planned: vec![NamedEntry::new("Planning", "Defining scope and goals")],
                    in_progress: vec![
                        NamedEntry::new("Active", "In progress"),
                        NamedEntry::new("On Hold", "Temporarily paused"),
                    ],
                    completed: vec![NamedEntry::new("Completed", "All goals met")],
                    canceled: vec![],
                },
                priorities: shared_priorities(),
                labels,
            },
        }
    }
}
