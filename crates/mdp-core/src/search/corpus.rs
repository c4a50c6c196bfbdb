//! Corpus assembly: turning stored entities into [`SearchDocument`]s

use std::fmt;
use std::str::FromStr;

use crate::entity::{join_checklist_texts, join_log_bodies, Issue, Milestone, Project};
use crate::error::{detail, MdpError};

use super::{EntityKind, SearchDocument, SearchField, SearchableField};

/// Which entity kinds take part in a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityFilter {
    Issues,
    Milestones,
    Project,
    #[default]
    All,
}

impl EntityFilter {
    pub const ALL: [EntityFilter; 4] = [
        EntityFilter::Issues,
        EntityFilter::Milestones,
        EntityFilter::Project,
        EntityFilter::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityFilter::Issues => "issues",
            EntityFilter::Milestones => "milestones",
            EntityFilter::Project => "project",
            EntityFilter::All => "all",
        }
    }

    pub fn includes_project(&self) -> bool {
        matches!(self, EntityFilter::Project | EntityFilter::All)
    }

    pub fn includes_issues(&self) -> bool {
        matches!(self, EntityFilter::Issues | EntityFilter::All)
    }

    pub fn includes_milestones(&self) -> bool {
        matches!(self, EntityFilter::Milestones | EntityFilter::All)
    }
}

impl fmt::Display for EntityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityFilter {
    type Err = MdpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| {
                let valid = Self::ALL
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                MdpError::invalid_input_with(
                    format!("Invalid entity type \"{}\". Valid values: {}", s, valid),
                    vec![("entity".to_string(), detail(s))],
                )
            })
    }
}

/// Options controlling which entities and fields make up the corpus
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusOptions {
    pub entity: EntityFilter,
    pub fields: Vec<SearchableField>,
    /// Case-insensitive status allow-list; empty keeps everything
    pub statuses: Vec<String>,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        CorpusOptions {
            entity: EntityFilter::All,
            fields: SearchableField::ALL.to_vec(),
            statuses: Vec::new(),
        }
    }
}

impl CorpusOptions {
    fn wants(&self, field: SearchableField) -> bool {
        self.fields.contains(&field)
    }
}

/// Anything carrying a workflow status
pub trait HasStatus {
    fn status(&self) -> &str;
}

impl HasStatus for Issue {
    fn status(&self) -> &str {
        &self.status
    }
}

impl HasStatus for Milestone {
    fn status(&self) -> &str {
        &self.status
    }
}

/// Keep items whose status matches one of `statuses`, ignoring case
pub fn filter_by_status<'a, T: HasStatus>(items: &'a [T], statuses: &[String]) -> Vec<&'a T> {
    if statuses.is_empty() {
        return items.iter().collect();
    }
    let wanted: Vec<String> = statuses.iter().map(|s| s.to_lowercase()).collect();
    items
        .iter()
        .filter(|item| wanted.contains(&item.status().to_lowercase()))
        .collect()
}

/// Assemble search documents: project first, then issues, then milestones.
///
/// Entities with no non-empty selected field are left out entirely.
pub fn build_documents(
    project: Option<&Project>,
    issues: &[Issue],
    milestones: &[Milestone],
    opts: &CorpusOptions,
) -> Vec<SearchDocument> {
    let mut docs = Vec::new();

    if opts.entity.includes_project() {
        if let Some(project) = project {
            let fields = project_fields(project, opts);
            if !fields.is_empty() {
                docs.push(SearchDocument {
                    id: "project".to_string(),
                    entity: EntityKind::Project,
                    title: project.title.clone(),
                    status: project
                        .health
                        .map(|h| h.to_string())
                        .unwrap_or_default(),
                    fields,
                });
            }
        }
    }

    if opts.entity.includes_issues() {
        for issue in filter_by_status(issues, &opts.statuses) {
            let log = join_log_bodies(&issue.log);
            let checklist = join_checklist_texts(&issue.checklist);
            let fields = entity_fields(opts, &issue.title, &issue.content, &log, &checklist);
            if !fields.is_empty() {
                docs.push(SearchDocument {
                    id: issue.id.clone(),
                    entity: EntityKind::Issue,
                    title: issue.title.clone(),
                    status: issue.status.clone(),
                    fields,
                });
            }
        }
    }

    if opts.entity.includes_milestones() {
        for milestone in filter_by_status(milestones, &opts.statuses) {
            let log = join_log_bodies(&milestone.log);
            let checklist = join_checklist_texts(&milestone.checklist);
            let fields =
                entity_fields(opts, &milestone.title, &milestone.content, &log, &checklist);
            if !fields.is_empty() {
                docs.push(SearchDocument {
                    id: milestone.id.clone(),
                    entity: EntityKind::Milestone,
                    title: milestone.title.clone(),
                    status: milestone.status.clone(),
                    fields,
                });
            }
        }
    }

    docs
}

fn entity_fields(
    opts: &CorpusOptions,
    title: &str,
    content: &str,
    log: &str,
    checklist: &str,
) -> Vec<SearchField> {
    [
        (SearchableField::Title, title),
        (SearchableField::Content, content),
        (SearchableField::Log, log),
        (SearchableField::Checklist, checklist),
    ]
    .into_iter()
    .filter(|(field, text)| opts.wants(*field) && !text.is_empty())
    .map(|(field, text)| SearchField::new(field, text))
    .collect()
}

fn project_fields(project: &Project, opts: &CorpusOptions) -> Vec<SearchField> {
    let mut fields = Vec::new();

    if opts.wants(SearchableField::Title) && !project.title.is_empty() {
        let mut text = project.title.clone();
        for extra in [&project.description, &project.instructions]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
        {
            text.push(' ');
            text.push_str(extra);
        }
        fields.push(SearchField::new(SearchableField::Title, text));
    }
    if opts.wants(SearchableField::Content) && !project.content.is_empty() {
        fields.push(SearchField::new(SearchableField::Content, project.content.clone()));
    }
    let log = join_log_bodies(&project.log);
    if opts.wants(SearchableField::Log) && !log.is_empty() {
        fields.push(SearchField::new(SearchableField::Log, log));
    }

    fields
}
