//! `mdp project get` - show the project record

use tracing::debug;

use crate::cli::Cli;
use crate::commands::format::table::{cell, log_summary};
use crate::commands::format::{entity_json, print_success, render_details};
use mdp_core::entity::Project;
use mdp_core::error::{MdpError, Result};
use mdp_core::format::OutputFormat;
use mdp_core::store::Store;

/// Execute `project get`
pub fn get(cli: &Cli, store: &Store, include_content: bool, format: OutputFormat) -> Result<()> {
    debug!(include_content, "project_get");

    let path = store.project_md_path();
    let project = store.read_project()?.ok_or_else(|| {
        MdpError::config(format!("project.md not found at {}", path.display()))
    })?;

    if cli.quiet {
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            let omit: &[&str] = if include_content { &[] } else { &["content"] };
            print_success(entity_json(&project, &[], omit)?)
        }
        OutputFormat::Table => {
            println!("{}", render_details_table(&project, include_content));
            Ok(())
        }
    }
}

pub fn render_details_table(project: &Project, include_content: bool) -> String {
    let mut fields = vec![
        ("title", project.title.clone()),
        ("description", cell(project.description.as_deref())),
        ("instructions", cell(project.instructions.as_deref())),
        (
            "health",
            project.health.map(|h| h.to_string()).unwrap_or_default(),
        ),
        ("updatedAt", cell(project.updated_at.as_deref())),
    ];
    // newest entries first
    fields.extend(project.log.iter().rev().map(|entry| ("log", log_summary(entry))));

    render_details(&fields, include_content.then_some(project.content.as_str()))
}
