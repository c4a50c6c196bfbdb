//! `mdp search` command - ranked text search over the project
//!
//! - `--query` free text, tokenized and ranked with field-weighted BM25
//! - `--entity` restricts to issues, milestones or the project record
//! - `--fields` restricts which fields are searched
//! - `--status` pre-filters issues and milestones by status
//! - `--limit` caps the number of results (default 20)

pub mod format;

use std::time::Instant;

use tracing::debug;

use crate::cli::args::{parse_comma_separated, SearchArgs};
use crate::cli::Cli;
use mdp_core::bail_invalid;
use mdp_core::error::Result;
use mdp_core::format::OutputFormat;
use mdp_core::search::corpus::{build_documents, CorpusOptions, EntityFilter};
use mdp_core::search::{self, SearchableField};
use mdp_core::store::Store;
use mdp_core::trace_time;

use self::format::{output_json, output_table};

/// A validated search invocation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub options: CorpusOptions,
    pub limit: usize,
}

impl SearchRequest {
    pub fn from_args(args: &SearchArgs) -> Result<Self> {
        if args.query.trim().is_empty() {
            bail_invalid!("Query cannot be empty", "query" => args.query);
        }

        let entity: EntityFilter = args.entity.parse()?;

        let fields = match args.fields.as_deref() {
            Some(raw) => parse_comma_separated(Some(raw))
                .iter()
                .map(|f| f.parse::<SearchableField>())
                .collect::<Result<Vec<_>>>()?,
            None => SearchableField::ALL.to_vec(),
        };

        let statuses = parse_comma_separated(args.status.as_deref());

        // whole numbers only; "5abc" and "2.5" are rejected rather than truncated
        let limit = match args.limit.trim().parse::<usize>() {
            Ok(n) if n >= 1 => n,
            _ => bail_invalid!("Limit must be a positive integer", "limit" => args.limit),
        };

        Ok(SearchRequest {
            query: args.query.clone(),
            options: CorpusOptions {
                entity,
                fields,
                statuses,
            },
            limit,
        })
    }
}

/// Execute the search command
pub fn execute(
    cli: &Cli,
    store: &Store,
    request: &SearchRequest,
    format: OutputFormat,
    start: Instant,
) -> Result<()> {
    let options = &request.options;
    debug!(
        query = %request.query,
        entity = %options.entity,
        fields = ?options.fields,
        statuses = ?options.statuses,
        limit = request.limit,
        "search_params"
    );

    for status in &options.statuses {
        if !store.config().is_known_status(status) {
            debug!(status = %status, "status is not configured for this project");
        }
    }

    let project = if options.entity.includes_project() {
        match store.read_project() {
            Ok(Some(project)) => Some(project),
            Ok(None) => {
                debug!("No project.md found, skipping project search");
                None
            }
            Err(e) => {
                debug!(error = %e, "Unreadable project.md, skipping project search");
                None
            }
        }
    } else {
        None
    };

    let issues = if options.entity.includes_issues() {
        store.read_issues()
    } else {
        Vec::new()
    };
    let milestones = if options.entity.includes_milestones() {
        store.read_milestones()
    } else {
        Vec::new()
    };
    debug!(
        issues = issues.len(),
        milestones = milestones.len(),
        "loaded entities"
    );

    let documents = build_documents(project.as_ref(), &issues, &milestones, options);
    let results = search::search(&documents, &request.query, request.limit);
    trace_time!(start, "search_command", result_count = results.len());

    if cli.quiet {
        return Ok(());
    }

    match format {
        OutputFormat::Json => output_json(&request.query, &results),
        OutputFormat::Table => {
            output_table(&request.query, &results);
            Ok(())
        }
    }
}
