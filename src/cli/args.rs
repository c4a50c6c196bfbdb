use clap::Args;

use mdp_core::search::DEFAULT_LIMIT;

/// Arguments for `mdp search`
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search query text
    #[arg(long)]
    pub query: String,

    /// Entity type: issues, milestones, project, all
    #[arg(long, default_value = "all")]
    pub entity: String,

    /// Comma-separated fields to search: title, content, log, checklist
    #[arg(long)]
    pub fields: Option<String>,

    /// Pre-filter by comma-separated statuses
    #[arg(short = 's', long)]
    pub status: Option<String>,

    /// Maximum number of results
    #[arg(long, default_value_t = DEFAULT_LIMIT.to_string())]
    pub limit: String,
}

/// `--include-content` / `--no-include-content`; the body is included by default
#[derive(Args, Debug, Clone, Default)]
pub struct ContentArgs {
    /// Include the markdown body in output (default)
    #[arg(long = "include-content", overrides_with = "no_include_content")]
    include_content: bool,

    /// Exclude the markdown body from output
    #[arg(long = "no-include-content", overrides_with = "include_content")]
    no_include_content: bool,
}

impl ContentArgs {
    /// Whether the body should be part of the output; the last flag given wins
    pub fn include(&self) -> bool {
        self.include_content || !self.no_include_content
    }
}

/// Arguments for `issue get` and `milestone get`
#[derive(Args, Debug, Clone)]
pub struct GetArgs {
    /// Entity ID, matched ignoring case
    #[arg(long)]
    pub id: String,

    #[command(flatten)]
    pub content: ContentArgs,
}

/// Split a comma-separated list, trimming entries and dropping empty ones
pub fn parse_comma_separated(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
