use crate::cli::{
    Commands, ContentArgs, GetArgs, IssueCommands, IssueListArgs, MilestoneCommands,
    MilestoneListArgs, ProjectCommands, SearchArgs,
};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{issue, milestone, project, search};
use mdp_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Search(args) => execute_search(ctx, args),
            Commands::Issue(command) => command.execute(ctx),
            Commands::Milestone(command) => command.execute(ctx),
            Commands::Project(command) => command.execute(ctx),
        }
    }
}

impl Command for IssueCommands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            IssueCommands::List(args) => execute_issue_list(ctx, args),
            IssueCommands::Get(args) => execute_issue_get(ctx, args),
        }
    }
}

impl Command for MilestoneCommands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            MilestoneCommands::List(args) => execute_milestone_list(ctx, args),
            MilestoneCommands::Get(args) => execute_milestone_get(ctx, args),
        }
    }
}

impl Command for ProjectCommands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            ProjectCommands::Get(args) => execute_project_get(ctx, args),
        }
    }
}

fn execute_search(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let store = ctx.open_store()?;
    let request = search::SearchRequest::from_args(args)?;
    let format = ctx.output_format()?;
    search::execute(ctx.cli, &store, &request, format, ctx.start)
}

fn execute_issue_list(ctx: &CommandContext, args: &IssueListArgs) -> Result<()> {
    let store = ctx.open_store()?;
    let request = issue::IssueListRequest::from_args(args)?;
    let format = ctx.output_format()?;
    issue::list(ctx.cli, &store, &request, format, ctx.start)
}

fn execute_issue_get(ctx: &CommandContext, args: &GetArgs) -> Result<()> {
    let store = ctx.open_store()?;
    let format = ctx.output_format()?;
    issue::get(ctx.cli, &store, &args.id, args.content.include(), format)
}

fn execute_milestone_list(ctx: &CommandContext, args: &MilestoneListArgs) -> Result<()> {
    let store = ctx.open_store()?;
    let request = milestone::MilestoneListRequest::from_args(args)?;
    let format = ctx.output_format()?;
    milestone::list(ctx.cli, &store, &request, format, ctx.start)
}

fn execute_milestone_get(ctx: &CommandContext, args: &GetArgs) -> Result<()> {
    let store = ctx.open_store()?;
    let format = ctx.output_format()?;
    milestone::get(ctx.cli, &store, &args.id, args.content.include(), format)
}

fn execute_project_get(ctx: &CommandContext, args: &ContentArgs) -> Result<()> {
    let store = ctx.open_store()?;
    let format = ctx.output_format()?;
    project::get(ctx.cli, &store, args.include(), format)
}
