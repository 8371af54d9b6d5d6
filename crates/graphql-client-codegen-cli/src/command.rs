use crate::Cli;
use crate::CommandResult;

/// A subcommand which, once parsed, runs to completion and reports what to
/// print and which exit code to use.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
