mod generate;
mod validate;

use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-codegen")]
pub(crate) enum CommandEnum {
    /// Generate a typed client from a GraphQL schema file.
    Generate(Box<GenerateCmd>),

    /// Check that GraphQL schema files can be turned into typed clients.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
