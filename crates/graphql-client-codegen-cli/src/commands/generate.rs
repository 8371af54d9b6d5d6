use anyhow::Context;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_client_codegen::CodegenOptions;
use graphql_client_codegen::SCHEMA_NOT_FOUND_PLACEHOLDER;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        help=format!(
            "Name of the generated root client type [default: {}]",
            graphql_client_codegen::DEFAULT_CLIENT_NAME,
        ),
        long,
    )]
    client_name: Option<String>,

    #[arg(
        default_value="",
        help="Module path (`::` or `.` separated) to nest the generated items \
             in. Items are emitted at the top level when empty.",
        long,
    )]
    namespace: String,

    #[arg(
        help="File to write the generated source to. Printed to stdout when \
             omitted.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,

    #[arg(
        default_value=graphql_client_codegen::DEFAULT_RUNTIME_CRATE,
        help="Path to the client runtime crate referenced by generated code.",
        long,
    )]
    runtime_crate: String,

    #[arg(
        help="Map a custom GraphQL scalar onto a Rust type (e.g. \
             `DateTime=chrono::DateTime<chrono::Utc>`). May be repeated.",
        long="scalar",
        value_name="NAME=RUST_TYPE",
        value_parser=parse_scalar_mapping,
    )]
    scalars: Vec<(String, String)>,

    #[arg(
        help="Path to the GraphQL schema (SDL) file to generate a client for.",
        name="SCHEMA_PATH",
        required=true,
    )]
    schema_path: PathBuf,
}
impl GenerateCmd {
    fn codegen_options(&self) -> CodegenOptions {
        let mut options = CodegenOptions::new(self.namespace.as_str())
            .with_runtime_crate(self.runtime_crate.as_str());
        if let Some(client_name) = &self.client_name {
            options = options.with_client_name(client_name.as_str());
        }
        for (scalar_name, rust_type) in &self.scalars {
            options = options.with_scalar_type(scalar_name.as_str(), rust_type.as_str());
        }
        options
    }

    async fn generate(&self) -> anyhow::Result<String> {
        let sdl = tokio::fs::read_to_string(&self.schema_path)
            .await
            .with_context(|| format!("Failed to read {:#?}", self.schema_path))?;

        log::debug!("Generating a client from {:#?}...", self.schema_path);
        graphql_client_codegen::generate_client(&sdl, &self.codegen_options())
            .with_context(|| format!(
                "Failed to generate a client from {:#?}",
                self.schema_path,
            ))
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match self.generate().await {
            Ok(source) => source,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        if source == SCHEMA_NOT_FOUND_PLACEHOLDER {
            log::warn!(
                "{} {:#?} has no `schema {{ ... }}` block; the output only \
                contains a placeholder comment.",
                output_utils::YELLOW_WARNING,
                self.schema_path,
            );
        }

        let Some(output_path) = &self.output else {
            return CommandResult::stdout(format_args!("{source}"));
        };

        if let Err(err) = tokio::fs::write(output_path, source.as_bytes()).await {
            return CommandResult::stderr(format_args!(
                "{} Failed to write {output_path:#?}: {err}",
                output_utils::RED_X,
            ));
        }

        log::info!(
            "{} Wrote the generated client to {output_path:#?}.",
            output_utils::GREEN_CHECK,
        );
        CommandResult::empty()
    }
}

/// Parses a `NAME=RUST_TYPE` scalar mapping argument.
fn parse_scalar_mapping(arg: &str) -> Result<(String, String), String> {
    let Some((scalar_name, rust_type)) = arg.split_once('=') else {
        return Err(format!("expected `NAME=RUST_TYPE`, found `{arg}`"));
    };

    let scalar_name = scalar_name.trim();
    let rust_type = rust_type.trim();
    if scalar_name.is_empty() || rust_type.is_empty() {
        return Err(format!("expected `NAME=RUST_TYPE`, found `{arg}`"));
    }
    Ok((scalar_name.to_string(), rust_type.to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_scalar_mapping;

    #[test]
    fn scalar_mappings_split_on_the_first_equals_sign() {
        assert_eq!(
            parse_scalar_mapping("DateTime = chrono::DateTime<chrono::Utc>"),
            Ok(("DateTime".to_string(), "chrono::DateTime<chrono::Utc>".to_string())),
        );
        assert_eq!(
            parse_scalar_mapping("Json=Map<String, Value=X>"),
            Ok(("Json".to_string(), "Map<String, Value=X>".to_string())),
        );
    }

    #[test]
    fn malformed_scalar_mappings_are_rejected() {
        assert!(parse_scalar_mapping("DateTime").is_err());
        assert!(parse_scalar_mapping("=i64").is_err());
        assert!(parse_scalar_mapping("Cents=").is_err());
    }
}
