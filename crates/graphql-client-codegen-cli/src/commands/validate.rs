use anyhow::Context;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_client_codegen::CodegenError;
use graphql_client_codegen::CodegenOptions;
use graphql_client_codegen::SchemaDocument;
use graphql_client_codegen::codegen::CodeSynthesizer;
use graphql_client_codegen::model::ClientModelBuilder;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[derive(Default)]
struct ValidationSummary {
    num_classes: usize,
    num_enums: usize,
    num_schemaless_files: usize,
}

impl ValidateCmd {
    fn collect_file_paths(
        &self,
        errors: &mut Vec<anyhow::Error>,
    ) -> (Vec<PathBuf>, usize) {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_non_graphql_files: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(err.into());
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue
                }

                log::trace!("Found file at {entry_path:#?}.");
                let is_graphql_file = entry_path.extension()
                    .map(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()))
                    .unwrap_or(false);
                if !is_graphql_file {
                    num_non_graphql_files += 1;
                    continue
                }

                match canonicalize(entry_path) {
                    Ok(file_path) => file_paths.push(file_path),
                    Err(err) => errors.push(err),
                }
            }
        }

        // A single file passed explicitly is validated even when its
        // extension isn't one of `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            match canonicalize(first_arg_path) {
                Ok(file_path) => {
                    log::warn!(
                        "Proceeding to validate {file_path:#?} even though it \
                        doesn't match any of the --graphql-file-exts ({}).",
                        self.graphql_file_exts.iter()
                            .map(|ext| format!("`{ext}`"))
                            .collect::<Vec<_>>()
                            .join(", "),
                    );
                    num_non_graphql_files = num_non_graphql_files.saturating_sub(1);
                    file_paths.push(file_path);
                },
                Err(err) => errors.push(err),
            }
        }

        (file_paths, num_non_graphql_files)
    }

    async fn validate_file(
        file_path: &Path,
        options: &CodegenOptions,
        summary: &mut ValidationSummary,
    ) -> anyhow::Result<()> {
        let sdl = tokio::fs::read_to_string(file_path)
            .await
            .with_context(|| format!("Failed to read {file_path:#?}"))?;

        let document = match SchemaDocument::parse(&sdl) {
            Ok(document) => document,
            Err(CodegenError::SchemaNotFound) => {
                log::debug!("No schema definition block in {file_path:#?}.");
                summary.num_schemaless_files += 1;
                return Ok(());
            },
            Err(err) => return Err(err)
                .with_context(|| format!("Failed to parse {file_path:#?}")),
        };

        let model = ClientModelBuilder::new(&document, options)
            .build()
            .with_context(|| format!("Invalid schema in {file_path:#?}"))?;
        CodeSynthesizer::new(&model, options)
            .synthesize()
            .with_context(|| format!("Failed to generate a client for {file_path:#?}"))?;

        summary.num_classes += model.classes().count();
        summary.num_enums += model.enums().count();
        Ok(())
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<anyhow::Error> = vec![];
        let (file_paths, num_non_graphql_files) =
            self.collect_file_paths(&mut errors);

        log::debug!(
            "Found {} GraphQL files to be validated.",
            file_paths.len(),
        );

        let options = CodegenOptions::default();
        let mut summary = ValidationSummary::default();
        for file_path in &file_paths {
            if let Err(err) = Self::validate_file(file_path, &options, &mut summary).await {
                errors.push(err);
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} GraphQL schema validation errors:\n{}",
                output_utils::RED_X,
                errors.iter()
                    .map(|err| format!("  * {err:#}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL schemas validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Found {} files without a schema definition.\n",
                "  * Validated {} client classes.\n",
                "  * Validated {} enums.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_non_graphql_files,
            summary.num_schemaless_files,
            summary.num_classes,
            summary.num_enums,
        ))
    }
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve {path:#?}"))
}
