use crate::file_reader;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_merge::ast;
use libgraphql_merge::merge_documents;
use libgraphql_merge::MergeError;
use std::collections::BTreeSet;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct MergeCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Write the merged operation to this file instead of stdout.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files whose operations should be merged. Files are \
             merged in sorted path order.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for MergeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<MergeCmdError> = vec![];
        let graphql_file_exts = normalize_file_exts(&self.graphql_file_exts);

        // Find all GraphQL files recursively located at or under each path
        // passed as an arg. A BTreeSet keeps the merge order stable no matter
        // how the filesystem orders directory entries.
        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files: usize = 0;
        let mut file_paths = BTreeSet::<PathBuf>::new();
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(MergeCmdError::Scan {
                            path: path.to_owned(),
                            err,
                        });
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue
                }

                if !has_graphql_file_ext(entry_path, &graphql_file_exts) {
                    log::trace!("Skipping non-graphql file: {entry_path:#?}.");
                    num_skipped_files += 1;
                    continue
                }

                log::trace!("Found file at {entry_path:#?}.");
                match canonicalize(entry_path) {
                    Ok(file_path) => { file_paths.insert(file_path); },
                    Err(e) => errors.push(e),
                }
            }
        }

        // If the user specifies a single file path as an argument, presume the
        // user explicitly wants that file merged as a GraphQL file -- even if
        // its file extension doesn't match one of the `graphql_file_exts`.
        if file_paths.is_empty()
            && errors.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            match canonicalize(first_arg_path) {
                Ok(file_path) => {
                    log::warn!(
                        "Proceeding to merge {file_path:#?} even though it \
                        doesn't match any of the --graphql-file-exts ({}).",
                        graphql_file_exts.iter()
                            .map(|ext| format!("`.{ext}`"))
                            .collect::<Vec<_>>()
                            .join(", "),
                    );
                    num_skipped_files = num_skipped_files.saturating_sub(1);
                    file_paths.insert(file_path);
                },
                Err(e) => errors.push(e),
            }
        }

        if file_paths.is_empty() && errors.is_empty() {
            errors.push(MergeCmdError::NoGraphQLFilesFound);
        }

        if !errors.is_empty() {
            return failure(&errors);
        }

        log::debug!("Found {} GraphQL files to be merged.", file_paths.len());

        let mut documents = Vec::with_capacity(file_paths.len());
        for file_path in &file_paths {
            let content = match file_reader::read_content(file_path) {
                Ok(content) => content,
                Err(e) => {
                    errors.push(e.into());
                    continue
                },
            };

            match ast::parse(content.as_str()) {
                Ok(document) => {
                    log::debug!(
                        "Parsed {} definitions from {file_path:#?}.",
                        document.definitions.len(),
                    );
                    documents.push(document);
                },
                Err(err) => errors.push(MergeCmdError::Parse {
                    file_path: file_path.to_owned(),
                    err,
                }),
            }
        }

        if !errors.is_empty() {
            return failure(&errors);
        }

        let num_operations: usize =
            documents.iter()
                .map(|doc| doc.definitions.len())
                .sum();

        let merged = match merge_documents(&documents) {
            Ok(merged) => merged,
            Err(e) => return failure(&[MergeCmdError::Merge(e)]),
        };
        let merged_src = merged.to_string();

        log::info!(
            "Merged {num_operations} operations from {} files (skipped {} \
            non-graphql files).",
            file_paths.len(),
            num_skipped_files,
        );

        match self.output {
            None => CommandResult::stdout(format_args!("{}", merged_src.trim_end())),

            Some(output_path) => match std::fs::write(&output_path, merged_src) {
                Ok(()) => CommandResult::stdout(format_args!(
                    "{} Merged {num_operations} operations from {} files into \
                    {output_path:#?}.",
                    output_utils::GREEN_CHECK,
                    file_paths.len(),
                )),

                Err(err) => failure(&[MergeCmdError::WriteOutput {
                    output_path,
                    err,
                }]),
            },
        }
    }
}

#[derive(Debug, Error)]
enum MergeCmdError {
    #[error("Failed to canonicalize {path:?}: {err}")]
    Canonicalize {
        path: PathBuf,
        err: std::io::Error,
    },

    #[error("Failed to merge operations: {0}")]
    Merge(#[from] MergeError),

    #[error("No GraphQL files found at the given paths.")]
    NoGraphQLFilesFound,

    #[error("Failed to parse {file_path:?}: {err}")]
    Parse {
        file_path: PathBuf,
        err: ast::ParseError,
    },

    #[error("{0}")]
    ReadContent(#[from] file_reader::ReadContentError),

    #[error("Failed to scan {path:?}: {err}")]
    Scan {
        path: PathBuf,
        err: walkdir::Error,
    },

    #[error("Failed to write merged operation to {output_path:?}: {err}")]
    WriteOutput {
        output_path: PathBuf,
        err: std::io::Error,
    },
}

fn failure(errors: &[MergeCmdError]) -> CommandResult {
    CommandResult::stderr(format_args!(
        "{} GraphQL merge errors:\n{}",
        output_utils::RED_X,
        errors.iter()
            .map(|e| format!("  * {e}"))
            .collect::<Vec<_>>()
            .join("\n"),
    ))
}

fn canonicalize(path: &Path) -> Result<PathBuf, MergeCmdError> {
    std::fs::canonicalize(path).map_err(|err| MergeCmdError::Canonicalize {
        path: path.to_path_buf(),
        err,
    })
}

/// Normalize file extensions to their bare form (no leading `.`) so that
/// `--graphql-file-exts .gql` and `--graphql-file-exts gql` mean the same
/// thing.
fn normalize_file_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

fn has_graphql_file_ext(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()))
        .unwrap_or(false)
}
