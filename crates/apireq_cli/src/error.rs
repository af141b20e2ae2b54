//! CLI errors.

use apireq_codegen::CodegenError;
use apireq_config::ConfigError;
use apireq_schema::SchemaError;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Any failure of a CLI command. All of them are fatal.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Codegen(#[from] CodegenError),

    #[error("failed to read schema {}", .path.display())]
    #[diagnostic(
        code(apireq::cli::read_schema),
        help("schemaPath is resolved relative to the project root")
    )]
    ReadSchema {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write command output")]
    #[diagnostic(code(apireq::cli::output))]
    Output(#[source] std::io::Error),

    #[error("failed to write {}", .path.display())]
    #[diagnostic(code(apireq::cli::write_output))]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for CLI results.
pub type CliResult<T> = std::result::Result<T, CliError>;
