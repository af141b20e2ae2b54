//! Configuration errors.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Error loading or resolving the project configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("{} not found", .path.display())]
    #[diagnostic(
        code(apireq::config::not_found),
        help("run the generator from the project root, or pass --config")
    )]
    NotFound { path: PathBuf },

    #[error("failed to read {}", .path.display())]
    #[diagnostic(code(apireq::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    #[diagnostic(code(apireq::config::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("configuration declares no projects")]
    #[diagnostic(code(apireq::config::no_projects))]
    NoProjects,

    #[error("project `{name}` is not declared")]
    #[diagnostic(code(apireq::config::unknown_project))]
    UnknownProject { name: String },

    #[error("schemaPath is not defined")]
    #[diagnostic(code(apireq::config::missing_schema_path))]
    MissingSchemaPath,

    #[error("generatedFileName is not defined")]
    #[diagnostic(
        code(apireq::config::missing_api_file_path),
        help("set extensions.amplify.generatedFileName to the module generated by amplify codegen")
    )]
    MissingApiFilePath,

    #[error("docsFilePath is not defined")]
    #[diagnostic(
        code(apireq::config::missing_docs_file_path),
        help("set extensions.amplify.docsFilePath to the directory holding queries and mutations")
    )]
    MissingDocsFilePath,

    #[error("apiRequest extension is not defined")]
    #[diagnostic(
        code(apireq::config::missing_api_request),
        help("add extensions.apiRequest.generatedFileName with the output path")
    )]
    MissingApiRequest,
}

/// Type alias for configuration results.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
