//! Code generation errors.

use apireq_schema::SchemaError;
use miette::Diagnostic;
use thiserror::Error;

/// Error raised while projecting a schema.
#[derive(Debug, Error, Diagnostic)]
pub enum CodegenError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] SchemaError),

    #[error("unknown model prefix `{prefix}`")]
    #[diagnostic(
        code(apireq::codegen::unknown_model_prefix),
        help("recognised prefixes are get, list, create, update and delete")
    )]
    UnknownModelPrefix { prefix: String },
}

/// Type alias for code generation results.
pub type CodegenResult<T> = std::result::Result<T, CodegenError>;
