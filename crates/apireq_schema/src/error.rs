//! Errors raised while loading an introspection schema.

use miette::Diagnostic;
use thiserror::Error;

/// Error building a client schema from an introspection document.
#[derive(Debug, Error, Diagnostic)]
pub enum SchemaError {
    #[error("introspection document is not valid JSON: {0}")]
    #[diagnostic(code(apireq::schema::json))]
    Json(#[from] serde_json::Error),

    #[error("introspection document has no `data` member")]
    #[diagnostic(
        code(apireq::schema::missing_data),
        help("the schema file must hold a full introspection response with a top-level `data` member")
    )]
    MissingData,

    #[error("introspection data has no `__schema` member")]
    #[diagnostic(code(apireq::schema::missing_schema))]
    MissingSchema,

    #[error("malformed type reference: {reason}")]
    #[diagnostic(code(apireq::schema::malformed_type_ref))]
    MalformedTypeRef { reason: String },

    #[error("invalid or incomplete schema, unknown type: {name}")]
    #[diagnostic(code(apireq::schema::unknown_type))]
    UnknownType { name: String },

    #[error("{name} type not found")]
    #[diagnostic(code(apireq::schema::missing_root_type))]
    MissingRootType { name: String },
}

impl SchemaError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedTypeRef {
            reason: reason.into(),
        }
    }
}

/// Type alias for schema results.
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_root_message() {
        let err = SchemaError::MissingRootType {
            name: "Mutation".to_string(),
        };
        assert_eq!(err.to_string(), "Mutation type not found");
    }

    #[test]
    fn test_diagnostic_code() {
        let err = SchemaError::MissingData;
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("apireq::schema::missing_data"));
    }
}
