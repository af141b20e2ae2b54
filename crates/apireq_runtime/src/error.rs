//! Request-time errors.

use crate::handler::HandlerError;
use miette::Diagnostic;
use thiserror::Error;

/// Error returned by [`ApiClient::request`](crate::ApiClient::request).
#[derive(Debug, Error, Diagnostic)]
pub enum ApiRequestError {
    #[error("Request handler is not set")]
    #[diagnostic(
        code(apireq::request::handler_not_set),
        help("configure the client with `ApiClient::with_handler` before sending requests")
    )]
    HandlerNotSet,

    #[error("no query or mutation document named `{key}`")]
    #[diagnostic(code(apireq::request::unknown_operation))]
    UnknownOperation { key: String },

    #[error("request handler failed: {0}")]
    #[diagnostic(code(apireq::request::handler))]
    Handler(#[source] HandlerError),

    /// The response carried an `errors` collection.
    #[error("Api request failed")]
    #[diagnostic(code(apireq::request::appsync))]
    AppSync { errors: Vec<serde_json::Value> },

    #[error("failed to serialize variables: {0}")]
    #[diagnostic(code(apireq::request::serialize))]
    Serialize(#[source] serde_json::Error),

    #[error("failed to deserialize `{key}` result: {source}")]
    #[diagnostic(code(apireq::request::deserialize))]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiRequestError {
    /// Returns the response errors when the request failed inside AppSync.
    #[must_use]
    pub fn appsync_errors(&self) -> Option<&[serde_json::Value]> {
        match self {
            Self::AppSync { errors } => Some(errors),
            _ => None,
        }
    }
}

/// Type alias for request results.
pub type ApiRequestResult<T> = std::result::Result<T, ApiRequestError>;
