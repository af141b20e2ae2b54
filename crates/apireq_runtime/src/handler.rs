//! The transport seam of the request helper.

use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;

/// Error raised by a request handler.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Sends one GraphQL document to the API.
///
/// The handler returns the raw response payload: the operation results keyed
/// by field name, an object carrying `errors`, or `None` for an empty
/// response.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn request(&self, query: &str, variables: Value) -> Result<Option<Value>, HandlerError>;
}

/// Adapts an async closure into a [`RequestHandler`].
pub struct FnHandler<F> {
    f: F,
}

/// Wraps `f(query, variables)` as a request handler.
pub fn handler_fn<F, Fut>(f: F) -> FnHandler<F>
where
    F: Fn(String, Value) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<Value>, HandlerError>> + Send + 'static,
{
    FnHandler { f }
}

#[async_trait]
impl<F, Fut> RequestHandler for FnHandler<F>
where
    F: Fn(String, Value) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<Value>, HandlerError>> + Send + 'static,
{
    async fn request(&self, query: &str, variables: Value) -> Result<Option<Value>, HandlerError> {
        (self.f)(query.to_string(), variables).await
    }
}
