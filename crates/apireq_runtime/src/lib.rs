//! Typed AppSync request helper.
//!
//! Rust counterpart of the `apiRequest` helper appended to every generated
//! TypeScript module. An operation key selects a query or mutation document,
//! the configured [`RequestHandler`] sends it, and the field named by the key
//! is extracted from the response.
//!
//! # Example
//!
//! ```ignore
//! use apireq_runtime::{ApiClient, AppSyncQuery, OperationDocuments};
//!
//! let documents = OperationDocuments::new()
//!     .with_query("getUser", "query GetUser($id: ID!) { getUser(id: $id) { id name } }");
//! let client = ApiClient::new(documents).with_handler(my_transport);
//!
//! let user: Option<User> = client
//!     .request_as(&AppSyncQuery::new("getUser", json!({ "id": "1" })))
//!     .await?;
//! ```

pub mod client;
pub mod documents;
pub mod error;
pub mod handler;

pub use client::{extract_result, ApiClient, AppSyncQuery};
pub use documents::OperationDocuments;
pub use error::{ApiRequestError, ApiRequestResult};
pub use handler::{handler_fn, FnHandler, HandlerError, RequestHandler};
