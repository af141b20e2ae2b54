//! The request client.

use crate::documents::OperationDocuments;
use crate::error::{ApiRequestError, ApiRequestResult};
use crate::handler::RequestHandler;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// One member of the generated `TAppSyncQuery` union.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSyncQuery {
    /// Operation key, which is also the result field name.
    pub key: String,
    #[serde(default)]
    pub variables: Value,
}

impl AppSyncQuery {
    /// Creates a request from raw JSON variables.
    pub fn new(key: impl Into<String>, variables: Value) -> Self {
        Self {
            key: key.into(),
            variables,
        }
    }

    /// Creates a request from typed variables.
    pub fn with_variables<V: Serialize>(key: impl Into<String>, variables: &V) -> ApiRequestResult<Self> {
        let variables = serde_json::to_value(variables).map_err(ApiRequestError::Serialize)?;
        Ok(Self::new(key, variables))
    }
}

/// Sends operations through an explicitly supplied handler.
#[derive(Clone, Default)]
pub struct ApiClient {
    documents: OperationDocuments,
    handler: Option<Arc<dyn RequestHandler>>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("documents", &self.documents)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

impl ApiClient {
    /// Creates a client without a handler.
    pub fn new(documents: OperationDocuments) -> Self {
        Self {
            documents,
            handler: None,
        }
    }

    /// Sets the request handler.
    #[must_use]
    pub fn with_handler(mut self, handler: impl RequestHandler + 'static) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Sets a shared request handler.
    #[must_use]
    pub fn with_shared_handler(mut self, handler: Arc<dyn RequestHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    #[must_use]
    pub fn documents(&self) -> &OperationDocuments {
        &self.documents
    }

    /// Sends an operation and returns the field named by its key.
    pub async fn request(&self, params: &AppSyncQuery) -> ApiRequestResult<Option<Value>> {
        let handler = self.handler.as_ref().ok_or(ApiRequestError::HandlerNotSet)?;
        let query = self
            .documents
            .get(&params.key)
            .ok_or_else(|| ApiRequestError::UnknownOperation {
                key: params.key.clone(),
            })?;

        tracing::debug!(key = %params.key, "sending api request");
        let response = handler
            .request(query, params.variables.clone())
            .await
            .map_err(ApiRequestError::Handler)?;

        extract_result(&params.key, response)
    }

    /// Sends an operation and deserializes its result.
    pub async fn request_as<T: DeserializeOwned>(&self, params: &AppSyncQuery) -> ApiRequestResult<Option<T>> {
        let Some(value) = self.request(params).await? else {
            return Ok(None);
        };

        serde_json::from_value(value)
            .map(Some)
            .map_err(|source| ApiRequestError::Deserialize {
                key: params.key.clone(),
                source,
            })
    }
}

/// Extracts the result of `key` from a response payload.
///
/// A payload holding an `errors` member fails with the collected errors. A
/// missing or null result yields `None`.
pub fn extract_result(key: &str, response: Option<Value>) -> ApiRequestResult<Option<Value>> {
    let Some(mut response) = response else {
        return Ok(None);
    };

    if let Some(errors) = response.get_mut("errors") {
        let errors = match errors.take() {
            Value::Array(errors) => errors,
            Value::Null => Vec::new(),
            other => vec![other],
        };
        tracing::warn!(key, errors = ?errors, "api request failed");
        return Err(ApiRequestError::AppSync { errors });
    }

    Ok(response
        .get_mut(key)
        .map(Value::take)
        .filter(|value| !value.is_null()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_result() {
        let response = json!({ "getUser": { "id": "1" } });
        let result = extract_result("getUser", Some(response)).unwrap();
        assert_eq!(result, Some(json!({ "id": "1" })));
    }

    #[test]
    fn test_extract_missing_or_null() {
        assert_eq!(extract_result("getUser", None).unwrap(), None);
        assert_eq!(extract_result("getUser", Some(json!({}))).unwrap(), None);
        assert_eq!(
            extract_result("getUser", Some(json!({ "getUser": null }))).unwrap(),
            None
        );
    }

    #[test]
    fn test_extract_errors() {
        let response = json!({
            "getUser": null,
            "errors": [{ "message": "Not Authorized to access getUser on type Query" }]
        });

        let err = extract_result("getUser", Some(response)).unwrap_err();
        assert_eq!(err.to_string(), "Api request failed");
        let errors = err.appsync_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0]["message"],
            "Not Authorized to access getUser on type Query"
        );
    }

    #[test]
    fn test_falsy_results_are_kept() {
        let result = extract_result("countUsers", Some(json!({ "countUsers": 0 }))).unwrap();
        assert_eq!(result, Some(json!(0)));
    }

    #[test]
    fn test_typed_variables() {
        #[derive(Serialize)]
        struct GetUserQueryVariables {
            id: String,
        }

        let params = AppSyncQuery::with_variables(
            "getUser",
            &GetUserQueryVariables { id: "1".to_string() },
        )
        .unwrap();
        assert_eq!(params.variables, json!({ "id": "1" }));
    }
}
