//! Registry of operation documents.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// GraphQL document text by operation key.
///
/// Mirrors the `queries` and `mutations` modules generated by Amplify; a key
/// is looked up in the queries first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDocuments {
    #[serde(default)]
    queries: IndexMap<String, String>,
    #[serde(default)]
    mutations: IndexMap<String, String>,
}

impl OperationDocuments {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a query document.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, document: impl Into<String>) -> Self {
        self.insert_query(key, document);
        self
    }

    /// Adds a mutation document.
    #[must_use]
    pub fn with_mutation(mut self, key: impl Into<String>, document: impl Into<String>) -> Self {
        self.insert_mutation(key, document);
        self
    }

    /// Inserts or replaces a query document.
    pub fn insert_query(&mut self, key: impl Into<String>, document: impl Into<String>) {
        self.queries.insert(key.into(), document.into());
    }

    /// Inserts or replaces a mutation document.
    pub fn insert_mutation(&mut self, key: impl Into<String>, document: impl Into<String>) {
        self.mutations.insert(key.into(), document.into());
    }

    /// Gets the document for an operation key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.queries
            .get(key)
            .or_else(|| self.mutations.get(key))
            .map(String::as_str)
    }

    /// Returns the number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queries.len() + self.mutations.len()
    }

    /// Returns true if no documents are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty() && self.mutations.is_empty()
    }
}
