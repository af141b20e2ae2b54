//! Projects a GraphQL client schema into a typed AppSync request module.
//!
//! The generated TypeScript module contains:
//! - the non-scalar types to import from the generated API module
//! - `TModelRecord`, the union of model names detected from `get` fields
//! - `TAppSyncQuery`, a discriminated union of every query and mutation
//! - `TAppSyncReturn`, the return type of each operation
//! - the `apiRequest` runtime helper, appended verbatim
//!
//! # Example
//!
//! ```ignore
//! use apireq_codegen::{Projector, ProjectorOptions};
//!
//! let projector = Projector::new(ProjectorOptions::default());
//! let module = projector.project(&schema)?;
//! ```

pub mod classify;
pub mod document;
pub mod error;
pub mod render;
pub mod scalars;

pub use classify::{
    classify, Classification, CrudKind, FieldDescriptor, OperationEntry, OperationKind,
};
pub use document::{assemble, ImportPaths, REQUEST_TEMPLATE};
pub use error::{CodegenError, CodegenResult};
pub use scalars::{ScalarTable, AMPLIFY_SCALARS};

use apireq_schema::ClientSchema;

/// Projection options.
#[derive(Debug, Clone)]
pub struct ProjectorOptions {
    /// Scalar substitution table.
    pub scalars: ScalarTable,
    /// Field name prefixes that identify a model.
    pub crud_prefixes: Vec<CrudKind>,
    /// Paths used by the generated import statements.
    pub import_paths: ImportPaths,
}

impl Default for ProjectorOptions {
    fn default() -> Self {
        Self {
            scalars: ScalarTable::amplify(),
            crud_prefixes: vec![CrudKind::Get],
            import_paths: ImportPaths::default(),
        }
    }
}

impl ProjectorOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scalar table.
    #[must_use]
    pub fn with_scalars(mut self, scalars: ScalarTable) -> Self {
        self.scalars = scalars;
        self
    }

    /// Sets the import paths.
    #[must_use]
    pub fn with_import_paths(mut self, paths: ImportPaths) -> Self {
        self.import_paths = paths;
        self
    }

    /// Sets the recognised model prefixes.
    #[must_use]
    pub fn with_crud_prefixes(mut self, prefixes: impl IntoIterator<Item = CrudKind>) -> Self {
        self.crud_prefixes = prefixes.into_iter().collect();
        self
    }

    /// Sets the recognised model prefixes from their literal names.
    pub fn with_model_prefixes<S: AsRef<str>>(self, prefixes: &[S]) -> CodegenResult<Self> {
        let kinds = prefixes
            .iter()
            .map(|p| p.as_ref().parse())
            .collect::<CodegenResult<Vec<CrudKind>>>()?;
        Ok(self.with_crud_prefixes(kinds))
    }
}

/// Main projector.
#[derive(Debug, Clone, Default)]
pub struct Projector {
    options: ProjectorOptions,
}

impl Projector {
    /// Creates a new projector.
    pub fn new(options: ProjectorOptions) -> Self {
        Self { options }
    }

    /// Returns the projection options.
    pub fn options(&self) -> &ProjectorOptions {
        &self.options
    }

    /// Runs the classification pass over the schema's root fields.
    pub fn classify(&self, schema: &ClientSchema) -> CodegenResult<Classification> {
        let (queries, mutations) = schema.root_fields()?;
        let classification = classify(queries, mutations, &self.options.crud_prefixes);

        tracing::info!(
            queries = queries.len(),
            mutations = mutations.len(),
            models = classification.models.len(),
            imports = classification.type_imports.len(),
            "classified schema"
        );

        Ok(classification)
    }

    /// Generates the complete request module.
    pub fn project(&self, schema: &ClientSchema) -> CodegenResult<String> {
        let classification = self.classify(schema)?;
        Ok(assemble(
            &classification,
            &self.options.scalars,
            &self.options.import_paths,
        ))
    }
}
