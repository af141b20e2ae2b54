//! GraphQL introspection model for the AppSync request generator.
//!
//! This crate turns a standard introspection response into a small client
//! schema that the projector can walk:
//! - `introspection`: Raw serde model of the introspection JSON
//! - `types`: Type references and field/type definitions
//! - `schema`: The client schema and root type lookup
//! - `error`: Schema loading errors
//!
//! # Example
//!
//! ```ignore
//! use apireq_schema::ClientSchema;
//!
//! let schema = ClientSchema::from_introspection_str(&source)?;
//! let (queries, mutations) = schema.root_fields()?;
//! ```

pub mod error;
pub mod introspection;
pub mod schema;
pub mod types;

pub use error::{SchemaError, SchemaResult};
pub use schema::{ClientSchema, MUTATION_TYPE, QUERY_TYPE};
pub use types::{FieldDef, FieldMap, InputValue, NamedType, TypeKind, TypeRef};
