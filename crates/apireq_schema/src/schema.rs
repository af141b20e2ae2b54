//! The client schema built from an introspection response.

use crate::error::{SchemaError, SchemaResult};
use crate::introspection::{IntrospectionData, IntrospectionSchema};
use crate::types::{FieldMap, NamedType};
use indexmap::IndexMap;

/// Name of the root query type.
pub const QUERY_TYPE: &str = "Query";
/// Name of the root mutation type.
pub const MUTATION_TYPE: &str = "Mutation";

/// A schema reconstructed on the client side from introspection.
///
/// Types keep the order in which the introspection document lists them, and
/// every type keeps its fields in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ClientSchema {
    types: IndexMap<String, NamedType>,
}

impl ClientSchema {
    /// Parses a full introspection response (`{ "data": { "__schema": ... } }`).
    pub fn from_introspection_str(source: &str) -> SchemaResult<Self> {
        let value: serde_json::Value = serde_json::from_str(source)?;
        Self::from_introspection_value(value)
    }

    /// Builds a schema from an already parsed introspection response.
    pub fn from_introspection_value(mut value: serde_json::Value) -> SchemaResult<Self> {
        let data = value
            .get_mut("data")
            .filter(|data| !data.is_null())
            .map(serde_json::Value::take)
            .ok_or(SchemaError::MissingData)?;

        let data: IntrospectionData = serde_json::from_value(data)?;
        let schema = data.schema.ok_or(SchemaError::MissingSchema)?;
        Self::build(schema)
    }

    /// Builds a schema from the raw `__schema` payload.
    pub fn build(schema: IntrospectionSchema) -> SchemaResult<Self> {
        let mut types = IndexMap::with_capacity(schema.types.len());
        for raw in schema.types {
            let ty = NamedType::try_from(raw)?;
            types.insert(ty.name.clone(), ty);
        }

        let schema = Self { types };
        schema.validate_root_references()?;
        Ok(schema)
    }

    /// Creates a schema from already built types.
    pub fn from_types(types: impl IntoIterator<Item = NamedType>) -> Self {
        Self {
            types: types.into_iter().map(|t| (t.name.clone(), t)).collect(),
        }
    }

    /// Every type referenced by a root field or its arguments must exist.
    fn validate_root_references(&self) -> SchemaResult<()> {
        for root in [QUERY_TYPE, MUTATION_TYPE] {
            let Some(root) = self.types.get(root) else {
                continue;
            };

            for field in root.fields.values() {
                let referenced = std::iter::once(&field.ty).chain(field.args.iter().map(|a| &a.ty));
                for ty in referenced {
                    let name = ty.innermost();
                    if !self.types.contains_key(name) {
                        return Err(SchemaError::UnknownType {
                            name: name.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Gets a type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&NamedType> {
        self.types.get(name)
    }

    /// Returns the root query type.
    pub fn query_type(&self) -> SchemaResult<&NamedType> {
        self.root(QUERY_TYPE)
    }

    /// Returns the root mutation type.
    pub fn mutation_type(&self) -> SchemaResult<&NamedType> {
        self.root(MUTATION_TYPE)
    }

    fn root(&self, name: &str) -> SchemaResult<&NamedType> {
        self.get_type(name)
            .ok_or_else(|| SchemaError::MissingRootType {
                name: name.to_string(),
            })
    }

    /// Returns the query fields and the mutation fields.
    ///
    /// Fails on the query type first, then on the mutation type.
    pub fn root_fields(&self) -> SchemaResult<(&FieldMap, &FieldMap)> {
        let query = self.query_type()?;
        let mutation = self.mutation_type()?;
        Ok((&query.fields, &mutation.fields))
    }

    /// Returns the number of types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the schema has no types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
