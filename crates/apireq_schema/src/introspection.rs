//! Raw serde model of a GraphQL introspection response.
//!
//! Only the members the projector reads are modelled. Everything else
//! (root type names, descriptions, input fields, directives) is ignored.

use serde::Deserialize;

/// The `data` member of an introspection response.
#[derive(Debug, Clone, Deserialize)]
pub struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: Option<IntrospectionSchema>,
}

/// The `__schema` payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    #[serde(default)]
    pub types: Vec<IntrospectionType>,
}

/// Kind tag shared by full types and type references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntrospectionKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

/// A full type entry of `__schema.types`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionType {
    pub kind: IntrospectionKind,
    pub name: Option<String>,
    #[serde(default)]
    pub fields: Option<Vec<IntrospectionField>>,
}

/// A field of an object or interface type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionField {
    pub name: String,
    #[serde(default)]
    pub args: Vec<IntrospectionInputValue>,
    #[serde(rename = "type")]
    pub ty: IntrospectionTypeRef,
}

/// An argument or input object field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInputValue {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: IntrospectionTypeRef,
    #[serde(default)]
    pub default_value: Option<String>,
}

/// A possibly wrapped reference to a named type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionTypeRef {
    pub kind: IntrospectionKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<IntrospectionTypeRef>>,
}
