//! Type references and definitions of the client schema.

use crate::error::{SchemaError, SchemaResult};
use crate::introspection::{
    IntrospectionField, IntrospectionInputValue, IntrospectionKind, IntrospectionType,
    IntrospectionTypeRef,
};
use indexmap::IndexMap;
use std::fmt;

/// Fields of a type, in declaration order.
pub type FieldMap = IndexMap<String, FieldDef>;

/// A reference to a type, possibly wrapped in list or non-null modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Named type reference
    Named(String),
    /// `[T]`
    List(Box<TypeRef>),
    /// `T!`
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// Returns the type name when this reference is a bare named type.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::List(_) | Self::NonNull(_) => None,
        }
    }

    /// Returns the wrapped reference one modifier down.
    #[must_use]
    pub fn of_type(&self) -> Option<&TypeRef> {
        match self {
            Self::Named(_) => None,
            Self::List(inner) | Self::NonNull(inner) => Some(inner),
        }
    }

    /// Returns the named type under all modifiers.
    #[must_use]
    pub fn innermost(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.innermost(),
        }
    }

    /// The structural reference used to collect type imports.
    ///
    /// A bare named type yields its name. A wrapped type yields the rendering
    /// of the reference one modifier down, so `User!` imports `User` while
    /// `[User!]` imports `User!`.
    #[must_use]
    pub fn import_name(&self) -> String {
        self.name().map_or_else(
            || self.of_type().map(ToString::to_string).unwrap_or_default(),
            str::to_string,
        )
    }

    /// The rendered type string used in the return-type mapping.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

impl TryFrom<&IntrospectionTypeRef> for TypeRef {
    type Error = SchemaError;

    fn try_from(raw: &IntrospectionTypeRef) -> SchemaResult<Self> {
        match raw.kind {
            IntrospectionKind::List | IntrospectionKind::NonNull => {
                let inner = raw.of_type.as_deref().ok_or_else(|| {
                    SchemaError::malformed(format!("{:?} reference without ofType", raw.kind))
                })?;
                let inner = TypeRef::try_from(inner)?;
                Ok(if raw.kind == IntrospectionKind::List {
                    TypeRef::list(inner)
                } else {
                    TypeRef::non_null(inner)
                })
            }
            kind => raw
                .name
                .as_ref()
                .map(TypeRef::named)
                .ok_or_else(|| SchemaError::malformed(format!("{kind:?} reference without name"))),
        }
    }
}

/// Kind of a named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl TryFrom<IntrospectionKind> for TypeKind {
    type Error = SchemaError;

    fn try_from(kind: IntrospectionKind) -> SchemaResult<Self> {
        Ok(match kind {
            IntrospectionKind::Scalar => Self::Scalar,
            IntrospectionKind::Object => Self::Object,
            IntrospectionKind::Interface => Self::Interface,
            IntrospectionKind::Union => Self::Union,
            IntrospectionKind::Enum => Self::Enum,
            IntrospectionKind::InputObject => Self::InputObject,
            IntrospectionKind::List | IntrospectionKind::NonNull => {
                return Err(SchemaError::malformed(format!(
                    "{kind:?} is not a named type kind"
                )))
            }
        })
    }
}

/// An input value (argument or input field).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValue {
    pub name: String,
    pub ty: TypeRef,
    pub default_value: Option<String>,
}

impl TryFrom<&IntrospectionInputValue> for InputValue {
    type Error = SchemaError;

    fn try_from(raw: &IntrospectionInputValue) -> SchemaResult<Self> {
        Ok(Self {
            name: raw.name.clone(),
            ty: TypeRef::try_from(&raw.ty)?,
            default_value: raw.default_value.clone(),
        })
    }
}

/// A field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub args: Vec<InputValue>,
    pub ty: TypeRef,
}

impl FieldDef {
    /// Creates a field without arguments.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            ty,
        }
    }
}

impl TryFrom<&IntrospectionField> for FieldDef {
    type Error = SchemaError;

    fn try_from(raw: &IntrospectionField) -> SchemaResult<Self> {
        Ok(Self {
            name: raw.name.clone(),
            args: raw
                .args
                .iter()
                .map(InputValue::try_from)
                .collect::<SchemaResult<_>>()?,
            ty: TypeRef::try_from(&raw.ty)?,
        })
    }
}

/// A named type of the schema.
#[derive(Debug, Clone)]
pub struct NamedType {
    pub name: String,
    pub kind: TypeKind,
    /// Output fields, empty for non-object kinds.
    pub fields: FieldMap,
}

impl NamedType {
    /// Creates an object type from fields.
    pub fn object(name: impl Into<String>, fields: impl IntoIterator<Item = FieldDef>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Object,
            fields: fields.into_iter().map(|f| (f.name.clone(), f)).collect(),
        }
    }
}

impl TryFrom<IntrospectionType> for NamedType {
    type Error = SchemaError;

    fn try_from(raw: IntrospectionType) -> SchemaResult<Self> {
        let name = raw
            .name
            .ok_or_else(|| SchemaError::malformed("schema type without name"))?;
        let kind = TypeKind::try_from(raw.kind)?;

        let mut fields = FieldMap::new();
        for field in raw.fields.iter().flatten() {
            let field = FieldDef::try_from(field)?;
            fields.insert(field.name.clone(), field);
        }

        Ok(Self {
            name,
            kind,
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_list() -> TypeRef {
        TypeRef::list(TypeRef::non_null(TypeRef::named("User")))
    }

    #[test]
    fn test_display() {
        assert_eq!(TypeRef::named("User").to_string(), "User");
        assert_eq!(user_list().to_string(), "[User!]");
        insta::assert_snapshot!(TypeRef::non_null(user_list()), @"[User!]!");
    }

    #[test]
    fn test_import_name_strips_one_modifier() {
        assert_eq!(TypeRef::named("User").import_name(), "User");
        assert_eq!(TypeRef::non_null(TypeRef::named("User")).import_name(), "User");
        assert_eq!(user_list().import_name(), "User!");
        assert_eq!(TypeRef::non_null(user_list()).import_name(), "[User!]");
    }

    #[test]
    fn test_name_and_of_type() {
        assert_eq!(TypeRef::named("User").name(), Some("User"));
        assert_eq!(TypeRef::named("User").of_type(), None);
        assert_eq!(user_list().name(), None);
        assert_eq!(
            user_list().of_type(),
            Some(&TypeRef::non_null(TypeRef::named("User")))
        );
    }

    #[test]
    fn test_display_name_keeps_modifiers() {
        assert_eq!(TypeRef::named("Int").display_name(), "Int");
        assert_eq!(TypeRef::non_null(TypeRef::named("Int")).display_name(), "Int!");
    }

    #[test]
    fn test_innermost() {
        assert_eq!(TypeRef::non_null(user_list()).innermost(), "User");
        assert_eq!(TypeRef::named("ID").innermost(), "ID");
    }

    #[test]
    fn test_from_introspection_ref() {
        let raw: IntrospectionTypeRef = serde_json::from_value(serde_json::json!({
            "kind": "NON_NULL",
            "name": null,
            "ofType": { "kind": "SCALAR", "name": "ID", "ofType": null }
        }))
        .unwrap();

        let ty = TypeRef::try_from(&raw).unwrap();
        assert_eq!(ty, TypeRef::non_null(TypeRef::named("ID")));
    }

    #[test]
    fn test_list_without_of_type_is_malformed() {
        let raw: IntrospectionTypeRef = serde_json::from_value(serde_json::json!({
            "kind": "LIST",
            "name": null,
            "ofType": null
        }))
        .unwrap();

        let err = TypeRef::try_from(&raw).unwrap_err();
        assert!(matches!(err, SchemaError::MalformedTypeRef { .. }));
    }
}
