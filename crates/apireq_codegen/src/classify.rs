//! Classification pass over the root operation fields.
//!
//! One forward walk over the merged query and mutation fields fills every
//! table the renderers read. Nothing is mutated after the walk.

use crate::error::{CodegenError, CodegenResult};
use apireq_schema::{FieldDef, FieldMap, InputValue};
use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// CRUD operation recognised from a field name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CrudKind {
    Get,
    List,
    Create,
    Update,
    Delete,
}

impl CrudKind {
    pub const ALL: [CrudKind; 5] = [
        CrudKind::Get,
        CrudKind::List,
        CrudKind::Create,
        CrudKind::Update,
        CrudKind::Delete,
    ];

    /// Returns the literal field name prefix.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Strips this prefix from a field name, yielding the model name.
    #[must_use]
    pub fn strip<'a>(self, field_name: &'a str) -> Option<&'a str> {
        field_name.strip_prefix(self.prefix())
    }
}

impl fmt::Display for CrudKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for CrudKind {
    type Err = CodegenError;

    fn from_str(s: &str) -> CodegenResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.prefix() == s)
            .ok_or_else(|| CodegenError::UnknownModelPrefix {
                prefix: s.to_string(),
            })
    }
}

/// Root type an operation field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    /// Suffix of the generated variables type, e.g. `GetUserQueryVariables`.
    #[must_use]
    pub const fn variables_suffix(self) -> &'static str {
        match self {
            Self::Query => "QueryVariables",
            Self::Mutation => "MutationVariables",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str("query"),
            Self::Mutation => f.write_str("mutation"),
        }
    }
}

/// Everything the projector derives from one root field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    /// `None` only for fields found in neither root map.
    pub kind: Option<OperationKind>,
    pub args: Vec<InputValue>,
    /// Raw structural reference, used for type imports.
    pub import_type: String,
    /// Fully rendered type, used for the return mapping.
    pub return_type: String,
    /// Generated variables type name.
    pub variables: Option<String>,
}

/// One member of the operation union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationEntry {
    pub key: String,
    pub variables: String,
}

/// Tables filled by the classification pass.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Descriptors in merged field order.
    pub fields: Vec<FieldDescriptor>,
    /// Model name to the CRUD operations detected for it.
    pub models: IndexMap<String, BTreeSet<CrudKind>>,
    /// Every variables type and return type reference.
    pub type_imports: IndexSet<String>,
    /// Operation name to its union member.
    pub operations: IndexMap<String, OperationEntry>,
    /// Operation name to its rendered return type.
    pub returns: IndexMap<String, String>,
}

impl Classification {
    /// Returns true if a model's type is imported.
    #[must_use]
    pub fn is_imported(&self, name: &str) -> bool {
        self.type_imports.contains(name)
    }
}

/// Uppercases the first character, leaving the rest untouched.
#[must_use]
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Derives the variables type name from root membership, mutations first.
#[must_use]
pub fn variables_type_name(
    name: &str,
    queries: &FieldMap,
    mutations: &FieldMap,
) -> Option<(OperationKind, String)> {
    let kind = if mutations.contains_key(name) {
        OperationKind::Mutation
    } else if queries.contains_key(name) {
        OperationKind::Query
    } else {
        return None;
    };

    Some((kind, format!("{}{}", upper_first(name), kind.variables_suffix())))
}

/// Matches a field name against the recognised prefixes.
#[must_use]
pub fn parse_model<'a>(prefixes: &[CrudKind], field_name: &'a str) -> Option<(CrudKind, &'a str)> {
    prefixes
        .iter()
        .find_map(|&kind| kind.strip(field_name).map(|model| (kind, model)))
}

/// Runs the classification pass.
///
/// Query fields are merged first and mutation fields after; a name present
/// in both keeps its query position but uses the mutation definition.
#[must_use]
pub fn classify(queries: &FieldMap, mutations: &FieldMap, prefixes: &[CrudKind]) -> Classification {
    let mut merged: IndexMap<&str, &FieldDef> = IndexMap::with_capacity(queries.len() + mutations.len());
    merged.extend(queries.iter().map(|(name, field)| (name.as_str(), field)));
    merged.extend(mutations.iter().map(|(name, field)| (name.as_str(), field)));

    let mut out = Classification::default();

    for (name, field) in merged {
        if let Some((kind, model)) = parse_model(prefixes, name) {
            out.models.entry(model.to_string()).or_default().insert(kind);
        }

        let import_type = field.ty.import_name();
        let return_type = field.ty.display_name();
        out.returns.insert(name.to_string(), return_type.clone());

        let resolved = variables_type_name(name, queries, mutations);

        if let Some((_, variables)) = &resolved {
            out.operations.insert(
                name.to_string(),
                OperationEntry {
                    key: name.to_string(),
                    variables: variables.clone(),
                },
            );
            out.type_imports.insert(variables.clone());
        }
        out.type_imports.insert(import_type.clone());

        tracing::debug!(
            field = name,
            import = %import_type,
            returns = %return_type,
            variables = ?resolved.as_ref().map(|(_, v)| v),
            "classified field"
        );

        out.fields.push(FieldDescriptor {
            name: name.to_string(),
            kind: resolved.as_ref().map(|(kind, _)| *kind),
            args: field.args.clone(),
            import_type,
            return_type,
            variables: resolved.map(|(_, v)| v),
        });
    }

    out
}
