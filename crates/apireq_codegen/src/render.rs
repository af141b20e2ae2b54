//! Renderers for the generated sections.
//!
//! Each renderer is a pure function of the classification tables.

use crate::classify::Classification;
use crate::scalars::ScalarTable;

/// Non-scalar type imports, one per line.
#[must_use]
pub fn render_type_imports(classification: &Classification, scalars: &ScalarTable) -> String {
    classification
        .type_imports
        .iter()
        .filter(|name| !scalars.contains(name))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Union of model names whose type is imported.
#[must_use]
pub fn render_models(classification: &Classification) -> String {
    classification
        .models
        .keys()
        .filter(|model| classification.is_imported(model))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" | \n")
}

/// Discriminated union of callable operations.
#[must_use]
pub fn render_operations(classification: &Classification) -> String {
    classification
        .operations
        .iter()
        .map(|(key, op)| format!("| {{\nkey: '{key}',\nvariables: {}\n}}", op.variables))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Operation name to return type, with scalars substituted.
#[must_use]
pub fn render_returns(classification: &Classification, scalars: &ScalarTable) -> String {
    classification
        .returns
        .iter()
        .map(|(key, ty)| format!("{key}: {}", scalars.substitute(ty).unwrap_or(ty)))
        .collect::<Vec<_>>()
        .join(",\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, CrudKind};
    use apireq_schema::{FieldDef, FieldMap, TypeRef};

    fn classification() -> Classification {
        let queries: FieldMap = [
            FieldDef::new("getUser", TypeRef::named("User")),
            FieldDef::new("getPost", TypeRef::named("Post")),
            FieldDef::new("countUsers", TypeRef::named("Int")),
        ]
        .into_iter()
        .map(|f| (f.name.clone(), f))
        .collect();
        let mutations: FieldMap = [FieldDef::new("removeAll", TypeRef::non_null(TypeRef::named("Boolean")))]
            .into_iter()
            .map(|f| (f.name.clone(), f))
            .collect();

        classify(&queries, &mutations, &[CrudKind::Get])
    }

    #[test]
    fn test_type_imports_skip_scalars() {
        let out = render_type_imports(&classification(), &ScalarTable::amplify());
        assert_eq!(
            out,
            "GetUserQueryVariables,\nUser,\nGetPostQueryVariables,\nPost,\nCountUsersQueryVariables,\nRemoveAllMutationVariables"
        );
    }

    #[test]
    fn test_models() {
        assert_eq!(render_models(&classification()), "User | \nPost");
    }

    #[test]
    fn test_single_model() {
        let queries: FieldMap = [FieldDef::new("getUser", TypeRef::named("User"))]
            .into_iter()
            .map(|f| (f.name.clone(), f))
            .collect();
        let c = classify(&queries, &FieldMap::new(), &[CrudKind::Get]);
        insta::assert_snapshot!(render_models(&c), @"User");
    }

    #[test]
    fn test_models_require_import() {
        let mut c = classification();
        c.models.insert("Orphan".to_string(), [CrudKind::Get].into());
        assert!(!render_models(&c).contains("Orphan"));
    }

    #[test]
    fn test_operations() {
        let out = render_operations(&classification());
        assert!(out.starts_with("| {\nkey: 'getUser',\nvariables: GetUserQueryVariables\n}\n| {"));
        assert!(out.ends_with("| {\nkey: 'removeAll',\nvariables: RemoveAllMutationVariables\n}"));
    }

    #[test]
    fn test_returns_substitute_bare_scalars() {
        let out = render_returns(&classification(), &ScalarTable::amplify());
        assert_eq!(
            out,
            "getUser: User,\ngetPost: Post,\ncountUsers: number,\nremoveAll: Boolean!"
        );
    }

    #[test]
    fn test_empty_sections() {
        let empty = Classification::default();
        let scalars = ScalarTable::amplify();
        assert_eq!(render_type_imports(&empty, &scalars), "");
        assert_eq!(render_models(&empty), "");
        assert_eq!(render_operations(&empty), "");
        assert_eq!(render_returns(&empty, &scalars), "");
    }
}
