//! Assembly of the generated request module.

use crate::classify::Classification;
use crate::render::{render_models, render_operations, render_returns, render_type_imports};
use crate::scalars::ScalarTable;

/// Runtime helper appended verbatim to every generated module.
pub const REQUEST_TEMPLATE: &str = include_str!("../template/request.ts");

/// Module paths the generated imports point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPaths {
    /// Import path of the generated API types module.
    pub api_import: String,
    /// Import path of the directory holding `queries` and `mutations`.
    pub docs_import: String,
}

impl Default for ImportPaths {
    fn default() -> Self {
        Self::from_config_paths("src/API.ts", "src/graphql")
    }
}

impl ImportPaths {
    /// Derives import paths from the configured file paths.
    ///
    /// A leading `src/` is stripped from both, and a trailing `.ts` from the
    /// API module path.
    #[must_use]
    pub fn from_config_paths(api_file_path: &str, docs_file_path: &str) -> Self {
        let api = strip_src(api_file_path);
        Self {
            api_import: api.strip_suffix(".ts").unwrap_or(api).to_string(),
            docs_import: strip_src(docs_file_path).to_string(),
        }
    }
}

fn strip_src(path: &str) -> &str {
    path.strip_prefix("src/").unwrap_or(path)
}

/// Concatenates the generated sections and the runtime template.
#[must_use]
pub fn assemble(classification: &Classification, scalars: &ScalarTable, paths: &ImportPaths) -> String {
    format!(
        "import {{\n{imports}\n}} from '{api}';\n\
         import * as queries from '{docs}/queries';\n\
         import * as mutations from '{docs}/mutations';\n\
         \n\
         export type TModelRecord = {models}\n\
         \n\
         export type TAppSyncQuery = \n\
         {operations}\n\
         \n\
         export type TAppSyncReturn = {{\n\
         {returns}\n\
         }}\n\
         \n\
         {template}",
        imports = render_type_imports(classification, scalars),
        api = paths.api_import,
        docs = paths.docs_import,
        models = render_models(classification),
        operations = render_operations(classification),
        returns = render_returns(classification, scalars),
        template = REQUEST_TEMPLATE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_paths() {
        let paths = ImportPaths::from_config_paths("src/API.ts", "src/graphql");
        assert_eq!(paths.api_import, "API");
        assert_eq!(paths.docs_import, "graphql");
    }

    #[test]
    fn test_import_paths_without_prefix() {
        let paths = ImportPaths::from_config_paths("lib/schema.ts", "lib/docs");
        assert_eq!(paths.api_import, "lib/schema");
        assert_eq!(paths.docs_import, "lib/docs");

        let paths = ImportPaths::from_config_paths("src/schema.d.ts", "src/src/graphql");
        assert_eq!(paths.api_import, "schema.d");
        assert_eq!(paths.docs_import, "src/graphql");
    }

    #[test]
    fn test_empty_document() {
        let doc = assemble(
            &Classification::default(),
            &ScalarTable::amplify(),
            &ImportPaths::default(),
        );

        let expected_head = "import {\n\n} from 'API';\n\
            import * as queries from 'graphql/queries';\n\
            import * as mutations from 'graphql/mutations';\n\n\
            export type TModelRecord = \n\n\
            export type TAppSyncQuery = \n\n\n\
            export type TAppSyncReturn = {\n\n}\n\n";
        assert!(doc.starts_with(expected_head));
        assert!(doc.ends_with(REQUEST_TEMPLATE));
        assert_eq!(doc.len(), expected_head.len() + REQUEST_TEMPLATE.len());
    }

    #[test]
    fn test_template_is_verbatim() {
        assert!(REQUEST_TEMPLATE.contains("export function setHandler("));
        assert!(REQUEST_TEMPLATE.contains("throw new Error(\"Request handler is not set\");"));
    }
}
