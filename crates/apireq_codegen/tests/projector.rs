//! End-to-end projection tests from introspection JSON.

use apireq_codegen::{ImportPaths, Projector, ProjectorOptions, ScalarTable, REQUEST_TEMPLATE};
use apireq_schema::{ClientSchema, SchemaError};
use serde_json::{json, Value};

fn named(kind: &str, name: &str) -> Value {
    json!({ "kind": kind, "name": name, "ofType": null })
}

fn non_null(inner: Value) -> Value {
    json!({ "kind": "NON_NULL", "name": null, "ofType": inner })
}

fn field(name: &str, args: Vec<(&str, Value)>, ty: Value) -> Value {
    let args: Vec<Value> = args
        .into_iter()
        .map(|(name, ty)| json!({ "name": name, "type": ty, "defaultValue": null }))
        .collect();
    json!({ "name": name, "args": args, "type": ty, "isDeprecated": false })
}

fn introspection(query_fields: Vec<Value>, mutation_fields: Vec<Value>) -> Value {
    json!({
        "data": {
            "__schema": {
                "queryType": { "name": "Query" },
                "mutationType": { "name": "Mutation" },
                "types": [
                    { "kind": "OBJECT", "name": "Query", "fields": query_fields },
                    { "kind": "OBJECT", "name": "Mutation", "fields": mutation_fields },
                    { "kind": "OBJECT", "name": "User", "fields": [] },
                    { "kind": "INPUT_OBJECT", "name": "UpdateUserInput", "fields": null, "inputFields": [] },
                    { "kind": "SCALAR", "name": "ID" },
                    { "kind": "SCALAR", "name": "Int" },
                    { "kind": "SCALAR", "name": "String" }
                ]
            }
        }
    })
}

fn user_schema() -> ClientSchema {
    let value = introspection(
        vec![field(
            "getUser",
            vec![("id", non_null(named("SCALAR", "ID")))],
            named("OBJECT", "User"),
        )],
        vec![field(
            "updateUser",
            vec![("input", non_null(named("INPUT_OBJECT", "UpdateUserInput")))],
            named("OBJECT", "User"),
        )],
    );
    ClientSchema::from_introspection_value(value).unwrap()
}

#[test]
fn test_user_schema_document() {
    let module = Projector::default().project(&user_schema()).unwrap();

    let expected = format!(
        "import {{
GetUserQueryVariables,
User,
UpdateUserMutationVariables
}} from 'API';
import * as queries from 'graphql/queries';
import * as mutations from 'graphql/mutations';

export type TModelRecord = User

export type TAppSyncQuery =\x20
| {{
key: 'getUser',
variables: GetUserQueryVariables
}}
| {{
key: 'updateUser',
variables: UpdateUserMutationVariables
}}

export type TAppSyncReturn = {{
getUser: User,
updateUser: User
}}

{REQUEST_TEMPLATE}"
    );

    assert_eq!(module, expected);
}

#[test]
fn test_projection_is_deterministic() {
    let projector = Projector::default();
    let first = projector.project(&user_schema()).unwrap();
    let second = projector.project(&user_schema()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_roots_still_assemble() {
    let schema = ClientSchema::from_introspection_value(introspection(vec![], vec![])).unwrap();
    let module = Projector::default().project(&schema).unwrap();

    assert!(module.contains("export type TModelRecord = \n"));
    assert!(module.contains("export type TAppSyncReturn = {\n\n}"));
    assert!(module.ends_with(REQUEST_TEMPLATE));
}

#[test]
fn test_model_requires_imported_type() {
    // `getUserCount` yields model `UserCount`, which nothing imports.
    let value = introspection(
        vec![
            field("getUserCount", vec![], named("SCALAR", "Int")),
            field("getUser", vec![], named("OBJECT", "User")),
        ],
        vec![],
    );
    let schema = ClientSchema::from_introspection_value(value).unwrap();
    let module = Projector::default().project(&schema).unwrap();

    assert!(module.contains("export type TModelRecord = User\n"));
    assert!(module.contains("getUserCount: number"));
    assert!(!module.contains("\nInt,"));
}

#[test]
fn test_custom_options() {
    let options = ProjectorOptions::new()
        .with_scalars(ScalarTable::amplify().with_scalar("User", "unknown"))
        .with_import_paths(ImportPaths::from_config_paths("src/models/API.ts", "src/docs"));
    let module = Projector::new(options).project(&user_schema()).unwrap();

    assert!(module.contains("} from 'models/API';"));
    assert!(module.contains("import * as queries from 'docs/queries';"));
    assert!(module.contains("getUser: unknown,"));
    assert!(module.contains("export type TModelRecord = User\n"));
}

#[test]
fn test_missing_mutation_type() {
    let mut value = introspection(vec![], vec![]);
    let types = value["data"]["__schema"]["types"].as_array_mut().unwrap();
    types.retain(|t| t["name"] != "Mutation");

    let schema = ClientSchema::from_introspection_value(value).unwrap();
    let err = Projector::default().project(&schema).unwrap_err();
    assert!(matches!(
        err,
        apireq_codegen::CodegenError::Schema(SchemaError::MissingRootType { .. })
    ));
}

#[test]
fn test_mutation_definition_wins_on_shared_name() {
    let value = introspection(
        vec![field("sync", vec![], named("SCALAR", "String"))],
        vec![field(
            "sync",
            vec![("input", non_null(named("INPUT_OBJECT", "UpdateUserInput")))],
            non_null(named("OBJECT", "User")),
        )],
    );
    let schema = ClientSchema::from_introspection_value(value).unwrap();
    let module = Projector::default().project(&schema).unwrap();

    let expected = format!(
        "import {{
SyncMutationVariables,
User
}} from 'API';
import * as queries from 'graphql/queries';
import * as mutations from 'graphql/mutations';

export type TModelRecord =\x20

export type TAppSyncQuery =\x20
| {{
key: 'sync',
variables: SyncMutationVariables
}}

export type TAppSyncReturn = {{
sync: User!
}}

{REQUEST_TEMPLATE}"
    );

    assert_eq!(module, expected);
    assert!(!module.contains("SyncQueryVariables"));
}

#[test]
fn test_wrapped_return_types() {
    let user_list = json!({
        "kind": "LIST",
        "name": null,
        "ofType": non_null(named("OBJECT", "User"))
    });
    let value = introspection(
        vec![
            field("listUsers", vec![], non_null(user_list.clone())),
            field("searchUsers", vec![], user_list),
        ],
        vec![],
    );
    let schema = ClientSchema::from_introspection_value(value).unwrap();
    let module = Projector::default().project(&schema).unwrap();

    assert!(module.starts_with(
        "import {\nListUsersQueryVariables,\n[User!],\nSearchUsersQueryVariables,\nUser!\n} from 'API';\n"
    ));
    assert!(module.contains("export type TAppSyncReturn = {\nlistUsers: [User!]!,\nsearchUsers: [User!]\n}"));
}
