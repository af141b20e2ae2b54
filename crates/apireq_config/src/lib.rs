//! Project configuration for the AppSync request generator.
//!
//! Configuration lives in the `.graphqlconfig.yml` file that Amplify
//! maintains. The generator reads the Amplify codegen extension to locate the
//! generated API module and the operation documents, and its own
//! `apiRequest` extension to locate the output file.
//!
//! ```yaml
//! projects:
//!   myapp:
//!     schemaPath: src/graphql/schema.json
//!     extensions:
//!       amplify:
//!         generatedFileName: src/API.ts
//!         docsFilePath: src/graphql
//!       apiRequest:
//!         generatedFileName: src/api-request.ts
//! ```

pub mod error;
pub mod project;

pub use error::{ConfigError, ConfigResult};
pub use project::{
    AmplifyExtension, ApiRequestExtension, Extensions, GraphqlConfig, ProjectConfig,
    ResolvedProject, DEFAULT_CONFIG_FILE,
};
