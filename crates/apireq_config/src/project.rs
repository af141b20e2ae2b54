//! `.graphqlconfig.yml` model and project resolution.

use crate::error::{ConfigError, ConfigResult};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name Amplify uses for the project configuration.
pub const DEFAULT_CONFIG_FILE: &str = ".graphqlconfig.yml";

/// Root of the configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphqlConfig {
    /// Projects in declaration order.
    #[serde(default)]
    pub projects: IndexMap<String, ProjectConfig>,
}

/// One project entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub schema_path: Option<String>,
    #[serde(default)]
    pub extensions: Extensions,
}

/// Tool-specific extension blocks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extensions {
    pub amplify: Option<AmplifyExtension>,
    pub api_request: Option<ApiRequestExtension>,
}

/// Settings written by `amplify codegen`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmplifyExtension {
    pub code_gen_target: Option<String>,
    pub generated_file_name: Option<String>,
    pub docs_file_path: Option<String>,
}

/// Settings of this generator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequestExtension {
    pub generated_file_name: Option<String>,
    /// Extra scalar substitutions, e.g. `AWSPhone: string`.
    #[serde(default)]
    pub scalars: IndexMap<String, String>,
    /// Field name prefixes that identify models. Defaults to `get` only.
    #[serde(default)]
    pub model_prefixes: Vec<String>,
}

/// A project with every required setting present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProject {
    pub name: String,
    pub schema_path: String,
    pub api_file_path: String,
    pub docs_file_path: String,
    pub output_path: String,
    pub scalars: IndexMap<String, String>,
    pub model_prefixes: Vec<String>,
}

impl ResolvedProject {
    /// Location of the introspection schema below `root`.
    #[must_use]
    pub fn schema_file(&self, root: &Path) -> PathBuf {
        root.join(&self.schema_path)
    }

    /// Location of the generated module below `root`.
    #[must_use]
    pub fn output_file(&self, root: &Path) -> PathBuf {
        root.join(&self.output_path)
    }
}

impl GraphqlConfig {
    /// Loads the configuration file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Self::from_yaml_str(&source)
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(source: &str) -> ConfigResult<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    /// Resolves a project by name, or the first declared project.
    pub fn resolve(&self, name: Option<&str>) -> ConfigResult<ResolvedProject> {
        let (name, project) = match name {
            Some(name) => self
                .projects
                .get_key_value(name)
                .ok_or_else(|| ConfigError::UnknownProject {
                    name: name.to_string(),
                })?,
            None => self.projects.first().ok_or(ConfigError::NoProjects)?,
        };

        project.resolve(name)
    }
}

impl ProjectConfig {
    fn resolve(&self, name: &str) -> ConfigResult<ResolvedProject> {
        let amplify = self.extensions.amplify.as_ref();
        let api_request = self.extensions.api_request.as_ref();

        let docs_file_path = amplify
            .and_then(|a| a.docs_file_path.clone())
            .ok_or(ConfigError::MissingDocsFilePath)?;
        let output_path = api_request
            .and_then(|a| a.generated_file_name.clone())
            .ok_or(ConfigError::MissingApiRequest)?;
        let api_file_path = amplify
            .and_then(|a| a.generated_file_name.clone())
            .ok_or(ConfigError::MissingApiFilePath)?;
        let schema_path = self
            .schema_path
            .clone()
            .ok_or(ConfigError::MissingSchemaPath)?;

        if let Some(target) = amplify.and_then(|a| a.code_gen_target.as_deref()) {
            if target != "typescript" {
                tracing::warn!(
                    project = name,
                    codegen_target = target,
                    "amplify codegen target is not typescript"
                );
            }
        }

        Ok(ResolvedProject {
            name: name.to_string(),
            schema_path,
            api_file_path,
            docs_file_path,
            output_path,
            scalars: api_request.map(|a| a.scalars.clone()).unwrap_or_default(),
            model_prefixes: api_request
                .map(|a| a.model_prefixes.clone())
                .unwrap_or_default(),
        })
    }
}
