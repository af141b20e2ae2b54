//! The generate pipeline: configuration, schema, projection, output.
//!
//! Output is only written once the whole module has been generated, and is
//! staged in a temporary file next to the target before replacing it, so a
//! failing run leaves the previous file untouched.

use crate::error::{CliError, CliResult};
use apireq_codegen::{ImportPaths, Projector, ProjectorOptions, ScalarTable};
use apireq_config::{GraphqlConfig, ResolvedProject};
use apireq_schema::ClientSchema;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Loads the configuration below `root` and resolves a project.
pub fn load_project(root: &Path, config_file: &Path, name: Option<&str>) -> CliResult<ResolvedProject> {
    let config = GraphqlConfig::load(&root.join(config_file))?;
    let project = config.resolve(name)?;
    tracing::debug!(project = %project.name, "resolved project");
    Ok(project)
}

/// Builds a projector from the project's settings.
pub fn projector_for(project: &ResolvedProject) -> CliResult<Projector> {
    let mut scalars = ScalarTable::amplify();
    scalars.extend(
        project
            .scalars
            .iter()
            .map(|(name, ts_type)| (name.as_str(), ts_type.as_str())),
    );

    let mut options = ProjectorOptions::new()
        .with_scalars(scalars)
        .with_import_paths(ImportPaths::from_config_paths(
            &project.api_file_path,
            &project.docs_file_path,
        ));
    if !project.model_prefixes.is_empty() {
        options = options.with_model_prefixes(&project.model_prefixes)?;
    }

    Ok(Projector::new(options))
}

/// Reads and builds the project's introspection schema.
pub fn load_schema(root: &Path, project: &ResolvedProject) -> CliResult<ClientSchema> {
    let path = project.schema_file(root);
    let source = fs::read_to_string(&path).map_err(|source| CliError::ReadSchema {
        path: path.clone(),
        source,
    })?;
    Ok(ClientSchema::from_introspection_str(&source)?)
}

/// Generates the request module for a project.
pub fn generate_module(root: &Path, project: &ResolvedProject) -> CliResult<String> {
    let schema = load_schema(root, project)?;
    let module = projector_for(project)?.project(&schema)?;
    Ok(module)
}

/// Replaces the output file with the generated module.
pub fn write_module(path: &Path, contents: &str) -> CliResult<()> {
    let write_err = |source| CliError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_err)?;

    let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
    staged.write_all(contents.as_bytes()).map_err(write_err)?;
    staged.persist(path).map_err(|e| write_err(e.error))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote module");
    Ok(())
}

/// Returns true if the file on disk already holds `contents`.
#[must_use]
pub fn is_up_to_date(path: &Path, contents: &str) -> bool {
    fs::read_to_string(path).is_ok_and(|existing| existing == contents)
}
