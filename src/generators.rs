//! Core generation orchestration.
//! Combines hydration, template processing and module-file mutation into
//! the three generation flows: plain pages, module-registered artifacts
//! (components, directives, pipes, providers) and tabs page groups.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::fsio;
use crate::ngmodule::{append_declaration, insert_named_import_if_needed};
use crate::request::{hydrate, ArtifactKind, GeneratorRequest};
use crate::templates::{
    apply_templates, filter_out_templates, read_templates, write_generated_files,
};
use futures::future::join_all;
use globset::{Glob, GlobSetBuilder};
use log::debug;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// One entry of the generator listing: an artifact kind and whether it
/// accepts more than one name per invocation.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorOption {
    pub kind: ArtifactKind,
    pub multiple: bool,
}

/// Enumerates the artifact kinds sprout can generate.
/// Only tabs requests accept multiple names (one per tab page).
pub fn list_options() -> Vec<GeneratorOption> {
    ArtifactKind::ALL
        .into_iter()
        .map(|kind| GeneratorOption { kind, multiple: kind == ArtifactKind::Tabs })
        .collect()
}

/// Runs the full template pipeline for one request:
/// hydrate, read, filter, apply, write.
///
/// # Returns
/// The ordered list of files written to disk.
pub async fn generate_templates(
    config: &Config,
    request: &GeneratorRequest,
) -> Result<Vec<PathBuf>> {
    debug!("Hydrating the {} request for '{}'", request.kind, request.name);
    let hydrated = hydrate(config, request);
    debug!("Reading templates from '{}'", hydrated.dir_to_read.display());
    let templates = read_templates(&hydrated.dir_to_read).await?;
    debug!("Filtering out module and spec templates if needed");
    let templates = filter_out_templates(&hydrated, templates);
    debug!("Applying templates");
    let applied = apply_templates(&hydrated, &templates);
    debug!("Writing generated files to disk");
    write_generated_files(&hydrated, &applied).await
}

/// The non-page flow: registers the artifact in an existing
/// module-declaration file, then materializes the artifact's own templates.
///
/// The module file is read, given an import and a declaration entry for the
/// new class (both no-ops when already present) and written back *before*
/// any template output is materialized.
pub async fn non_page_file_manipulation(
    config: &Config,
    request: &GeneratorRequest,
    module_path: &Path,
) -> Result<Vec<PathBuf>> {
    let hydrated = hydrate(config, request);
    let module_dir = module_path.parent().unwrap_or_else(|| Path::new(""));
    let specifier = import_specifier(&relative_path(module_dir, &hydrated.dir_to_write));

    debug!(
        "Registering {} in '{}' (import from '{}')",
        hydrated.class_name,
        module_path.display(),
        specifier
    );
    let content = fsio::read_to_string(module_path).await?;
    let content = insert_named_import_if_needed(&content, &hydrated.class_name, &specifier);
    let content = append_declaration(&content, &hydrated.class_name);
    fsio::write(module_path, &content).await?;

    generate_templates(config, request).await
}

/// Generates a page.
pub async fn process_page_request(config: &Config, name: &str) -> Result<Vec<PathBuf>> {
    generate_templates(config, &GeneratorRequest::new(ArtifactKind::Page, name)).await
}

/// Generates a component and registers it in `module_path`.
pub async fn process_component_request(
    config: &Config,
    name: &str,
    module_path: &Path,
) -> Result<Vec<PathBuf>> {
    let request = GeneratorRequest::new(ArtifactKind::Component, name);
    non_page_file_manipulation(config, &request, module_path).await
}

/// Generates a directive and registers it in `module_path`.
pub async fn process_directive_request(
    config: &Config,
    name: &str,
    module_path: &Path,
) -> Result<Vec<PathBuf>> {
    let request = GeneratorRequest::new(ArtifactKind::Directive, name);
    non_page_file_manipulation(config, &request, module_path).await
}

/// Generates a pipe and registers it in `module_path`.
pub async fn process_pipe_request(
    config: &Config,
    name: &str,
    module_path: &Path,
) -> Result<Vec<PathBuf>> {
    let request = GeneratorRequest::new(ArtifactKind::Pipe, name);
    non_page_file_manipulation(config, &request, module_path).await
}

/// Generates a provider and registers it in `module_path`.
pub async fn process_provider_request(
    config: &Config,
    name: &str,
    module_path: &Path,
) -> Result<Vec<PathBuf>> {
    let request = GeneratorRequest::new(ArtifactKind::Provider, name);
    non_page_file_manipulation(config, &request, module_path).await
}

/// The tabs flow: materializes the tabs container, then one page per tab
/// name, all tab pages concurrently.
///
/// Every tab materialization runs to completion before the flow resolves;
/// when one fails, the first failure is surfaced and sibling output stays
/// on disk.
pub async fn process_tabs_request(
    config: &Config,
    request: &GeneratorRequest,
    tabs: &[String],
) -> Result<Vec<PathBuf>> {
    let mut created = generate_templates(config, request).await?;

    let page_requests: Vec<GeneratorRequest> = tabs
        .iter()
        .map(|tab| GeneratorRequest::new(ArtifactKind::Page, tab.as_str()))
        .collect();
    let results =
        join_all(page_requests.iter().map(|page| generate_templates(config, page))).await;
    for result in results {
        created.extend(result?);
    }

    // TODO: register the tabs container with its parent module once a
    // target module file for page groups is decided
    Ok(created)
}

/// Finds candidate module-declaration files for the given artifact kinds.
///
/// One glob per kind, `<base dir>/**/*<module suffix>`, walked from each
/// kind's destination base directory. Base directories that do not exist
/// yet are skipped; results are sorted and deduplicated.
pub fn find_module_files(config: &Config, kinds: &[ArtifactKind]) -> Result<Vec<PathBuf>> {
    let mut builder = GlobSetBuilder::new();
    for kind in kinds {
        let pattern = format!(
            "{}/**/*{}",
            config.dir_for_kind(*kind).display(),
            config.module_suffix
        );
        builder.add(
            Glob::new(&pattern)
                .map_err(|e| Error::Config(format!("invalid module file pattern: {}", e)))?,
        );
    }
    let matcher = builder
        .build()
        .map_err(|e| Error::Config(format!("invalid module file pattern: {}", e)))?;

    let mut found = Vec::new();
    for kind in kinds {
        let base = config.dir_for_kind(*kind);
        if !base.exists() {
            debug!("Skipping missing directory '{}'", base.display());
            continue;
        }
        for entry in WalkDir::new(base) {
            let entry = entry.map_err(|e| Error::FileSystem {
                path: base.to_path_buf(),
                source: e.into(),
            })?;
            if entry.file_type().is_file() && matcher.is_match(entry.path()) {
                found.push(entry.path().to_path_buf());
            }
        }
    }
    found.sort();
    found.dedup();
    Ok(found)
}

/// Computes the relative path from `base` to `target` by stripping the
/// common prefix and backing out of the remainder.
fn relative_path(base: &Path, target: &Path) -> PathBuf {
    let base_components: Vec<Component> = base.components().collect();
    let target_components: Vec<Component> = target.components().collect();

    let mut common = 0;
    while common < base_components.len()
        && common < target_components.len()
        && base_components[common] == target_components[common]
    {
        common += 1;
    }

    let mut result = PathBuf::new();
    for _ in common..base_components.len() {
        result.push("..");
    }
    for component in &target_components[common..] {
        result.push(component.as_os_str());
    }
    result
}

/// Renders a relative directory path as a module import specifier:
/// forward slashes, with a leading `./` for paths that would otherwise be
/// read as package names.
fn import_specifier(relative: &Path) -> String {
    let specifier = relative.to_string_lossy().replace('\\', "/");
    if specifier.is_empty() {
        ".".to_string()
    } else if specifier.starts_with('.') {
        specifier
    } else {
        format!("./{}", specifier)
    }
}
