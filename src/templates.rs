//! Template reading, filtering, token substitution and materialization.
//! Templates live in one directory per artifact kind; a template file's
//! basename minus the `.tmpl` marker is the logical extension of the file it
//! generates (`component.ts.tmpl` produces `<stem>.component.ts`).

use crate::constants::{
    CLASSNAME_VARIABLE, FILENAME_VARIABLE, NG_MODULE_FILE_EXTENSION, SPEC_FILE_EXTENSION,
    SUPPLIEDNAME_VARIABLE, TEMPLATE_FILE_EXTENSION,
};
use crate::error::{Error, Result};
use crate::fsio;
use crate::request::HydratedRequest;
use futures::future::join_all;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Mapping from template source path to its (raw or processed) text.
/// Each pipeline stage produces a new map rather than mutating its input.
pub type TemplateMap = IndexMap<PathBuf, String>;

/// Returns the logical extension a template file generates.
/// The basename with the `.tmpl` marker removed: `html.tmpl` is `html`,
/// `module.ts.tmpl` is `module.ts`.
pub fn logical_extension(path: &Path) -> &str {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    name.strip_suffix(TEMPLATE_FILE_EXTENSION).unwrap_or(name)
}

/// Reads every template file directly inside `dir` into a [`TemplateMap`].
///
/// All file reads are issued concurrently; the call completes only once
/// every read has finished, then surfaces the first failure if any.
///
/// # Errors
/// * `Error::FileSystem` if the directory does not exist or a file cannot
///   be read; no partial map is returned
/// * `Error::TemplateNotFound` if the directory holds no files
pub async fn read_templates(dir: &Path) -> Result<TemplateMap> {
    let paths = fsio::read_dir_files(dir).await?;
    if paths.is_empty() {
        return Err(Error::TemplateNotFound { dir: dir.to_path_buf() });
    }

    let reads = paths.into_iter().map(|path| async move {
        let content = fsio::read_to_string(&path).await?;
        Ok((path, content))
    });
    join_all(reads).await.into_iter().collect()
}

/// Drops the templates the request opts out of.
///
/// The module-registration template is removed when `include_ng_module` is
/// false, the spec template when `include_spec` is false. Everything else
/// passes through unchanged.
pub fn filter_out_templates(request: &HydratedRequest, templates: TemplateMap) -> TemplateMap {
    templates
        .into_iter()
        .filter(|(path, _)| {
            let extension = logical_extension(path);
            let skip = (!request.include_ng_module && extension == NG_MODULE_FILE_EXTENSION)
                || (!request.include_spec && extension == SPEC_FILE_EXTENSION);
            !skip
        })
        .collect()
}

/// Substitutes the placeholder tokens in every template.
///
/// Three global literal replacements run in a fixed order: class name, file
/// stem, then the name exactly as supplied. Plain string substitution, no
/// pattern metacharacters.
pub fn apply_templates(request: &HydratedRequest, templates: &TemplateMap) -> TemplateMap {
    templates
        .iter()
        .map(|(path, content)| {
            let content = content
                .replace(CLASSNAME_VARIABLE, &request.class_name)
                .replace(FILENAME_VARIABLE, &request.file_name)
                .replace(SUPPLIEDNAME_VARIABLE, &request.name);
            (path.clone(), content)
        })
        .collect()
}

/// Writes every processed template under the request's destination
/// directory and returns the list of created paths.
///
/// The destination file name is `<file_name>.<logical extension>`; missing
/// parent directories are created. All writes are issued concurrently and
/// the call completes only once every write has finished. Already-written
/// files are not rolled back when a sibling write fails.
pub async fn write_generated_files(
    request: &HydratedRequest,
    templates: &TemplateMap,
) -> Result<Vec<PathBuf>> {
    let mut created = Vec::with_capacity(templates.len());
    let mut writes = Vec::with_capacity(templates.len());

    for (template_path, content) in templates {
        let file_name = format!("{}.{}", request.file_name, logical_extension(template_path));
        let destination = request.dir_to_write.join(file_name);
        created.push(destination.clone());
        writes.push(async move { fsio::write(&destination, content).await });
    }

    join_all(writes).await.into_iter().collect::<Result<Vec<()>>>()?;
    Ok(created)
}
