//! Configuration handling for sprout projects.
//! This module provides the build configuration consumed by every generator
//! flow: destination directories per artifact kind, the template root and
//! the module-file suffix used for module discovery.

use crate::error::{Error, Result};
use crate::request::ArtifactKind;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["sprout.json", "sprout.yml", "sprout.yaml"];

/// Environment variable overriding the template root directory
pub const ENV_TEMPLATE_DIR: &str = "SPROUT_TEMPLATE_DIR";

/// Environment variable overriding the module-file suffix
pub const ENV_MODULE_SUFFIX: &str = "SPROUT_MODULE_SUFFIX";

/// Project configuration for the generator flows.
///
/// All directory fields are resolved to absolute paths by [`get_config`];
/// the defaults mirror a conventional application layout under `src/`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Destination base directory for components
    pub components_dir: PathBuf,
    /// Destination base directory for directives
    pub directives_dir: PathBuf,
    /// Destination base directory for pages (and tabs containers)
    pub pages_dir: PathBuf,
    /// Destination base directory for pipes
    pub pipes_dir: PathBuf,
    /// Destination base directory for providers
    pub providers_dir: PathBuf,
    /// Root directory holding one template directory per artifact kind
    pub template_dir: PathBuf,
    /// Filename suffix identifying module-declaration files
    pub module_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            components_dir: PathBuf::from("src/components"),
            directives_dir: PathBuf::from("src/directives"),
            pages_dir: PathBuf::from("src/pages"),
            pipes_dir: PathBuf::from("src/pipes"),
            providers_dir: PathBuf::from("src/providers"),
            template_dir: PathBuf::from("templates"),
            module_suffix: String::from(".module.ts"),
        }
    }
}

impl Config {
    /// Returns the destination base directory for the given artifact kind.
    ///
    /// The mapping is total over [`ArtifactKind`]: tabs containers are
    /// materialized under the pages directory.
    pub fn dir_for_kind(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::Component => &self.components_dir,
            ArtifactKind::Directive => &self.directives_dir,
            ArtifactKind::Page | ArtifactKind::Tabs => &self.pages_dir,
            ArtifactKind::Pipe => &self.pipes_dir,
            ArtifactKind::Provider => &self.providers_dir,
        }
    }

    fn resolve_against(&mut self, project_root: &Path) {
        for dir in [
            &mut self.components_dir,
            &mut self.directives_dir,
            &mut self.pages_dir,
            &mut self.pipes_dir,
            &mut self.providers_dir,
            &mut self.template_dir,
        ] {
            if dir.is_relative() {
                *dir = project_root.join(dir.as_path());
            }
        }
    }
}

/// Loads configuration from a project directory, trying multiple file formats.
/// Supports: sprout.json, sprout.yml, sprout.yaml
///
/// # Arguments
/// * `project_root` - Directory the configuration (and relative paths in it)
///   are resolved against
///
/// # Returns
/// * `Result<Config>` - Configuration from the first found file, or defaults
///   when no file exists, with environment overrides applied and every
///   directory made absolute
///
/// # Errors
/// * `Error::Config` if a configuration file exists but cannot be parsed
/// * `Error::FileSystem` if a configuration file exists but cannot be read
pub fn get_config<P: AsRef<Path>>(project_root: P) -> Result<Config> {
    let project_root = project_root.as_ref();
    let mut config = match read_config_file(project_root)? {
        Some(content) => parse_config(&content)?,
        None => Config::default(),
    };

    if let Ok(dir) = std::env::var(ENV_TEMPLATE_DIR) {
        config.template_dir = PathBuf::from(dir);
    }
    if let Ok(suffix) = std::env::var(ENV_MODULE_SUFFIX) {
        config.module_suffix = suffix;
    }

    config.resolve_against(project_root);
    Ok(config)
}

fn read_config_file(project_root: &Path) -> Result<Option<String>> {
    for file in CONFIG_FILES {
        let config_path = project_root.join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)
                .map_err(|source| Error::FileSystem { path: config_path, source })?;
            return Ok(Some(content));
        }
    }
    debug!("No configuration file found, using defaults");
    Ok(None)
}

/// Parses configuration content, trying JSON first and falling back to YAML.
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::Config(format!("invalid configuration format: {}", e))),
    }
}
