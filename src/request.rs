//! Generation requests and request hydration.
//! A caller-supplied [`GeneratorRequest`] is expanded into a
//! [`HydratedRequest`] carrying the derived names and resolved read/write
//! directories every later stage consumes.

use crate::config::Config;
use crate::error::Error;
use crate::naming;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The closed set of artifact kinds sprout can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Component,
    Directive,
    Page,
    Pipe,
    Provider,
    Tabs,
}

impl ArtifactKind {
    /// Every kind, in the order they are listed to users.
    pub const ALL: [ArtifactKind; 6] = [
        ArtifactKind::Component,
        ArtifactKind::Directive,
        ArtifactKind::Page,
        ArtifactKind::Pipe,
        ArtifactKind::Provider,
        ArtifactKind::Tabs,
    ];

    /// Lowercase type tag; also the template subdirectory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Component => "component",
            ArtifactKind::Directive => "directive",
            ArtifactKind::Page => "page",
            ArtifactKind::Pipe => "pipe",
            ArtifactKind::Provider => "provider",
            ArtifactKind::Tabs => "tabs",
        }
    }

    /// Capitalized class-name suffix for this kind.
    pub fn suffix(&self) -> &'static str {
        match self {
            ArtifactKind::Component => "Component",
            ArtifactKind::Directive => "Directive",
            ArtifactKind::Page => "Page",
            ArtifactKind::Pipe => "Pipe",
            ArtifactKind::Provider => "Provider",
            ArtifactKind::Tabs => "Tabs",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtifactKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownType { type_name: s.to_string() })
    }
}

/// A generation request as supplied by the caller.
///
/// `include_ng_module` defaults to true and `include_spec` to false, so a
/// plain request materializes the minimal non-module, non-spec file set.
#[derive(Debug, Clone)]
pub struct GeneratorRequest {
    pub kind: ArtifactKind,
    pub name: String,
    pub include_spec: bool,
    pub include_ng_module: bool,
}

impl GeneratorRequest {
    pub fn new<S: Into<String>>(kind: ArtifactKind, name: S) -> Self {
        Self { kind, name: name.into(), include_spec: false, include_ng_module: true }
    }

    pub fn with_spec(mut self, include_spec: bool) -> Self {
        self.include_spec = include_spec;
        self
    }

    pub fn with_ng_module(mut self, include_ng_module: bool) -> Self {
        self.include_ng_module = include_ng_module;
        self
    }
}

/// A request enriched with derived names and resolved directories.
///
/// Derivation is deterministic: the same request against the same
/// configuration always hydrates to the same values.
#[derive(Debug, Clone)]
pub struct HydratedRequest {
    pub kind: ArtifactKind,
    pub name: String,
    pub include_spec: bool,
    pub include_ng_module: bool,
    /// Pascal-cased identifier ending in the kind's suffix exactly once
    pub class_name: String,
    /// Kebab-cased stem with any trailing type token stripped
    pub file_name: String,
    /// Template source directory for this kind
    pub dir_to_read: PathBuf,
    /// Destination directory, `<kind base dir>/<file_name>`
    pub dir_to_write: PathBuf,
}

/// Hydrates a generation request against the project configuration.
///
/// # Arguments
/// * `config` - Project configuration supplying the template root and the
///   per-kind destination base directories
/// * `request` - The request to expand
pub fn hydrate(config: &Config, request: &GeneratorRequest) -> HydratedRequest {
    let class_name = naming::class_name(request.kind, &request.name);
    let file_name = naming::file_name(request.kind, &request.name);
    let dir_to_read = config.template_dir.join(request.kind.as_str());
    let dir_to_write = config.dir_for_kind(request.kind).join(&file_name);

    HydratedRequest {
        kind: request.kind,
        name: request.name.clone(),
        include_spec: request.include_spec,
        include_ng_module: request.include_ng_module,
        class_name,
        file_name,
        dir_to_read,
        dir_to_write,
    }
}
