//! sprout is an artifact scaffolding generator for module-based app
//! projects. Given an artifact type and a name it materializes source files
//! from templates, substitutes placeholder tokens with derived identifiers
//! and registers non-page artifacts in an existing module-declaration file.

/// Command-line interface module for the sprout application
pub mod cli;

/// Project configuration: destination directories per artifact kind,
/// template root and module-file suffix
pub mod config;

/// Common constants: the template file marker, special logical extensions
/// and the placeholder tokens recognized inside templates
pub mod constants;

/// Error types and handling for the sprout application
pub mod error;

/// Asynchronous filesystem helpers carrying path context on failure
pub mod fsio;

/// Generation flows: pages, module-registered artifacts and tabs groups,
/// plus generator listing and module-file discovery
pub mod generators;

/// Name derivation: class identifiers and file stems
pub mod naming;

/// Idempotent text-level mutation of module-declaration files
pub mod ngmodule;

/// Generation requests and request hydration
pub mod request;

/// Template reading, filtering, token substitution and materialization
pub mod templates;
