//! Error handling for the sprout application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for sprout operations.
///
/// This enum represents all possible errors that can occur while generating
/// artifacts. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested artifact type is not one of the known generator kinds
    #[error("unknown generator type: '{type_name}'")]
    UnknownType { type_name: String },

    /// A filesystem operation failed; carries the path it failed on
    #[error("filesystem error on '{}': {source}", path.display())]
    FileSystem { path: PathBuf, source: io::Error },

    /// The template directory for the requested type holds no template files
    #[error("no templates found in '{}'", dir.display())]
    TemplateNotFound { dir: PathBuf },

    /// Represents errors that occur during configuration loading or while
    /// resolving generator settings
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results with sprout's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
