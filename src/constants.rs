//! Common constants used throughout the sprout application.

/// Marker extension identifying template files inside a template directory.
/// Everything before this marker is the generated file's logical extension.
pub const TEMPLATE_FILE_EXTENSION: &str = ".tmpl";

/// Logical extension of the module-registration template
pub const NG_MODULE_FILE_EXTENSION: &str = "module.ts";

/// Logical extension of the test-spec template
pub const SPEC_FILE_EXTENSION: &str = "spec.ts";

/// Placeholder replaced with the derived class name
pub const CLASSNAME_VARIABLE: &str = "$CLASSNAME";

/// Placeholder replaced with the derived file stem
pub const FILENAME_VARIABLE: &str = "$FILENAME";

/// Placeholder replaced with the name exactly as the user supplied it
pub const SUPPLIEDNAME_VARIABLE: &str = "$SUPPLIEDNAME";
