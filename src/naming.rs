//! Name derivation for generated artifacts.
//! Turns the raw user-supplied name into the class identifier and file stem
//! used across templates, destination paths and module registration.

use crate::request::ArtifactKind;
use cruet::Inflector;

/// Appends `suffix` to `s` unless `s` already ends with it.
/// The comparison is case-sensitive; callers normalize casing first.
pub fn ensure_suffix(s: &str, suffix: &str) -> String {
    if s.ends_with(suffix) {
        s.to_string()
    } else {
        format!("{}{}", s, suffix)
    }
}

/// Strips a trailing `suffix` from `s`, comparing case-insensitively.
pub fn remove_suffix(s: &str, suffix: &str) -> String {
    if s.len() >= suffix.len() {
        let split = s.len() - suffix.len();
        if s.is_char_boundary(split) && s[split..].eq_ignore_ascii_case(suffix) {
            return s[..split].to_string();
        }
    }
    s.to_string()
}

/// Derives the class identifier for an artifact: the pascal-cased name
/// carrying the kind's suffix exactly once.
///
/// `"foo"` + component becomes `FooComponent`; `"FooPipe"` + pipe stays
/// `FooPipe`.
pub fn class_name(kind: ArtifactKind, name: &str) -> String {
    ensure_suffix(&name.to_pascal_case(), kind.suffix())
}

/// Derives the file stem for an artifact: the kebab-cased name with any
/// trailing `-<type>` token removed.
///
/// `"FooPipe"` + pipe becomes `foo`, the same stem `"foo"` would produce.
pub fn file_name(kind: ArtifactKind, name: &str) -> String {
    remove_suffix(&name.to_kebab_case(), &format!("-{}", kind.as_str()))
}
