//! Idempotent text-level mutation of module-declaration files.
//! Registration works on the file's raw text with a minimal tokenizer over
//! the declaration-list boundary; nothing here parses the file into a tree.
//! Both operations return their input unchanged when the class is already
//! registered, so re-running a generation never duplicates an entry.

use log::warn;
use regex::Regex;

/// Inserts a named import of `class_name` from `from_module` unless one
/// already exists.
///
/// The synthesized statement is placed after the last existing import so
/// the file's import block keeps its shape; a file with no imports gets the
/// statement prepended.
///
/// # Arguments
/// * `file_content` - Full text of the module-declaration file
/// * `class_name` - Class to import
/// * `from_module` - Module specifier the import references
///
/// # Returns
/// The updated text, or the input text unchanged when the import exists.
pub fn insert_named_import_if_needed(
    file_content: &str,
    class_name: &str,
    from_module: &str,
) -> String {
    if has_named_import(file_content, class_name) {
        return file_content.to_string();
    }

    let statement = format!("import {{ {} }} from '{}';", class_name, from_module);
    match last_import_end(file_content) {
        Some(end) => {
            format!("{}\n{}{}", &file_content[..end], statement, &file_content[end..])
        }
        None => format!("{}\n\n{}", statement, file_content),
    }
}

/// Appends `class_name` to the module's `declarations` list unless it is
/// already listed.
///
/// The list is located with a minimal tokenizer (the `declarations` key, a
/// colon, an opening bracket, then a bracket-depth scan to the matching
/// closing bracket), so surrounding formatting is irrelevant. New entries
/// mirror the list's existing layout: multi-line lists gain a new line with
/// the last entry's indentation and keep their trailing-comma style,
/// single-line lists grow in place.
///
/// A file with no recognizable declarations list is returned unchanged.
pub fn append_declaration(file_content: &str, class_name: &str) -> String {
    let Some((open, close)) = declarations_span(file_content) else {
        warn!("No declarations list found, module file left unchanged");
        return file_content.to_string();
    };

    let inner = &file_content[open + 1..close];
    if contains_identifier(inner, class_name) {
        return file_content.to_string();
    }

    let last_entry_char = inner.char_indices().rev().find(|(_, c)| !c.is_whitespace());
    let updated_inner = match last_entry_char {
        // Empty list: the class becomes its only entry
        None => format!("{}{}", class_name, inner),
        Some((idx, ch)) => {
            let (head, tail) = inner.split_at(idx + ch.len_utf8());
            if inner.contains('\n') {
                let indent = entry_indent(inner, idx);
                if ch == ',' {
                    format!("{}\n{}{},{}", head, indent, class_name, tail)
                } else {
                    format!("{},\n{}{}{}", head, indent, class_name, tail)
                }
            } else if ch == ',' {
                format!("{} {},{}", head, class_name, tail)
            } else {
                format!("{}, {}{}", head, class_name, tail)
            }
        }
    };

    format!(
        "{}{}{}",
        &file_content[..open + 1],
        updated_inner,
        &file_content[close..]
    )
}

/// Whether `file_content` already carries a named import of `class_name`.
fn has_named_import(file_content: &str, class_name: &str) -> bool {
    // Infallible: the pattern is a fixed literal
    let import_re = Regex::new(r"import\s*\{([^}]*)\}\s*from").expect("static import pattern");
    let has_import = import_re
        .captures_iter(file_content)
        .any(|captures| contains_identifier(&captures[1], class_name));
    has_import
}

/// Byte offset just past the final `;` of the last import statement.
fn last_import_end(file_content: &str) -> Option<usize> {
    let statement_re = Regex::new(r"(?m)^[ \t]*import\b[^;]*;").expect("static import pattern");
    statement_re.find_iter(file_content).last().map(|m| m.end())
}

/// Byte offsets of the `[` and matching `]` delimiting the declarations
/// list, located without parsing the surrounding file.
fn declarations_span(content: &str) -> Option<(usize, usize)> {
    let bytes = content.as_bytes();
    let mut from = 0;

    while let Some(rel) = content[from..].find("declarations") {
        let start = from + rel;
        let end = start + "declarations".len();
        from = end;

        let bounded = (start == 0 || !is_identifier_byte(bytes[start - 1]))
            && (end >= bytes.len() || !is_identifier_byte(bytes[end]));
        if !bounded {
            continue;
        }

        let mut i = skip_whitespace(bytes, end);
        if bytes.get(i) != Some(&b':') {
            continue;
        }
        i = skip_whitespace(bytes, i + 1);
        if bytes.get(i) != Some(&b'[') {
            continue;
        }

        return matching_bracket(bytes, i).map(|close| (i, close));
    }
    None
}

/// Leading whitespace of the line holding the last list entry, reused as
/// the indentation of the appended entry.
fn entry_indent(inner: &str, last_entry_at: usize) -> String {
    let line_start = inner[..last_entry_at].rfind('\n').map(|p| p + 1).unwrap_or(0);
    inner[line_start..]
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect()
}

/// Whether `ident` occurs in `haystack` as a whole identifier rather than
/// as a substring of a longer one.
fn contains_identifier(haystack: &str, ident: &str) -> bool {
    if ident.is_empty() {
        return false;
    }
    let bytes = haystack.as_bytes();
    let mut from = 0;
    while let Some(rel) = haystack[from..].find(ident) {
        let start = from + rel;
        let end = start + ident.len();
        let bounded = (start == 0 || !is_identifier_byte(bytes[start - 1]))
            && (end >= bytes.len() || !is_identifier_byte(bytes[end]));
        if bounded {
            return true;
        }
        from = start + 1;
    }
    false
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

fn matching_bracket(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, byte) in bytes.iter().enumerate().skip(open) {
        match byte {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$'
}
