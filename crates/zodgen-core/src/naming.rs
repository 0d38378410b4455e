//! Naming convention utilities for generated identifiers.
//!
//! Every exported name is derived deterministically from a kind prefix and a
//! source name, so a `$ref` to a schema and the statement declaring that
//! schema always agree.
//!
//! # Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `schema_Pet` | [`to_identifier`] | `schemaPet` |
//! | `hello-world` | [`to_valid_identifier`] | `hello_world` |
//! | `123abc` | [`to_valid_identifier`] | `_123abc` |
//! | `#/components/schemas/Pet` | [`schema_name_from_ref`] | `Pet` |

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Prefix for component schema statements.
pub const SCHEMA_PREFIX: &str = "schema";
/// Prefix for path-parameter statements.
pub const PATH_PREFIX: &str = "path";
/// Prefix for query-parameter statements.
pub const QUERY_PREFIX: &str = "query";

/// Where `$ref` pointers to named schemas are expected to live.
pub const COMPONENT_SCHEMAS_POINTER: &str = "#/components/schemas";

/// Words that cannot be used as a bare exported binding.
pub const RESERVED_KEYWORDS: &[&str] = &[
    "abstract",
    "arguments",
    "await",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "double",
    "else",
    "enum",
    "eval",
    "export",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "function",
    "goto",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "int",
    "interface",
    "let",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "volatile",
    "while",
    "with",
    "yield",
];

static RESERVED: Lazy<HashSet<&'static str>> =
    Lazy::new(|| RESERVED_KEYWORDS.iter().copied().collect());

fn is_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

/// Split text into words.
///
/// A word boundary is a run of separators (`-`, `_`, whitespace) or the
/// position before an ASCII uppercase letter. An uppercase letter at the very
/// start, or directly after a separator, does not open an extra empty word.
/// Leading and trailing separators produce empty words.
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in text.chars() {
        if is_separator(c) {
            if !prev.is_some_and(is_separator) {
                words.push(std::mem::take(&mut current));
            }
        } else {
            if c.is_ascii_uppercase() && prev.is_some_and(|p| !is_separator(p)) {
                words.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
        prev = Some(c);
    }
    words.push(current);

    words
}

/// Capitalize the first letter and lower-case the rest.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
    }
}

/// Convert text to camelCase.
///
/// # Examples
///
/// ```
/// use zodgen_core::naming::to_identifier;
///
/// assert_eq!(to_identifier("hello world"), "helloWorld");
/// assert_eq!(to_identifier("HelloWorld"), "helloWorld");
/// assert_eq!(to_identifier("hello-world"), "helloWorld");
/// assert_eq!(to_identifier("schema_PetType"), "schemaPetType");
/// ```
pub fn to_identifier(text: &str) -> String {
    split_words(text)
        .iter()
        .enumerate()
        .map(|(index, word)| {
            if index == 0 {
                word.to_lowercase()
            } else {
                capitalize_word(word)
            }
        })
        .collect()
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Turn arbitrary text into a legal bare identifier.
///
/// # Examples
///
/// ```
/// use zodgen_core::naming::to_valid_identifier;
///
/// assert_eq!(to_valid_identifier("123abc"), "_123abc");
/// assert_eq!(to_valid_identifier("hello-world"), "hello_world");
/// assert_eq!(to_valid_identifier("class"), "_class");
/// assert_eq!(to_valid_identifier(""), "_");
/// ```
pub fn to_valid_identifier(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return "_".to_string();
    };

    let mut result = String::with_capacity(text.len() + 1);
    if is_identifier_start(first) {
        result.push(first);
    } else if first.is_ascii_digit() {
        result.push('_');
        result.push(first);
    } else {
        result.push('_');
    }

    result.extend(chars.map(|c| if is_identifier_part(c) { c } else { '_' }));

    if RESERVED.contains(result.as_str()) {
        result.insert(0, '_');
    }

    result
}

/// Exported name for a statement of the given kind.
///
/// # Examples
///
/// ```
/// use zodgen_core::naming::{statement_identifier, SCHEMA_PREFIX};
///
/// assert_eq!(statement_identifier(SCHEMA_PREFIX, "Pet"), "schemaPet");
/// assert_eq!(statement_identifier("query", "pets_list"), "queryPetsList");
/// ```
pub fn statement_identifier(prefix: &str, name: &str) -> String {
    to_valid_identifier(&to_identifier(&format!("{prefix}_{name}")))
}

/// Schema name addressed by a `$ref` pointer: its last `/` segment.
///
/// Pointers outside `#/components/schemas` are still accepted.
pub fn schema_name_from_ref(pointer: &str) -> &str {
    if !pointer.starts_with(COMPONENT_SCHEMAS_POINTER) {
        tracing::warn!(
            pointer,
            "$ref does not start with the expected path `{COMPONENT_SCHEMAS_POINTER}`"
        );
    }
    pointer.rsplit('/').next().unwrap_or_default()
}

/// Whether a property key can be written without quotes.
pub fn is_bare_property_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => is_identifier_start(first) && chars.all(is_identifier_part),
        None => false,
    }
}

/// Replace every character that is not ASCII alphanumeric with `_`.
///
/// Used to turn a path template such as `/pets/{petId}` into words.
pub fn sanitize_words(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
#[path = "naming/naming_tests.rs"]
mod naming_tests;
