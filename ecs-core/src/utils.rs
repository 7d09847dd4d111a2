//! Shared utility functions for code generation.

/// Characters that separate words in schema titles and field paths.
const WORD_DELIMITERS: [char; 3] = ['_', '.', ' '];

/// Convert a string to PascalCase (e.g., "host.name" -> "HostName")
///
/// Words are split on underscores, periods and spaces. The first letter of
/// every word is uppercased (ASCII letters only) and the delimiters are
/// dropped; the remaining letters of each word are left as they are, so runs
/// of delimiters collapse and an already normalized name comes back unchanged.
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut word_start = true;

    for c in s.chars() {
        if WORD_DELIMITERS.contains(&c) {
            word_start = true;
        } else if word_start {
            result.push(c.to_ascii_uppercase());
            word_start = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Convert a dotted field path to a bracketed accessor path
/// (e.g., "a.b.c" -> "a']['b']['c").
///
/// The result is meant to sit between `['` and `']` in generated code.
pub fn to_accessor_path(path: &str) -> String {
    path.replace('.', "']['")
}
