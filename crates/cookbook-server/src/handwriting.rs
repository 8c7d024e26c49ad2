//! Normalization of hand-written recipe names.
//!
//! Unrelated to the registry: entry names are stored exactly as given.

use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s\x1C-\x1F]").unwrap());

/// Clean up a hand-written recipe name.
///
/// Hyphens and underscores become spaces, anything that is not a letter or
/// whitespace is dropped, and each remaining word is capitalized. Returns
/// `None` when nothing is left.
pub fn parse_handwriting(input: &str) -> Option<String> {
    let spaced = input.replace(['-', '_'], " ");
    let letters = DISALLOWED_RE.replace_all(&spaced, "");

    let words: Vec<String> = letters
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Whitespace, including the ASCII file, group, record and unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1C'..='\x1F').contains(&c)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
