//! Identifier shortening.
//!
//! The host CI system rejects configuration identifiers longer than 80
//! characters, so identifiers derived from (coverage, subproject) pairs go
//! through a two-phase shortening pass: known long substrings are abbreviated
//! first, and only if the result still blows the budget are lowercase vowels
//! stripped. The fallback is a heuristic, not a guarantee, which is why the
//! graph assembly checks generated ids for collisions and length.

/// Maximum length of a generated configuration identifier.
pub const MAX_IDENTIFIER_LEN: usize = 80;

/// Uppercase the first ASCII letter, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Shorten `name` so that `prefix + name` fits the identifier budget.
///
/// Abbreviation always runs; vowel stripping only when the abbreviated form
/// plus the prefix still exceeds [`MAX_IDENTIFIER_LEN`].
pub fn shorten(prefix: &str, name: &str) -> String {
    let shortened = name.replace("internal", "i").replace("Testing", "T");
    if shortened.len() + prefix.len() <= MAX_IDENTIFIER_LEN {
        return shortened;
    }
    shortened
        .chars()
        .filter(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
        .collect()
}
