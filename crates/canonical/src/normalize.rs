//! Comparison keys for case- and accent-insensitive matching.
//!
//! A key is produced in three steps:
//!
//! 1. Unicode lowercasing (locale-free, may expand e.g. `İ` into two chars)
//! 2. Canonical decomposition (NFD), splitting `ã` into `a` + U+0303
//! 3. Removal of the combining diacritical marks block (U+0300..=U+036F)
//!
//! ```text
//! "João"  → "joao"
//! "JOÃO"  → "joao"
//! "Cardiología" → "cardiologia"
//! ```
//!
//! Marks outside the diacritics block (Devanagari vowel signs, Hebrew points,
//! ...) are kept so scripts that rely on them still compare meaningfully.

use std::ops::RangeInclusive;

use unicode_normalization::UnicodeNormalization;

const COMBINING_DIACRITICS: RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Returns the comparison key for `text`.
///
/// Apply this to both sides of a comparison: stored field values and
/// user-supplied terms must go through the same transform before any
/// substring test.
///
/// # Examples
///
/// ```rust
/// use canonical::normalize;
///
/// assert_eq!(normalize("João"), normalize("joao"));
/// assert_eq!(normalize("JOÃO"), "joao");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    // ASCII never decomposes, so lowercasing is the whole transform.
    if text.is_ascii() {
        return text.to_ascii_lowercase();
    }

    let lowered = text.to_lowercase();
    let mut key = String::with_capacity(lowered.len());
    key.extend(lowered.nfd().filter(|ch| !is_combining_diacritic(*ch)));
    key
}

/// True for code points in the combining diacritical marks block.
pub fn is_combining_diacritic(ch: char) -> bool {
    COMBINING_DIACRITICS.contains(&ch)
}

/// Normalized substring test: does `haystack` contain `needle` once both are
/// reduced to comparison keys?
///
/// An empty needle is contained in every haystack.
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(normalize(needle).as_str())
}
