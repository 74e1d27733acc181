//! Text normalization for indexing and querying
//!
//! The same pipeline runs on keywords and on queries so that token
//! comparison is symmetric:
//!
//! lowercase → canonical decomposition (NFD) → drop diacritical marks →
//! recompose (NFC) → trim
//!
//! Only the combining diacritical blocks are dropped. Other combining marks,
//! such as Indic vowel signs and viramas, are part of the letter and survive.

use std::ops::RangeInclusive;

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical blocks (base, extended, supplement, for symbols, half marks)
const DIACRITIC_BLOCKS: [RangeInclusive<char>; 5] = [
    '\u{0300}'..='\u{036F}',
    '\u{1AB0}'..='\u{1AFF}',
    '\u{1DC0}'..='\u{1DFF}',
    '\u{20D0}'..='\u{20FF}',
    '\u{FE20}'..='\u{FE2F}',
];

fn is_diacritic(c: char) -> bool {
    DIACRITIC_BLOCKS.iter().any(|block| block.contains(&c))
}

/// Normalize text for comparison
///
/// # Example
///
/// ```
/// use quickfind_search::normalize::normalize;
///
/// assert_eq!(normalize("  Électrique "), "electrique");
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(text: &str) -> String {
    // Lowercase first: some lowercase mappings emit combining marks (İ → i̇).
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_diacritic(*c))
        .nfc()
        .collect();
    stripped.trim().to_string()
}

/// Split a query into normalized, whitespace-separated tokens
///
/// Repeated words are kept; each occurrence scores on its own.
pub fn query_tokens(query: &str) -> Vec<String> {
    normalize(query)
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Tokens contributed by one keyword
///
/// The whole normalized keyword is always a token. With `split_words`, each
/// word of a multi-word keyword is added as well. Blank keywords yield nothing.
pub fn keyword_tokens(keyword: &str, split_words: bool) -> Vec<String> {
    let whole = normalize(keyword);
    if whole.is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    if split_words {
        let words: Vec<&str> = whole.split_whitespace().collect();
        if words.len() > 1 {
            tokens.extend(words.into_iter().map(String::from));
        }
    }
    tokens.push(whole);
    tokens
}
