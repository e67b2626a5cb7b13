//! Text tokenization for indexing and querying
//!
//! Pipeline: split on non-alphanumeric runs → drop empty fragments
//!           → Unicode lowercase each fragment
//!
//! The same `normalize` is applied to indexed tokens and to incoming query
//! words, so case variants of the same word always resolve to one term.

use std::collections::HashSet;

/// Normalize a single word to its indexed form.
///
/// Full Unicode lowercasing: accented letters fold to their lowercase form,
/// caseless scripts (CJK, digits) pass through unchanged. No canonical
/// (NFC/NFD) normalization is applied — composed and decomposed forms of
/// the same accented character remain distinct terms.
///
/// # Examples
///
/// ```
/// use docdex::tokenizer::normalize;
///
/// assert_eq!(normalize("Hello"), "hello");
/// assert_eq!(normalize("ÉCOLE"), "école");
/// assert_eq!(normalize("東京"), "東京");
/// ```
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

/// Tokenize text into normalized terms, duplicates preserved in order.
///
/// Splits on maximal runs of characters that are not alphanumeric under
/// Unicode classification: punctuation, whitespace, symbols, and emoji are
/// all separators. Letters and digits of any script are token characters,
/// so "covid19" stays one token.
///
/// Splitting happens before lowercasing. Lowercasing can expand a single
/// uppercase code point into a letter plus a combining mark (U+0130 →
/// "i\u{307}"), and the mark is not alphanumeric — lowercasing the whole
/// text first would split such words differently than `normalize` does on
/// the query side.
///
/// # Examples
///
/// ```
/// use docdex::tokenizer::tokenize;
///
/// let tokens = tokenize("Hello, World!");
/// assert_eq!(tokens, vec!["hello", "world"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(normalize)
        .collect()
}

/// Tokenize and deduplicate, keeping first occurrences in order.
///
/// This is the indexing entry point: a document contributes each distinct
/// term once, regardless of how often it occurs.
///
/// # Examples
///
/// ```
/// use docdex::tokenizer::tokenize_unique;
///
/// let tokens = tokenize_unique("tea for two, two for tea");
/// assert_eq!(tokens, vec!["tea", "for", "two"]);
/// ```
pub fn tokenize_unique(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
