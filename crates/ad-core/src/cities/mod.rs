//! Static city directory: prefix/word search, validity, and nearest-match
//! suggestion.
//!
//! The directory is a process-wide immutable constant. All matching runs on
//! lowercased code points - the list is Cyrillic, so byte comparison would
//! be wrong.

mod data;

use once_cell::sync::Lazy;

pub use data::{CITIES, POPULAR};

/// Search never returns more than this many entries
pub const MAX_SEARCH_RESULTS: usize = 15;

/// Once this many prefix matches exist, word matching is skipped -
/// exact-prefix hits are trusted when there are enough of them.
const PREFIX_MATCH_THRESHOLD: usize = 10;

/// Lowercased mirror of `CITIES`, built once on first use.
static CITIES_LOWER: Lazy<Vec<String>> =
    Lazy::new(|| data::CITIES.iter().map(|c| c.to_lowercase()).collect());

fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    data::CITIES
        .iter()
        .copied()
        .zip(CITIES_LOWER.iter().map(String::as_str))
}

/// Find known city names matching a free-text query.
///
/// Prefix matches come first, in directory order. When fewer than
/// `PREFIX_MATCH_THRESHOLD` exist, cities with a word (split on spaces and
/// hyphens) starting with the query are appended, again in directory order.
/// A blank query yields nothing; callers decide whether to fall back to
/// [`popular`].
pub fn search(query: &str) -> Vec<&'static str> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<&'static str> = entries()
        .filter(|(_, lower)| lower.starts_with(&q))
        .map(|(city, _)| city)
        .collect();

    if matches.len() < PREFIX_MATCH_THRESHOLD {
        for (city, lower) in entries() {
            if matches.contains(&city) {
                continue;
            }
            if lower.split([' ', '-']).any(|word| word.starts_with(&q)) {
                matches.push(city);
            }
        }
    }

    matches.truncate(MAX_SEARCH_RESULTS);
    matches
}

/// The curated well-known subset, independent of [`search`]
pub fn popular() -> &'static [&'static str] {
    data::POPULAR
}

/// True iff the name case-insensitively equals some directory entry exactly
pub fn is_valid(name: &str) -> bool {
    canonical(name).is_some()
}

/// The directory's display casing for a name, when it is a valid entry
pub fn canonical(name: &str) -> Option<&'static str> {
    let n = name.trim().to_lowercase();
    if n.is_empty() {
        return None;
    }
    entries().find(|(_, lower)| *lower == n).map(|(city, _)| city)
}

/// Closest known city for an invalid name: the first entry starting with
/// the input, else the first entry containing it, else nothing.
pub fn suggest(name: &str) -> Option<&'static str> {
    let n = name.trim().to_lowercase();
    if n.is_empty() {
        return None;
    }

    entries()
        .find(|(_, lower)| lower.starts_with(&n))
        .or_else(|| entries().find(|(_, lower)| lower.contains(&n)))
        .map(|(city, _)| city)
}
