//! Ranking pipeline.
//!
//! Given a query and a candidate word list, computes the edit distance to
//! every candidate, filters by an optional distance cap, orders by
//! `(distance, term)`, truncates to `top_k`, and attaches a normalized
//! similarity score to each surviving match.
//!
//! Ranking is a pure function of its inputs: no hidden state, identical
//! output for identical inputs. The caller's word list is never mutated.

use smallvec::SmallVec;
use thiserror::Error;

use crate::distance::standard_distance_with_buffers;

/// Errors from invalid ranking parameters.
///
/// Every other input shape - empty query, empty candidate set - is valid and
/// produces an empty result rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// `top_k` must be a positive result cap
    #[error("top_k must be positive (got 0)")]
    InvalidTopK,
}

/// A candidate word scored against the current query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// The matching term, in its normalized form when matching
    /// case-insensitively
    pub term: String,
    /// Edit distance from the query
    pub distance: usize,
    /// Normalized similarity in `[0, 1]`:
    /// `1 - distance / max(query_len, term_len)`, or `1.0` when both are empty
    pub similarity: f64,
}

/// Ranking parameters shared by the CLI and the interactive loop.
#[derive(Debug, Clone)]
pub struct RankOptions {
    /// Maximum number of results to return (must be positive)
    pub top_k: usize,
    /// Retain only candidates within this edit distance; `None` means
    /// unbounded
    pub max_distance: Option<usize>,
    /// Compare query and candidates without case folding
    pub case_sensitive: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            top_k: 10,
            max_distance: Some(4),
            case_sensitive: false,
        }
    }
}

/// Rank `words` against `query`.
///
/// Returns at most `options.top_k` candidates, each within
/// `options.max_distance` edits when a cap is set, sorted by ascending
/// distance and then ascending term. An empty query short-circuits to an
/// empty result: it would otherwise match every word at distance
/// `word.len()`, which is noise rather than a ranking.
///
/// When `options.case_sensitive` is false, the query and each candidate are
/// folded to lower case before comparison, and returned terms are the folded
/// form. Folding operates on transient copies; `words` is untouched.
///
/// # Errors
///
/// [`RankError::InvalidTopK`] if `options.top_k` is zero.
///
/// # Example
///
/// ```rust
/// use typeahead::rank::{rank, RankOptions};
///
/// let words = ["cat", "car", "cart", "dog"].map(String::from);
/// let options = RankOptions { top_k: 10, max_distance: Some(2), case_sensitive: false };
///
/// let ranked = rank("ca", &words, &options).unwrap();
/// let pairs: Vec<(&str, usize)> = ranked.iter().map(|c| (c.term.as_str(), c.distance)).collect();
/// assert_eq!(pairs, vec![("car", 1), ("cat", 1), ("cart", 2)]);
/// ```
pub fn rank(
    query: &str,
    words: &[String],
    options: &RankOptions,
) -> Result<Vec<ScoredCandidate>, RankError> {
    if options.top_k == 0 {
        return Err(RankError::InvalidTopK);
    }

    if query.is_empty() {
        return Ok(Vec::new());
    }

    let folded_query;
    let query = if options.case_sensitive {
        query
    } else {
        folded_query = query.to_lowercase();
        &folded_query
    };

    let query_chars: SmallVec<[char; 32]> = query.chars().collect();

    // Row buffers live across the whole candidate scan
    let mut prev_row = Vec::new();
    let mut curr_row = Vec::new();
    let mut word_chars: Vec<char> = Vec::new();

    let mut results: Vec<(usize, String)> = Vec::new();
    for word in words {
        let folded_word;
        let word = if options.case_sensitive {
            word.as_str()
        } else {
            folded_word = word.to_lowercase();
            folded_word.as_str()
        };

        word_chars.clear();
        word_chars.extend(word.chars());

        let distance =
            standard_distance_with_buffers(&query_chars, &word_chars, &mut prev_row, &mut curr_row);

        if options.max_distance.map_or(true, |max| distance <= max) {
            results.push((distance, word.to_string()));
        }
    }

    // Sort by distance then alphabetically
    results.sort();
    results.truncate(options.top_k);

    Ok(results
        .into_iter()
        .map(|(distance, term)| {
            let similarity = similarity_for(distance, query_chars.len(), term.chars().count());
            ScoredCandidate {
                term,
                distance,
                similarity,
            }
        })
        .collect())
}

/// Normalized complement of edit distance relative to the longer sequence.
fn similarity_for(distance: usize, query_len: usize, term_len: usize) -> f64 {
    let max_len = query_len.max(term_len);
    if max_len == 0 {
        1.0
    } else {
        1.0 - (distance as f64 / max_len as f64)
    }
}
