//! Presentation of ranked matches.
//!
//! Consumes the ranker's structured records directly and produces one display
//! line per match: title-cased word, dot padding to an aligned percentage
//! column, percent similarity, and the edit distance in parentheses. When the
//! word starts with the current query, the matched prefix is highlighted in
//! green (color is an explicit option, never auto-detected, so the component
//! stays pure and testable).
//!
//! Display order is by descending similarity, then ascending term. Similarity
//! and distance are monotonically related only for a fixed word length, so
//! this can legitimately differ from the ranker's `(distance, term)` order.

use colored::Colorize;
use thiserror::Error;

use crate::rank::ScoredCandidate;

/// Dots appended beyond the longest word so short result sets still read as
/// a column.
const PAD_MARGIN: usize = 15;

/// Errors from malformed ranked records.
///
/// Cannot arise from [`crate::rank::rank`] output; this is a defensive
/// contract for direct callers and tests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// Similarity must lie in `[0, 1]`
    #[error("similarity {similarity} for term '{term}' is outside [0, 1]")]
    InvalidSimilarity {
        /// Term carrying the malformed score
        term: String,
        /// The out-of-range similarity value
        similarity: f64,
    },
}

/// Presentation options.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit ANSI color for the matched prefix
    pub color: bool,
}

impl RenderOptions {
    /// Options for plain-text output with no highlight markers.
    pub const fn plain() -> Self {
        Self { color: false }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Render ranked matches as display lines.
///
/// Returns one line per candidate, ordered by descending similarity then
/// ascending term. An empty `ranked` slice produces no lines, not even a
/// header.
///
/// # Errors
///
/// [`RenderError::InvalidSimilarity`] if any record's similarity lies outside
/// `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use typeahead::rank::{rank, RankOptions};
/// use typeahead::render::{render, RenderOptions};
///
/// let words = ["cat", "car"].map(String::from);
/// let ranked = rank("ca", &words, &RankOptions::default()).unwrap();
/// let lines = render(&ranked, "ca", &RenderOptions::plain()).unwrap();
///
/// assert_eq!(lines.len(), 2);
/// assert!(lines[0].starts_with("Car"));
/// assert!(lines[0].ends_with("66% (1)"));
/// ```
pub fn render(
    ranked: &[ScoredCandidate],
    query: &str,
    options: &RenderOptions,
) -> Result<Vec<String>, RenderError> {
    if ranked.is_empty() {
        return Ok(Vec::new());
    }

    for candidate in ranked {
        if !(0.0..=1.0).contains(&candidate.similarity) {
            return Err(RenderError::InvalidSimilarity {
                term: candidate.term.clone(),
                similarity: candidate.similarity,
            });
        }
    }

    // Re-sort for display: best similarity first, alphabetical among equals
    let mut ordered: Vec<&ScoredCandidate> = ranked.iter().collect();
    ordered.sort_by(|a, b| {
        b.similarity
            .total_cmp(&a.similarity)
            .then_with(|| a.term.cmp(&b.term))
    });

    let query_lower = query.to_lowercase();
    let prefix_chars = query.chars().count();

    // Pad against the displayed (title-cased) form; uppercasing can change
    // the character count
    let displayed: Vec<String> = ordered.iter().map(|c| title_case(&c.term)).collect();
    let max_word_len = displayed
        .iter()
        .map(|w| w.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(ordered.len());
    for (candidate, word) in ordered.iter().copied().zip(&displayed) {
        let word_len = word.chars().count();

        let shown = if options.color && prefix_chars > 0 && starts_with_query(candidate, &query_lower)
        {
            highlight_prefix(word, prefix_chars)
        } else {
            word.clone()
        };

        let dots = ".".repeat(max_word_len + PAD_MARGIN - word_len);
        let percent = (candidate.similarity * 100.0).floor() as usize;

        lines.push(format!(
            "{}{}{:>3}% ({})",
            shown, dots, percent, candidate.distance
        ));
    }

    Ok(lines)
}

fn starts_with_query(candidate: &ScoredCandidate, query_lower: &str) -> bool {
    candidate.term.to_lowercase().starts_with(query_lower)
}

/// Wrap the first `prefix_chars` characters of `word` in green.
fn highlight_prefix(word: &str, prefix_chars: usize) -> String {
    match word.char_indices().nth(prefix_chars) {
        Some((split, _)) => {
            let (prefix, rest) = word.split_at(split);
            format!("{}{}", prefix.green(), rest)
        }
        // Query at least as long as the word: the whole word matched
        None => word.green().to_string(),
    }
}

/// Uppercase the first character of each whitespace-delimited segment,
/// lowercase the rest.
fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut at_segment_start = true;

    for c in word.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_segment_start = true;
        } else if at_segment_start {
            out.extend(c.to_uppercase());
            at_segment_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}
