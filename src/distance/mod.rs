//! Distance metric implementation.
//!
//! Classic Levenshtein edit distance between two strings, computed with
//! space-optimized dynamic programming (two rows instead of a full matrix).
//!
//! The metric is exact: no approximation, no early termination. Distance caps
//! are applied by the ranker after the fact, never inside the metric.

use smallvec::SmallVec;

/// Compute standard Levenshtein distance between two strings.
///
/// The minimum number of single-character edits (insertions, deletions,
/// substitutions) required to transform `source` into `target`. Total for any
/// two finite strings, including empty ones, and symmetric in its arguments.
///
/// Comparison is per Unicode scalar value (`char`), not per byte.
///
/// # Example
///
/// ```rust
/// use typeahead::distance::standard_distance;
///
/// assert_eq!(standard_distance("kitten", "sitting"), 3);
/// assert_eq!(standard_distance("test", "test"), 0);
/// assert_eq!(standard_distance("", "abc"), 3);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let mut prev_row = Vec::new();
    let mut curr_row = Vec::new();
    standard_distance_with_buffers(&source_chars, &target_chars, &mut prev_row, &mut curr_row)
}

/// Compute standard Levenshtein distance using caller-provided row buffers.
///
/// Identical result to [`standard_distance`], but the two DP rows are borrowed
/// from the caller and resized as needed. The ranker hits this function once
/// per dictionary word per keystroke, so hoisting the row allocations out of
/// the loop keeps the inner loop allocation-free after the first candidate.
///
/// The buffer contents on entry are irrelevant; on exit they hold scratch
/// state from this computation.
pub fn standard_distance_with_buffers(
    source_chars: &[char],
    target_chars: &[char],
    prev_row: &mut Vec<usize>,
    curr_row: &mut Vec<usize>,
) -> usize {
    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    prev_row.clear();
    prev_row.extend(0..=n);
    curr_row.clear();
    curr_row.resize(n + 1, 0);

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = if source_chars[i - 1] == target_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(prev_row, curr_row);
    }

    prev_row[n]
}
