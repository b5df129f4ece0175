//! Integration tests for the ranking pipeline.

use typeahead::prelude::*;

fn dict(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_kitten_sitting_distance() {
    assert_eq!(standard_distance("kitten", "sitting"), 3);
}

#[test]
fn test_spec_ranking_example() {
    let words = dict(&["cat", "car", "cart", "dog"]);
    let options = RankOptions {
        top_k: 10,
        max_distance: Some(2),
        case_sensitive: false,
    };

    let ranked = rank("ca", &words, &options).unwrap();
    let pairs: Vec<(&str, usize)> = ranked
        .iter()
        .map(|c| (c.term.as_str(), c.distance))
        .collect();

    // "dog" excluded: distance 3 exceeds the cap
    assert_eq!(pairs, vec![("car", 1), ("cat", 1), ("cart", 2)]);

    // similarity for "cat": 1 - 1/3
    let cat = ranked.iter().find(|c| c.term == "cat").unwrap();
    assert!((cat.similarity - (1.0 - 1.0 / 3.0)).abs() < 1e-9);
}

#[test]
fn test_empty_query_returns_empty_for_any_dictionary() {
    let words = dict(&["alpha", "beta", "gamma"]);
    let ranked = rank("", &words, &RankOptions::default()).unwrap();
    assert!(ranked.is_empty());
}

#[test]
fn test_results_respect_top_k_and_cap() {
    let words = dict(&["test", "best", "rest", "nest", "west", "zest"]);
    let options = RankOptions {
        top_k: 3,
        max_distance: Some(1),
        case_sensitive: false,
    };

    let ranked = rank("test", &words, &options).unwrap();
    assert_eq!(ranked.len(), 3);
    assert!(ranked.iter().all(|c| c.distance <= 1));

    // Sorted by (distance asc, term asc)
    let mut sorted = ranked.clone();
    sorted.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.term.cmp(&b.term)));
    assert_eq!(ranked, sorted);
}

#[test]
fn test_case_insensitive_query_matches_folded_dictionary() {
    let words = dict(&["cat"]);
    let options = RankOptions {
        top_k: 10,
        max_distance: None,
        case_sensitive: false,
    };

    let upper = rank("CAT", &words, &options).unwrap();
    let lower = rank("cat", &words, &options).unwrap();

    assert_eq!(upper[0].distance, lower[0].distance);
    assert_eq!(upper[0].similarity, lower[0].similarity);
}

#[test]
fn test_rank_is_idempotent() {
    let words = dict(&["apple", "apply", "ample", "maple"]);
    let options = RankOptions::default();

    let first = rank("aple", &words, &options).unwrap();
    let second = rank("aple", &words, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_zero_top_k_is_an_error() {
    let words = dict(&["cat"]);
    let options = RankOptions {
        top_k: 0,
        max_distance: None,
        case_sensitive: false,
    };
    assert_eq!(rank("ca", &words, &options), Err(RankError::InvalidTopK));
}

#[test]
fn test_word_list_feeds_ranker() {
    let words = WordList::from_terms(["Apple", "APPLY", "ample"], false);
    let ranked = rank("appl", words.terms(), &RankOptions::default()).unwrap();

    // Load-time folding means every returned term is lower case
    assert!(ranked.iter().all(|c| c.term.chars().all(|ch| !ch.is_uppercase())));
    assert_eq!(ranked[0].term, "apple");
}

#[test]
fn test_rank_then_render_pipeline() {
    let words = dict(&["cat", "car", "cart", "dog"]);
    let options = RankOptions {
        top_k: 10,
        max_distance: Some(2),
        case_sensitive: false,
    };

    let ranked = rank("ca", &words, &options).unwrap();
    let lines = render(&ranked, "ca", &RenderOptions::plain()).unwrap();

    assert_eq!(lines.len(), 3);
    // Equal similarity for "car" and "cat": alphabetical for display
    assert!(lines[0].starts_with("Car"));
    assert!(lines[1].starts_with("Cat"));
    // "cart" is longer, so distance 2 yields the lowest similarity here
    assert!(lines[2].starts_with("Cart"));
}
