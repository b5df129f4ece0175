//! # typeahead
//!
//! Interactive fuzzy word matching: re-ranks a dictionary of candidate words
//! by Levenshtein edit distance as a query is typed, one keystroke at a time.
//!
//! The engine is three pure stages wired together per invocation:
//!
//! 1. [`distance`] - classic Levenshtein edit distance between two strings
//! 2. [`rank`] - filter, order, and truncate the candidate set for a query
//! 3. [`render`] - turn ranked matches into aligned, highlighted display lines
//!
//! The engine holds no state between invocations; the immutable
//! [`dictionary::WordList`] is the only long-lived input.
//!
//! ## Example
//!
//! ```rust
//! use typeahead::prelude::*;
//!
//! let words = WordList::from_terms(["cat", "car", "cart", "dog"], false);
//! let ranked = rank("ca", words.terms(), &RankOptions::default()).unwrap();
//!
//! assert_eq!(ranked[0].term, "car");
//! assert_eq!(ranked[0].distance, 1);
//!
//! let lines = render(&ranked, "ca", &RenderOptions::plain()).unwrap();
//! assert!(lines[0].starts_with("Car"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dictionary;
pub mod distance;
pub mod rank;
pub mod render;

/// CLI interface and persistent configuration
#[cfg(feature = "cli")]
pub mod cli;

/// Interactive per-keystroke matching loop
#[cfg(feature = "cli")]
pub mod live;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::dictionary::WordList;
    pub use crate::distance::standard_distance;
    pub use crate::rank::{rank, RankError, RankOptions, ScoredCandidate};
    pub use crate::render::{render, RenderError, RenderOptions};
}
