//! Word-list dictionary loading.
//!
//! The dictionary is a plain newline-delimited word list: one word per line,
//! blank lines skipped, case-folded once at load time unless case-sensitive
//! matching was requested. It is loaded before the interactive loop starts
//! and never mutated afterwards; the engine only borrows its contents.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// An immutable, loaded word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    terms: Vec<String>,
}

impl WordList {
    /// Load a word list from a newline-delimited file.
    ///
    /// Blank lines are skipped. When `case_sensitive` is false every word is
    /// folded to lower case, so later case-insensitive ranking never has to
    /// re-fold the dictionary side.
    pub fn load(path: impl AsRef<Path>, case_sensitive: bool) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), case_sensitive)
    }

    /// Read a word list from any buffered reader.
    pub fn from_reader(reader: impl BufRead, case_sensitive: bool) -> io::Result<Self> {
        let mut terms = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            terms.push(if case_sensitive {
                word.to_string()
            } else {
                word.to_lowercase()
            });
        }
        Ok(Self { terms })
    }

    /// Build a word list from in-memory terms. Mainly for tests and examples.
    pub fn from_terms<I, S>(terms: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms = terms
            .into_iter()
            .map(|t| {
                let t = t.into();
                if case_sensitive {
                    t
                } else {
                    t.to_lowercase()
                }
            })
            .collect();
        Self { terms }
    }

    /// The loaded terms, in file order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of loaded terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the word list is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
