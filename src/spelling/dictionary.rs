//! Dictionary storage for spelling correction.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::tree::{Iter, SplayTree};

/// An ordered word dictionary backed by a splay tree.
///
/// Every word a caller checks is splayed toward the root, so the words
/// checked most often stay cheapest to reach. That also means lookups are
/// structural writes: [`contains`](Dictionary::contains) takes `&mut self`.
///
/// Words are stored exactly as given. Callers that want case-insensitive
/// behavior normalize before calling.
#[derive(Debug, Default)]
pub struct Dictionary {
    words: SplayTree,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Dictionary {
            words: SplayTree::new(),
        }
    }

    /// Build a dictionary from a sequence of words.
    ///
    /// Duplicates collapse to a single entry.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.add_word(word.as_ref());
        }
        dictionary
    }

    /// Load a dictionary from a text file with one word per line.
    ///
    /// Lines are trimmed; blank lines are skipped.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut dictionary = Dictionary::new();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                dictionary.add_word(word);
            }
        }

        Ok(dictionary)
    }

    /// Add a word, returning `true` if it was not already present.
    ///
    /// Re-adding a present word does not duplicate it; it only moves the
    /// word to the root.
    pub fn add_word(&mut self, word: &str) -> bool {
        self.words.insert(word)
    }

    /// Remove a word, returning `true` if it was present.
    pub fn remove_word(&mut self, word: &str) -> bool {
        self.words.remove(word)
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&mut self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in ascending order without copying.
    pub fn iter(&self) -> Iter<'_> {
        self.words.iter()
    }

    /// All words in ascending order.
    pub fn words(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Built-in seed word lists.
pub struct BuiltinWords;

impl BuiltinWords {
    /// The starter dictionary the interactive spell checker ships with.
    pub fn starter() -> Dictionary {
        Dictionary::from_words([
            "apple",
            "banana",
            "cherry",
            "date",
            "the",
            "and",
            "is",
            "it",
            "to",
            "in",
            "of",
            "for",
            "are",
            "this",
            "spell",
            "checker",
            "example",
            "frequently",
            "used",
            "words",
        ])
    }
}
