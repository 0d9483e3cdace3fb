//! Closest-match suggestion generation over the dictionary.

use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::Dictionary;
use crate::spelling::levenshtein::LevenshteinMatcher;

/// A candidate correction for a query word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Edit distance from the query.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new<S: Into<String>>(word: S, distance: usize) -> Self {
        Suggestion {
            word: word.into(),
            distance,
        }
    }
}

/// Configuration for suggestion generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Maximum edit distance a suggestion may have from the query.
    pub max_distance: usize,
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_distance: 2,
            max_suggestions: 2,
        }
    }
}

/// Fixed-capacity buffer of the closest candidates seen so far, kept in
/// ascending distance order.
///
/// A candidate displaces the worst kept entry only when it is strictly
/// closer, so equal-distance candidates stay in arrival order. Each offer is
/// a shift within the buffer, keeping a full scan at O(n * k) instead of
/// paying for a sort of every qualifying entry.
#[derive(Debug)]
struct TopMatches {
    entries: Vec<Suggestion>,
    capacity: usize,
}

impl TopMatches {
    fn new(capacity: usize) -> Self {
        TopMatches {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    fn offer(&mut self, word: &str, distance: usize) {
        let slot = self
            .entries
            .iter()
            .position(|kept| distance < kept.distance)
            .unwrap_or(self.entries.len());
        if slot >= self.capacity {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop();
        }
        self.entries.insert(slot, Suggestion::new(word, distance));
    }

    fn into_vec(self) -> Vec<Suggestion> {
        self.entries
    }
}

/// Suggestion engine that ranks dictionary words by edit distance.
pub struct SuggestionEngine {
    dictionary: Dictionary,
    config: SuggestionConfig,
}

impl SuggestionEngine {
    /// Create a new suggestion engine with the given dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        SuggestionEngine {
            dictionary,
            config: SuggestionConfig::default(),
        }
    }

    /// Create a new suggestion engine with custom configuration.
    pub fn with_config(dictionary: Dictionary, config: SuggestionConfig) -> Self {
        SuggestionEngine { dictionary, config }
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: SuggestionConfig) {
        self.config = config;
    }

    /// The active configuration.
    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// The underlying dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Mutable access to the underlying dictionary.
    pub fn dictionary_mut(&mut self) -> &mut Dictionary {
        &mut self.dictionary
    }

    /// Check whether a word is present in the dictionary.
    ///
    /// Takes `&mut self`: a hit reorganizes the dictionary's tree.
    pub fn is_correct(&mut self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Get suggestions for a word using the configured bounds.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        self.suggest_within(word, self.config.max_distance, self.config.max_suggestions)
    }

    /// Rank up to `limit` dictionary words within `max_distance` of `word`,
    /// ascending by distance.
    ///
    /// Scans the whole dictionary in sorted order, so equal-distance
    /// suggestions come out in dictionary order. A `limit` of zero yields no
    /// suggestions, and a `max_distance` of zero admits only exact matches.
    /// Never restructures the dictionary.
    pub fn suggest_within(&self, word: &str, max_distance: usize, limit: usize) -> Vec<Suggestion> {
        if limit == 0 {
            return Vec::new();
        }

        let matcher = LevenshteinMatcher::new(word);
        let mut best = TopMatches::new(limit);
        for entry in self.dictionary.iter() {
            if let Some(distance) = matcher.distance_within(entry, max_distance) {
                best.offer(entry, distance);
            }
        }
        best.into_vec()
    }
}
