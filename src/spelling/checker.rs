//! Spell-check facade combining the dictionary and the suggestion engine.

use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::{BuiltinWords, Dictionary};
use crate::spelling::suggest::{Suggestion, SuggestionConfig, SuggestionEngine};

/// Outcome of checking a single word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// The word that was checked.
    pub word: String,
    /// Whether the word is present in the dictionary.
    pub correct: bool,
    /// Closest dictionary words, ascending by edit distance. Empty when the
    /// word is correct or when nothing is near enough.
    pub suggestions: Vec<Suggestion>,
}

impl CheckResult {
    /// Check if any corrections were suggested.
    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Get the closest suggestion, if any.
    pub fn best_suggestion(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }
}

/// Spell checker over a self-adjusting dictionary.
///
/// Wraps a [`Dictionary`] and a [`SuggestionEngine`] behind the calls an
/// interactive driver needs: membership checks, word insertion, and ranked
/// "Did you mean?" suggestions for unknown words.
pub struct SpellChecker {
    engine: SuggestionEngine,
}

impl SpellChecker {
    /// Create a spell checker seeded with the built-in starter words.
    pub fn new() -> Self {
        SpellChecker {
            engine: SuggestionEngine::new(BuiltinWords::starter()),
        }
    }

    /// Create a spell checker over a caller-supplied dictionary.
    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        SpellChecker {
            engine: SuggestionEngine::new(dictionary),
        }
    }

    /// Create a spell checker with custom suggestion configuration.
    pub fn with_config(dictionary: Dictionary, config: SuggestionConfig) -> Self {
        SpellChecker {
            engine: SuggestionEngine::with_config(dictionary, config),
        }
    }

    /// Update the suggestion configuration.
    pub fn set_config(&mut self, config: SuggestionConfig) {
        self.engine.set_config(config);
    }

    /// Add a word to the dictionary, returning `true` if it was new.
    pub fn insert(&mut self, word: &str) -> bool {
        self.engine.dictionary_mut().add_word(word)
    }

    /// Check whether a word is spelled correctly (present in the
    /// dictionary). A hit moves the word to the tree's root.
    pub fn contains(&mut self, word: &str) -> bool {
        self.engine.is_correct(word)
    }

    /// Ranked suggestions for a word, using the configured bounds.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        self.engine.suggest(word)
    }

    /// Ranked suggestions with explicit bounds.
    pub fn suggest_within(&self, word: &str, max_distance: usize, limit: usize) -> Vec<Suggestion> {
        self.engine.suggest_within(word, max_distance, limit)
    }

    /// Check a word and, when it is unknown, collect its suggestions.
    pub fn check(&mut self, word: &str) -> CheckResult {
        if self.contains(word) {
            return CheckResult {
                word: word.to_string(),
                correct: true,
                suggestions: Vec::new(),
            };
        }

        CheckResult {
            word: word.to_string(),
            correct: false,
            suggestions: self.suggest(word),
        }
    }

    /// All dictionary words in ascending order.
    pub fn words(&self) -> Vec<String> {
        self.engine.dictionary().words()
    }

    /// Number of words in the dictionary.
    pub fn word_count(&self) -> usize {
        self.engine.dictionary().word_count()
    }

    /// The underlying dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        self.engine.dictionary()
    }

    /// Mutable access to the underlying dictionary.
    pub fn dictionary_mut(&mut self) -> &mut Dictionary {
        self.engine.dictionary_mut()
    }
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_known_word() {
        let mut checker = SpellChecker::new();
        let result = checker.check("apple");

        assert!(result.correct);
        assert!(!result.has_suggestions());
        assert_eq!(result.word, "apple");
    }

    #[test]
    fn test_check_unknown_word_with_suggestions() {
        let mut checker = SpellChecker::new();
        let result = checker.check("aple");

        assert!(!result.correct);
        assert!(result.has_suggestions());
        assert_eq!(result.best_suggestion().unwrap().word, "apple");
    }

    #[test]
    fn test_check_unknown_word_without_suggestions() {
        let mut checker = SpellChecker::new();
        let result = checker.check("xylophone");

        assert!(!result.correct);
        assert!(!result.has_suggestions());
        assert_eq!(result.best_suggestion(), None);
    }

    #[test]
    fn test_insert_then_check() {
        let mut checker = SpellChecker::with_dictionary(Dictionary::new());
        assert!(!checker.contains("zebra"));

        assert!(checker.insert("zebra"));
        assert!(checker.contains("zebra"));
        assert!(checker.check("zebra").correct);

        // Re-inserting is a no-op.
        assert!(!checker.insert("zebra"));
        assert_eq!(checker.word_count(), 1);
    }

    #[test]
    fn test_custom_config_bounds_suggestions() {
        let dictionary = Dictionary::from_words(["apple", "ape", "apply"]);
        let config = SuggestionConfig {
            max_distance: 2,
            max_suggestions: 1,
        };
        let mut checker = SpellChecker::with_config(dictionary, config);

        let result = checker.check("appl");
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].word, "apple");
    }

    #[test]
    fn test_words_listing() {
        let checker = SpellChecker::with_dictionary(Dictionary::from_words(["b", "a", "c"]));
        assert_eq!(checker.words(), ["a", "b", "c"]);
    }

    #[test]
    fn test_check_result_serialization() {
        let mut checker = SpellChecker::new();
        let result = checker.check("aple");

        let json = serde_json::to_string(&result).unwrap();
        let back: CheckResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
