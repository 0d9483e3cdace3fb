//! Spelling correction and suggestion for Xiphos.
//!
//! This module provides the fuzzy-matching side of the library: edit
//! distance computation, bounded top-K "Did you mean?" suggestion ranking,
//! the splay-tree-backed dictionary, and a facade that ties them together.

pub mod checker;
pub mod dictionary;
pub mod levenshtein;
pub mod suggest;

// Re-export commonly used types
pub use checker::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use suggest::*;
