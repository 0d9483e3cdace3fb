//! # Xiphos
//!
//! A self-adjusting spelling dictionary and suggestion library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Splay-tree dictionary: frequently checked words migrate toward the root
//! - Levenshtein edit distance with a banded early-exit variant
//! - Bounded top-K "Did you mean?" suggestions in ascending distance order
//! - Caller-supplied dictionary seeding (word lists, files, built-ins)

pub mod error;
pub mod spelling;
pub mod tree;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
