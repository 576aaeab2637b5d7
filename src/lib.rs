//! Word suggestions for partially or wrongly typed words, ranked with the
//! previous word as context.
//!
//! The vocabulary lives in a prefix tree that serves exact lookups, prefix
//! completion and a bounded edit-distance search. Unigram and bigram counts
//! gathered from the same corpus drive the default ordering.
//!
//! ```rust
//! use autocorrect::{RankingMode, SuggestionEngine};
//!
//! let engine = SuggestionEngine::from_lines(["the cat sat on a mat", "a hat"]);
//! engine.set_max_distance(1).unwrap();
//! engine.set_autocomplete(true);
//!
//! // only "cat" ever follows "the", so it outranks "hat", "mat" and "sat"
//! let suggestions = engine.suggest("xat", Some("the"));
//! assert_eq!(suggestions[0], "cat");
//!
//! engine.set_ranking_mode(RankingMode::Proximity);
//! assert_eq!(engine.suggest("ca", None), vec!["cat", "a"]);
//! ```

pub mod config;
pub mod distance;
mod engine;
pub mod error;
pub mod frequency;
pub mod fuzzy;
pub mod normalize;
pub mod ranking;
pub mod trie;

pub use config::{EngineConfig, Settings};
pub use engine::{Query, SuggestionEngine};
pub use error::{Error, Result};
pub use frequency::FrequencyModel;
pub use normalize::Tokenizer;
pub use ranking::{RankingMode, RankingPolicy};
pub use trie::{NodeId, PrefixTree, Words};
