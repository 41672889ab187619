//! Character-level n-gram language models over a document corpus.
//!
//! This crate provides:
//! - Unigram, bigram and trigram character models trained on a fixed
//!   window of a document
//! - Word probability queries under each model (raw relative frequencies,
//!   no smoothing: anything unseen scores exactly 0)
//! - Corpus access (folder of documents, or in memory)
//! - Experiments measuring how many test words each model "predicts"
//!
//! ```
//! use charlm_core::model::LanguageModel;
//!
//! let model = LanguageModel::new("the quick brown fox");
//! assert_eq!(model.unigram_probability("t"), 1.0 / 19.0);
//! assert_eq!(model.unigram_probability("5"), 0.0);
//! ```

/// Training slice, frequency tables and probability queries.
pub mod model;

/// Corpus providers and the word tokenizer.
pub mod corpus;

/// Experiment runs and accuracy tallies.
pub mod experiment;

/// I/O utilities (file loading, folder listing).
///
/// Not exposed
pub(crate) mod io;
