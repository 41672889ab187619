//! Character-level n-gram language models.
//!
//! This module provides:
//! - The training slice derivation (`TrainingSlice`)
//! - Character frequency distributions (`FrequencyDistribution`)
//! - Context-conditioned distributions (`ConditionalDistribution`)
//! - The unigram / bigram / trigram model itself (`LanguageModel`)

/// Unigram, bigram and trigram word probabilities over one trained document.
pub mod language_model;

/// Context -> next character distributions used by the bigram and trigram models.
pub mod conditional;

/// Plain character counts.
pub mod distribution;

/// Derivation of the fixed training window from a raw document.
pub mod training;

pub use conditional::{BigramContext, ConditionalDistribution, TrigramContext};
pub use distribution::FrequencyDistribution;
pub use language_model::{LanguageModel, NgramOrder, WordProbabilities};
pub use training::{TrainingSlice, DEV_LENGTH, TRAIN_LENGTH};
