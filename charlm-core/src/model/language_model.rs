use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::corpus::{CorpusError, CorpusProvider};
use super::conditional::{ConditionalDistribution, BigramContext, TrigramContext};
use super::distribution::FrequencyDistribution;
use super::training::TrainingSlice;

/// Order of a character n-gram model.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NgramOrder {
	Unigram,
	Bigram,
	Trigram,
}

impl NgramOrder {
	/// All orders, lowest first.
	pub const ALL: [NgramOrder; 3] = [NgramOrder::Unigram, NgramOrder::Bigram, NgramOrder::Trigram];
}

impl fmt::Display for NgramOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			NgramOrder::Unigram => "Unigram",
			NgramOrder::Bigram => "Bigram",
			NgramOrder::Trigram => "Trigram",
		};
		f.write_str(label)
	}
}

/// Probabilities of one word under the three models.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct WordProbabilities {
	pub unigram: f64,
	pub bigram: f64,
	pub trigram: f64,
}

impl WordProbabilities {
	/// Probability under the given order.
	pub fn get(&self, order: NgramOrder) -> f64 {
		match order {
			NgramOrder::Unigram => self.unigram,
			NgramOrder::Bigram => self.bigram,
			NgramOrder::Trigram => self.trigram,
		}
	}
}

/// Character-level unigram, bigram and trigram model of one document.
///
/// All tables are built once from the document's `TrainingSlice` and never
/// change afterwards, so a model can be shared between threads and queried
/// concurrently.
///
/// # Responsibilities
/// - Derive the training slice from raw text
/// - Count characters, character pairs and character triples
/// - Answer word probability queries for each order
///
/// # Invariants
/// - `unigrams.total()` equals the number of characters of the slice
/// - Probabilities are raw relative-frequency products, always in [0, 1]
/// - Any unseen character or context makes the probability exactly 0
#[derive(Clone, Debug)]
pub struct LanguageModel {
	/// Normalized training text (and dev slice)
	slice: TrainingSlice,

	/// Character -> occurrences
	unigrams: FrequencyDistribution,

	/// Previous character -> next character occurrences
	bigrams: ConditionalDistribution<BigramContext>,

	/// Two previous characters -> next character occurrences
	trigrams: ConditionalDistribution<TrigramContext>,
}

impl LanguageModel {
	/// Trains a model on the raw text of a document.
	pub fn new(raw: &str) -> Self {
		let slice = TrainingSlice::from_raw(raw);
		let chars = slice.chars();

		let unigrams: FrequencyDistribution = chars.iter().copied().collect();
		let bigrams = ConditionalDistribution::bigrams(&chars);
		let trigrams = ConditionalDistribution::trigrams(&chars);

		debug!(
			"trained on {} chars: {} symbols, {} bigram contexts, {} trigram contexts",
			unigrams.total(),
			unigrams.distinct(),
			bigrams.len(),
			trigrams.len()
		);

		Self { slice, unigrams, bigrams, trigrams }
	}

	/// Trains a model on a document fetched from a corpus.
	///
	/// # Errors
	/// Returns `CorpusError::NotFound` if `document_id` is unknown to `corpus`,
	/// or any other error the provider reports while reading it.
	pub fn from_corpus<C: CorpusProvider + ?Sized>(corpus: &C, document_id: &str) -> Result<Self, CorpusError> {
		let raw = corpus.raw(document_id)?;
		Ok(Self::new(&raw))
	}

	pub fn training_slice(&self) -> &TrainingSlice {
		&self.slice
	}

	pub fn unigrams(&self) -> &FrequencyDistribution {
		&self.unigrams
	}

	pub fn bigrams(&self) -> &ConditionalDistribution<BigramContext> {
		&self.bigrams
	}

	pub fn trigrams(&self) -> &ConditionalDistribution<TrigramContext> {
		&self.trigrams
	}

	/// Product of `P(c)` over every character of the word.
	///
	/// An empty word has probability 1.
	pub fn unigram_probability(&self, word: &str) -> f64 {
		normalize(word)
			.into_iter()
			.fold(1.0, |probability, c| probability * self.unigrams.freq(c))
	}

	/// Product of `P(c[i] | c[i-1])` for `i >= 1`.
	///
	/// The first character is given, so words of at most one character
	/// have probability 1.
	pub fn bigram_probability(&self, word: &str) -> f64 {
		normalize(word)
			.windows(2)
			.fold(1.0, |probability, pair| probability * self.bigrams.freq(&pair[0], pair[1]))
	}

	/// Product of `P(c[i] | c[i-2], c[i-1])` for `i >= 2`.
	///
	/// Words of at most two characters have probability 1.
	pub fn trigram_probability(&self, word: &str) -> f64 {
		normalize(word)
			.windows(3)
			.fold(1.0, |probability, triple| {
				probability * self.trigrams.freq(&(triple[0], triple[1]), triple[2])
			})
	}

	/// Probability of `word` under the given order.
	pub fn probability(&self, order: NgramOrder, word: &str) -> f64 {
		match order {
			NgramOrder::Unigram => self.unigram_probability(word),
			NgramOrder::Bigram => self.bigram_probability(word),
			NgramOrder::Trigram => self.trigram_probability(word),
		}
	}

	/// Probabilities of `word` under all three orders.
	pub fn probabilities(&self, word: &str) -> WordProbabilities {
		WordProbabilities {
			unigram: self.unigram_probability(word),
			bigram: self.bigram_probability(word),
			trigram: self.trigram_probability(word),
		}
	}
}

/// Query words are stripped and lower-cased like the training text.
fn normalize(word: &str) -> Vec<char> {
	word.trim().to_lowercase().chars().collect()
}
