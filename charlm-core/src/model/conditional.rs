use std::collections::HashMap;
use std::hash::Hash;

use super::distribution::FrequencyDistribution;

/// Context of a bigram table: the preceding character.
pub type BigramContext = char;

/// Context of a trigram table: the two preceding characters, in order.
pub type TrigramContext = (char, char);

/// Conditional frequency distribution.
///
/// Maps a context (one or more preceding characters) to the distribution of
/// the characters observed right after it.
///
/// # Responsibilities
/// - Accumulate `(context, next)` observations
/// - Answer `P(next | context)` as a raw relative frequency
///
/// # Invariants
/// - Each stored context has at least one observation
/// - Lookups never insert: querying an unseen context leaves the table untouched
#[derive(Clone, Debug)]
pub struct ConditionalDistribution<K> {
	/// Mapping from a context to the distribution of what followed it
	contexts: HashMap<K, FrequencyDistribution>,
}

impl<K> Default for ConditionalDistribution<K> {
	fn default() -> Self {
		Self { contexts: HashMap::new() }
	}
}

impl<K: Eq + Hash> ConditionalDistribution<K> {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `next` following `context`.
	pub fn add(&mut self, context: K, next: char) {
		self.contexts.entry(context).or_default().add(next);
	}

	/// Returns the distribution observed after `context`, if any.
	pub fn get(&self, context: &K) -> Option<&FrequencyDistribution> {
		self.contexts.get(context)
	}

	/// Relative frequency of `next` after `context`.
	///
	/// An unseen context behaves like an empty distribution and yields 0.
	pub fn freq(&self, context: &K, next: char) -> f64 {
		self.get(context).map_or(0.0, |dist| dist.freq(next))
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Iterates over `(context, distribution)` pairs in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = (&K, &FrequencyDistribution)> {
		self.contexts.iter()
	}
}

impl ConditionalDistribution<BigramContext> {
	/// Builds a bigram table from every adjacent pair of `chars`.
	pub fn bigrams(chars: &[char]) -> Self {
		let mut table = Self::new();
		for pair in chars.windows(2) {
			table.add(pair[0], pair[1]);
		}
		table
	}
}

impl ConditionalDistribution<TrigramContext> {
	/// Builds a trigram table from every adjacent triple of `chars`.
	pub fn trigrams(chars: &[char]) -> Self {
		let mut table = Self::new();
		for triple in chars.windows(3) {
			table.add((triple[0], triple[1]), triple[2]);
		}
		table
	}
}
