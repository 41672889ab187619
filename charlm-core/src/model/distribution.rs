use std::collections::HashMap;

/// Frequency distribution over characters.
///
/// A `FrequencyDistribution` counts how many times each character was
/// observed and answers relative-frequency queries. It is the building block
/// of both the unigram table and every context of a conditional table.
///
/// ## Responsibilities:
/// - Accumulate occurrences during training
/// - Answer count and relative frequency lookups
///
/// ## Invariants
/// - `total` equals the sum of all counts
/// - Each stored count is strictly positive
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyDistribution {
	/// Occurrences indexed by character.
	/// Example: { 'e' => 42, 'a' => 3 }
	counts: HashMap<char, usize>,
	/// Sum of all occurrences.
	total: usize,
}

impl FrequencyDistribution {
	/// Creates a new empty distribution.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `c`.
	pub fn add(&mut self, c: char) {
		*self.counts.entry(c).or_insert(0) += 1;
		self.total += 1;
	}

	/// Number of times `c` was observed (0 if never).
	pub fn count(&self, c: char) -> usize {
		self.counts.get(&c).copied().unwrap_or(0)
	}

	/// Total number of observations.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Number of distinct characters observed.
	pub fn distinct(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.total == 0
	}

	/// Relative frequency of `c`: `count(c) / total`.
	///
	/// Returns 0 for an unseen character and for an empty distribution.
	/// No smoothing is applied.
	pub fn freq(&self, c: char) -> f64 {
		if self.total == 0 {
			return 0.0;
		}
		self.count(c) as f64 / self.total as f64
	}

	/// Iterates over `(character, count)` pairs in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
		self.counts.iter().map(|(c, n)| (*c, *n))
	}
}

impl FromIterator<char> for FrequencyDistribution {
	fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
		let mut distribution = Self::new();
		for c in iter {
			distribution.add(c);
		}
		distribution
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_counts_and_total() {
		let dist: FrequencyDistribution = "hello".chars().collect();
		assert_eq!(dist.count('l'), 2);
		assert_eq!(dist.count('h'), 1);
		assert_eq!(dist.count('z'), 0);
		assert_eq!(dist.total(), 5);
		assert_eq!(dist.distinct(), 4);
	}

	#[test]
	fn test_freq() {
		let dist: FrequencyDistribution = "aab".chars().collect();
		assert_eq!(dist.freq('a'), 2.0 / 3.0);
		assert_eq!(dist.freq('b'), 1.0 / 3.0);
		assert_eq!(dist.freq('c'), 0.0);
	}

	#[test]
	fn test_empty_distribution() {
		let dist = FrequencyDistribution::new();
		assert!(dist.is_empty());
		assert_eq!(dist.freq('a'), 0.0);
	}

	#[test]
	fn test_total_matches_sum_of_counts() {
		let dist: FrequencyDistribution = "mississippi".chars().collect();
		let sum: usize = dist.iter().map(|(_, n)| n).sum();
		assert_eq!(sum, dist.total());
	}
}
