use std::sync::mpsc;
use std::thread;

use log::info;
use serde::{Deserialize, Serialize};

use crate::corpus::{CorpusError, CorpusProvider};
use crate::model::{LanguageModel, NgramOrder, WordProbabilities};

/// Number of test words read from the data document by default.
pub const DEFAULT_WORD_LIMIT: usize = 1000;

/// One run: train on a document, test on the words of another (or the same) one.
///
/// Language names are display labels only.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Experiment {
	pub model_document: String,
	pub model_language: String,
	pub data_document: String,
	pub data_language: String,
}

impl Experiment {
	pub fn new(
		model_document: impl Into<String>,
		model_language: impl Into<String>,
		data_document: impl Into<String>,
		data_language: impl Into<String>,
	) -> Self {
		Self {
			model_document: model_document.into(),
			model_language: model_language.into(),
			data_document: data_document.into(),
			data_language: data_language.into(),
		}
	}
}

/// The reference runs: each model on its own language, then on a close one.
pub fn default_experiments() -> Vec<Experiment> {
	vec![
		Experiment::new("English-Latin1", "English", "English-Latin1", "English"),
		Experiment::new("English-Latin1", "English", "French_Francais-Latin1", "French"),
		Experiment::new("Spanish_Espanol-Latin1", "Spanish", "Spanish_Espanol-Latin1", "Spanish"),
		Experiment::new("Spanish_Espanol-Latin1", "Spanish", "Italian_Italiano-Latin1", "Italian"),
	]
}

/// Probabilities of a single test word.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WordReport {
	pub word: String,
	pub probabilities: WordProbabilities,
}

/// Count of test words each model assigns a nonzero probability to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
	pub total: usize,
	pub unigram_predicted: usize,
	pub bigram_predicted: usize,
	pub trigram_predicted: usize,
}

impl Tally {
	/// Accounts for one evaluated word.
	pub fn record(&mut self, probabilities: &WordProbabilities) {
		self.total += 1;
		if probabilities.unigram > 0.0 {
			self.unigram_predicted += 1;
		}
		if probabilities.bigram > 0.0 {
			self.bigram_predicted += 1;
		}
		if probabilities.trigram > 0.0 {
			self.trigram_predicted += 1;
		}
	}

	pub fn predicted(&self, order: NgramOrder) -> usize {
		match order {
			NgramOrder::Unigram => self.unigram_predicted,
			NgramOrder::Bigram => self.bigram_predicted,
			NgramOrder::Trigram => self.trigram_predicted,
		}
	}

	/// Percentage of words predicted by `order`; 0 when there were no words.
	pub fn accuracy(&self, order: NgramOrder) -> f64 {
		if self.total == 0 {
			return 0.0;
		}
		self.predicted(order) as f64 * 100.0 / self.total as f64
	}
}

impl<'a> FromIterator<&'a WordReport> for Tally {
	fn from_iter<I: IntoIterator<Item = &'a WordReport>>(iter: I) -> Self {
		let mut tally = Tally::default();
		for row in iter {
			tally.record(&row.probabilities);
		}
		tally
	}
}

/// Result of one experiment, rows in test-word order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExperimentReport {
	pub experiment: Experiment,
	pub rows: Vec<WordReport>,
	pub tally: Tally,
}

/// Trains the model, fetches the test words and evaluates them.
///
/// # Errors
/// Returns `CorpusError::NotFound` if either document is unknown. The model
/// document is resolved first.
pub fn run_experiment<C: CorpusProvider + ?Sized>(
	corpus: &C,
	experiment: &Experiment,
	word_limit: usize,
) -> Result<ExperimentReport, CorpusError> {
	info!(
		"model {} ({}), test data {} ({})",
		experiment.model_language, experiment.model_document, experiment.data_language, experiment.data_document
	);

	let model = LanguageModel::from_corpus(corpus, &experiment.model_document)?;
	let words = corpus.words(&experiment.data_document, word_limit)?;

	let rows = evaluate(&model, &words);
	let tally: Tally = rows.iter().collect();

	info!(
		"{} words: unigram {:.5}%, bigram {:.5}%, trigram {:.5}%",
		tally.total,
		tally.accuracy(NgramOrder::Unigram),
		tally.accuracy(NgramOrder::Bigram),
		tally.accuracy(NgramOrder::Trigram)
	);

	Ok(ExperimentReport { experiment: experiment.clone(), rows, tally })
}

/// Evaluates every word against `model`, preserving input order.
///
/// # Behavior
/// - Splits the words into one chunk per CPU.
/// - Evaluates chunks on scoped threads sharing the model by reference.
/// - Collects `(chunk index, rows)` over an MPSC channel and reorders them.
pub fn evaluate(model: &LanguageModel, words: &[String]) -> Vec<WordReport> {
	if words.is_empty() {
		return Vec::new();
	}

	let chunks = num_cpus::get().max(1);
	let chunk_size = words.len().div_ceil(chunks);

	let mut partials: Vec<(usize, Vec<WordReport>)> = thread::scope(|scope| {
		let (tx, rx) = mpsc::channel();
		for (index, chunk) in words.chunks(chunk_size).enumerate() {
			let tx = tx.clone();
			scope.spawn(move || {
				let rows: Vec<WordReport> = chunk
					.iter()
					.map(|word| WordReport { word: word.clone(), probabilities: model.probabilities(word) })
					.collect();
				// The receiver outlives every sender inside the scope.
				let _ = tx.send((index, rows));
			});
		}
		drop(tx);
		rx.iter().collect()
	});

	partials.sort_by_key(|(index, _)| *index);
	partials.into_iter().flat_map(|(_, rows)| rows).collect()
}
