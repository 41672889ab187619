use std::collections::BTreeMap;

use super::error::CorpusError;
use super::CorpusProvider;

/// Corpus held in memory, keyed by document id.
#[derive(Clone, Debug, Default)]
pub struct MemoryCorpus {
	documents: BTreeMap<String, String>,
}

impl MemoryCorpus {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a document.
	pub fn insert(&mut self, document_id: impl Into<String>, text: impl Into<String>) {
		self.documents.insert(document_id.into(), text.into());
	}

	/// Builder-style `insert`.
	pub fn with_document(mut self, document_id: impl Into<String>, text: impl Into<String>) -> Self {
		self.insert(document_id, text);
		self
	}
}

impl CorpusProvider for MemoryCorpus {
	fn raw(&self, document_id: &str) -> Result<String, CorpusError> {
		self.documents
			.get(document_id)
			.cloned()
			.ok_or_else(|| CorpusError::NotFound(document_id.to_owned()))
	}

	fn document_ids(&self) -> Vec<String> {
		self.documents.keys().cloned().collect()
	}
}
