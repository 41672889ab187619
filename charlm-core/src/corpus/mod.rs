//! Access to the documents models are trained and tested on.
//!
//! A corpus answers two questions about a named document: its raw text and
//! its word list. Unknown names are reported as `CorpusError::NotFound`.

mod directory;
mod error;
mod memory;

/// Word/punctuation tokenizer used to derive word lists.
pub mod tokenize;

pub use directory::{DirectoryCorpus, Encoding};
pub use error::CorpusError;
pub use memory::MemoryCorpus;

/// A source of named documents.
pub trait CorpusProvider {
	/// Full raw text of a document.
	///
	/// # Errors
	/// `CorpusError::NotFound` if `document_id` is unknown.
	fn raw(&self, document_id: &str) -> Result<String, CorpusError>;

	/// The first `limit` word tokens of a document, in order.
	///
	/// # Errors
	/// `CorpusError::NotFound` if `document_id` is unknown.
	fn words(&self, document_id: &str, limit: usize) -> Result<Vec<String>, CorpusError> {
		let mut words = tokenize::word_punct(&self.raw(document_id)?);
		words.truncate(limit);
		Ok(words)
	}

	/// Identifiers of every available document.
	fn document_ids(&self) -> Vec<String>;
}
