use std::string::FromUtf8Error;

/// Errors raised while fetching documents from a corpus.
#[derive(thiserror::Error, Debug)]
pub enum CorpusError {
	/// The document identifier does not resolve to any document.
	#[error("corpus document `{0}` does not exist")]
	NotFound(String),

	#[error("failed to read corpus document `{document_id}`: {source}")]
	Io {
		document_id: String,
		#[source]
		source: std::io::Error,
	},

	#[error("corpus document `{document_id}` is not valid UTF-8: {source}")]
	InvalidUtf8 {
		document_id: String,
		#[source]
		source: FromUtf8Error,
	},
}

impl CorpusError {
	/// Identifier of the document the error is about.
	pub fn document_id(&self) -> &str {
		match self {
			CorpusError::NotFound(id) => id,
			CorpusError::Io { document_id, .. } => document_id,
			CorpusError::InvalidUtf8 { document_id, .. } => document_id,
		}
	}
}
