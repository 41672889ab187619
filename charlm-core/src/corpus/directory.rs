use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::io::{is_plain_file_name, list_files, normalize_folder, read_bytes};
use super::error::CorpusError;
use super::CorpusProvider;

/// Text encoding of a corpus document, taken from the tag ending its id.
///
/// UDHR ids look like `<Language>-<Encoding>`, e.g. `English-Latin1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
	/// ISO-8859-1: every byte is the code point of the same value.
	Latin1,
	Utf8,
	/// Unknown tag: decoded as UTF-8, invalid sequences replaced.
	Other,
}

impl Encoding {
	pub fn from_document_id(document_id: &str) -> Self {
		let tag = document_id.rsplit('-').next().unwrap_or_default();
		match tag.to_ascii_lowercase().as_str() {
			"latin1" => Encoding::Latin1,
			"utf8" => Encoding::Utf8,
			_ => Encoding::Other,
		}
	}

	fn decode(self, document_id: &str, bytes: Vec<u8>) -> Result<String, CorpusError> {
		match self {
			Encoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
			Encoding::Utf8 => String::from_utf8(bytes).map_err(|source| CorpusError::InvalidUtf8 {
				document_id: document_id.to_owned(),
				source,
			}),
			Encoding::Other => {
				warn!("unknown encoding for `{}`, decoding as lossy UTF-8", document_id);
				Ok(String::from_utf8_lossy(&bytes).into_owned())
			}
		}
	}
}

/// Corpus stored as one file per document in a single folder.
///
/// The document id is the file name (UDHR layout has no extension).
#[derive(Clone, Debug)]
pub struct DirectoryCorpus {
	root: PathBuf,
}

impl DirectoryCorpus {
	/// Opens a corpus folder.
	///
	/// # Errors
	/// Returns an error if the path is not a directory.
	pub fn new<P: AsRef<Path>>(root: P) -> io::Result<Self> {
		let root = normalize_folder(root);
		if !root.is_dir() {
			return Err(io::Error::new(
				io::ErrorKind::NotFound,
				format!("Expected a directory, got: {}", root.display()),
			));
		}
		Ok(Self { root })
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	fn document_path(&self, document_id: &str) -> Option<PathBuf> {
		if !is_plain_file_name(document_id) {
			return None;
		}
		let path = self.root.join(document_id);
		path.is_file().then_some(path)
	}
}

impl CorpusProvider for DirectoryCorpus {
	fn raw(&self, document_id: &str) -> Result<String, CorpusError> {
		let path = self
			.document_path(document_id)
			.ok_or_else(|| CorpusError::NotFound(document_id.to_owned()))?;

		let bytes = read_bytes(&path).map_err(|source| CorpusError::Io {
			document_id: document_id.to_owned(),
			source,
		})?;
		debug!("read {} bytes from {}", bytes.len(), path.display());

		Encoding::from_document_id(document_id).decode(document_id, bytes)
	}

	fn document_ids(&self) -> Vec<String> {
		match list_files(&self.root) {
			Ok(files) => files,
			Err(e) => {
				warn!("cannot list corpus folder {}: {}", self.root.display(), e);
				Vec::new()
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::tempdir;

	#[test]
	fn test_encoding_from_id() {
		assert_eq!(Encoding::from_document_id("English-Latin1"), Encoding::Latin1);
		assert_eq!(Encoding::from_document_id("Japanese_Nihongo-UTF8"), Encoding::Utf8);
		assert_eq!(Encoding::from_document_id("Russian-Cyrillic"), Encoding::Other);
		assert_eq!(Encoding::from_document_id("plain"), Encoding::Other);
	}

	#[test]
	fn test_latin1_decoding() {
		let dir = tempdir().unwrap();
		// "Déclaration" in ISO-8859-1
		fs::write(dir.path().join("French-Latin1"), b"D\xe9claration").unwrap();
		let corpus = DirectoryCorpus::new(dir.path()).unwrap();
		assert_eq!(corpus.raw("French-Latin1").unwrap(), "Déclaration");
	}

	#[test]
	fn test_invalid_utf8() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("Broken-UTF8"), b"ab\xff").unwrap();
		let corpus = DirectoryCorpus::new(dir.path()).unwrap();
		assert!(matches!(corpus.raw("Broken-UTF8"), Err(CorpusError::InvalidUtf8 { .. })));
	}

	#[test]
	fn test_missing_document() {
		let dir = tempdir().unwrap();
		let corpus = DirectoryCorpus::new(dir.path()).unwrap();
		match corpus.raw("Klingon-Latin1") {
			Err(CorpusError::NotFound(id)) => assert_eq!(id, "Klingon-Latin1"),
			other => panic!("unexpected result: {:?}", other),
		}
	}

	#[test]
	fn test_path_escape_is_not_found() {
		let dir = tempdir().unwrap();
		fs::create_dir(dir.path().join("inner")).unwrap();
		fs::write(dir.path().join("secret"), b"x").unwrap();
		let corpus = DirectoryCorpus::new(dir.path().join("inner")).unwrap();
		assert!(matches!(corpus.raw("../secret"), Err(CorpusError::NotFound(_))));
	}

	#[test]
	fn test_document_ids_sorted() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("b-Latin1"), b"b").unwrap();
		fs::write(dir.path().join("a-Latin1"), b"a").unwrap();
		fs::create_dir(dir.path().join("sub")).unwrap();
		let corpus = DirectoryCorpus::new(dir.path()).unwrap();
		assert_eq!(corpus.document_ids(), vec!["a-Latin1", "b-Latin1"]);
	}

	#[test]
	fn test_root_must_be_directory() {
		let dir = tempdir().unwrap();
		assert!(DirectoryCorpus::new(dir.path().join("nope")).is_err());
	}
}
