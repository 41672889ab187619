use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
	static ref WORD_PUNCT: Regex = Regex::new(r"\w+|[^\w\s]+").unwrap();
}

/// Splits text into alphanumeric runs and punctuation runs.
///
/// Whitespace separates tokens and is dropped. Punctuation is never glued to
/// a word: `"don't."` gives `["don", "'", "t", "."]`.
pub fn word_punct(text: &str) -> Vec<String> {
	WORD_PUNCT.find_iter(text).map(|m| m.as_str().to_owned()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_words_and_punctuation() {
		assert_eq!(
			word_punct("Article 1. All human beings are born free!"),
			vec!["Article", "1", ".", "All", "human", "beings", "are", "born", "free", "!"]
		);
	}

	#[test]
	fn test_punctuation_runs() {
		assert_eq!(word_punct("don't...  stop"), vec!["don", "'", "t", "...", "stop"]);
	}

	#[test]
	fn test_unicode_letters() {
		assert_eq!(word_punct("Déclaration universelle"), vec!["Déclaration", "universelle"]);
	}

	#[test]
	fn test_blank() {
		assert!(word_punct(" \n\t ").is_empty());
	}
}
