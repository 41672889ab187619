use lazy_static::lazy_static;
use regex::Regex;

/// Number of raw characters used for training.
pub const TRAIN_LENGTH: usize = 1000;

/// Number of raw characters kept aside after the training window.
pub const DEV_LENGTH: usize = 100;

lazy_static! {
	static ref NEWLINES: Regex = Regex::new(r"\n+").unwrap();
}

/// The fixed portion of a document a model is trained on.
///
/// Derivation, in this exact order:
/// 1. take the first `TRAIN_LENGTH` characters of the raw text
/// 2. strip leading/trailing whitespace
/// 3. lower-case
/// 4. collapse every run of `\n` into a single space
///
/// The next `DEV_LENGTH` raw characters are kept untouched as a dev slice.
/// They never take part in training.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainingSlice {
	text: String,
	dev: String,
}

impl TrainingSlice {
	/// Derives the training and dev slices from a raw document.
	pub fn from_raw(raw: &str) -> Self {
		let window: String = raw.chars().take(TRAIN_LENGTH).collect();
		let lowered = window.trim().to_lowercase();
		let text = NEWLINES.replace_all(&lowered, " ").into_owned();

		let dev = raw.chars().skip(TRAIN_LENGTH).take(DEV_LENGTH).collect();

		Self { text, dev }
	}

	/// The normalized training text.
	pub fn as_str(&self) -> &str {
		&self.text
	}

	/// The training text as a character sequence.
	pub fn chars(&self) -> Vec<char> {
		self.text.chars().collect()
	}

	/// Raw characters `TRAIN_LENGTH..TRAIN_LENGTH + DEV_LENGTH`.
	pub fn dev(&self) -> &str {
		&self.dev
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_strip_lower_collapse() {
		let slice = TrainingSlice::from_raw("  The Quick\n\n\nBrown\nFox \n");
		assert_eq!(slice.as_str(), "the quick brown fox");
	}

	#[test]
	fn test_window_is_taken_before_strip() {
		// leading whitespace counts against the window
		let raw = format!("{}{}", " ".repeat(TRAIN_LENGTH - 2), "abcdef");
		let slice = TrainingSlice::from_raw(&raw);
		assert_eq!(slice.as_str(), "ab");
		assert_eq!(slice.dev(), "cdef");
	}

	#[test]
	fn test_window_counts_characters_not_bytes() {
		let raw = "é".repeat(TRAIN_LENGTH + 5);
		let slice = TrainingSlice::from_raw(&raw);
		assert_eq!(slice.chars().len(), TRAIN_LENGTH);
		assert_eq!(slice.dev().chars().count(), 5);
	}

	#[test]
	fn test_dev_slice_is_raw_and_bounded() {
		let raw = format!("{}{}", "a".repeat(TRAIN_LENGTH), "X\nY".repeat(100));
		let slice = TrainingSlice::from_raw(&raw);
		assert_eq!(slice.dev().chars().count(), DEV_LENGTH);
		assert!(slice.dev().starts_with("X\nY"));
	}

	#[test]
	fn test_inner_carriage_return_is_kept() {
		// only '\n' runs are collapsed
		let slice = TrainingSlice::from_raw("a\r\n\nb");
		assert_eq!(slice.as_str(), "a\r b");
	}

	#[test]
	fn test_empty_raw() {
		let slice = TrainingSlice::from_raw("");
		assert_eq!(slice.as_str(), "");
		assert_eq!(slice.dev(), "");
	}
}
