use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Reads a whole file as raw bytes.
///
/// Decoding is left to the caller since corpus documents are not all UTF-8.
pub(crate) fn read_bytes<P: AsRef<Path>>(filename: P) -> io::Result<Vec<u8>> {
	fs::read(filename)
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder<P: AsRef<Path>>(input: P) -> PathBuf {
	let input = input.as_ref();
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Lists the regular files directly inside a directory, sorted by name.
///
/// Returns file names only (no paths). Hidden files are skipped.
pub(crate) fn list_files<P: AsRef<Path>>(dir: P) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if !path.is_file() {
			continue;
		}
		if let Some(name) = path.file_name() {
			let name = name.to_string_lossy();
			if !name.starts_with('.') {
				files.push(name.into_owned());
			}
		}
	}

	files.sort();
	Ok(files)
}

/// Returns true if `name` is a bare file name (no separator, no `..`).
pub(crate) fn is_plain_file_name(name: &str) -> bool {
	!name.is_empty()
		&& name != "."
		&& name != ".."
		&& !name.contains('/')
		&& !name.contains('\\')
}
