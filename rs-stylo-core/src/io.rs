use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::{env, fs};

use crate::error::{Result, StyloError};

/// Extension of the works read from an author directory.
pub const WORK_EXTENSION: &str = "txt";

/// Reads a whole text file.
///
/// - Invalid UTF-8 sequences are replaced rather than rejected
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
	let path = path.as_ref();
	let bytes = fs::read(path).map_err(|e| StyloError::io(path, e))?;
	Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Builds the path of a generated text.
///
/// Example:
/// `("out", "zola", "Gen_text")` → `out/zola_Gen_text.txt`
pub fn generated_text_path<P: AsRef<Path>>(output_dir: P, author: &str, basename: &str) -> PathBuf {
	output_dir.as_ref().join(format!("{author}_{basename}.{WORK_EXTENSION}"))
}

/// Resolves the corpus directory given on the command line.
///
/// The original tool defaults to the directory it runs from, so a bare
/// `"."` or `"./"` becomes the absolute working directory (and log messages
/// name a real path). Anything else is kept verbatim, relative or not.
pub fn normalize_folder<P: AsRef<Path>>(input: P) -> PathBuf {
	let input = input.as_ref();
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Lists the sub-directory names of `dir`, sorted.
///
/// Each sub-directory of the corpus directory is one author.
pub fn list_author_dirs<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
	let dir = dir.as_ref();
	if !dir.is_dir() {
		return Err(StyloError::NotADirectory(dir.to_path_buf()));
	}

	let mut authors = Vec::new();
	for entry in fs::read_dir(dir).map_err(|e| StyloError::io(dir, e))? {
		let path = entry.map_err(|e| StyloError::io(dir, e))?.path();
		if path.is_dir() {
			if let Some(name) = path.file_name() {
				authors.push(name.to_string_lossy().to_string());
			}
		}
	}

	authors.sort();
	Ok(authors)
}

/// Lists all files with a given extension in a directory, sorted.
///
/// Returns full paths. Files with another extension are skipped silently.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
	let dir = dir.as_ref();
	let mut files = Vec::new();

	for entry in fs::read_dir(dir).map_err(|e| StyloError::io(dir, e))? {
		let path = entry.map_err(|e| StyloError::io(dir, e))?.path();
		if !path.is_file() {
			continue;
		}
		if path.extension() == Some(OsStr::new(extension)) {
			files.push(path);
		} else {
			log::debug!("Skipping non-{extension} file {}", path.display());
		}
	}

	files.sort();
	Ok(files)
}
