use std::path::Path;

use serde::{Deserialize, Serialize};

use super::profile::FrequencyProfile;
use crate::config::{AuthorSelection, TextOptions};
use crate::error::{Result, StyloError};
use crate::io;

/// An author and the aggregated profile of all their works.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AuthorProfile {
	pub name: String,
	pub profile: FrequencyProfile,
}

impl AuthorProfile {
	/// Creates an author with an empty profile.
	pub fn new(name: &str) -> Self {
		Self { name: name.to_owned(), profile: FrequencyProfile::new() }
	}

	/// Counts the n-grams of one work and merges them into the profile.
	pub fn add_work(&mut self, text: &str, options: &TextOptions) {
		self.profile.absorb(&FrequencyProfile::from_text(text, options));
	}
}

/// Every author profile of a run, in enumeration order.
///
/// # Invariants
/// - All profiles were built with the same `TextOptions`
/// - Author names are unique
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Corpus {
	options: TextOptions,
	authors: Vec<AuthorProfile>,
}

impl Corpus {
	/// Creates an empty corpus for the given options.
	pub fn new(options: TextOptions) -> Self {
		Self { options, authors: Vec::new() }
	}

	/// Builds a corpus from in-memory texts.
	///
	/// Texts of an author appearing several times are merged into the
	/// same profile. Authors keep their first-appearance order.
	pub fn from_texts<I, A, T, S>(texts: I, options: TextOptions) -> Self
	where
		I: IntoIterator<Item = (A, T)>,
		A: AsRef<str>,
		T: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut corpus = Self::new(options);
		for (name, works) in texts {
			let author = corpus.entry(name.as_ref());
			for work in works {
				author.add_work(work.as_ref(), &options);
			}
		}
		corpus
	}

	/// Builds a corpus from a directory of author sub-directories.
	///
	/// - `AuthorSelection::All` loads every sub-directory, sorted by name
	/// - `AuthorSelection::Single` loads only that author
	/// - Only `.txt` files are read; an author without works (or without a
	///   directory) keeps an empty profile
	///
	/// A work that cannot be read, or an author directory that cannot be
	/// listed, is skipped. The skipped failures are returned next to the
	/// corpus so the caller can report them.
	///
	/// # Errors
	/// Returns an error only if the corpus directory itself cannot be listed.
	pub fn load<P: AsRef<Path>>(
		dir: P,
		selection: &AuthorSelection,
		options: TextOptions,
	) -> Result<(Self, Vec<StyloError>)> {
		let dir = io::normalize_folder(dir);
		let names = match selection {
			AuthorSelection::All => io::list_author_dirs(&dir)?,
			AuthorSelection::Single(name) => vec![name.clone()],
		};

		let mut corpus = Self::new(options);
		let mut skipped = Vec::new();
		for name in names {
			let author_dir = dir.join(&name);
			let author = corpus.entry(&name);
			if !author_dir.is_dir() {
				log::warn!("No directory for author {name} in {}, profile left empty", dir.display());
				continue;
			}

			let works = match io::list_files(&author_dir, io::WORK_EXTENSION) {
				Ok(works) => works,
				Err(e) => {
					log::warn!("Skipping works of {name}: {e}");
					skipped.push(e);
					continue;
				}
			};

			for work in works {
				log::debug!("Reading {}", work.display());
				match io::read_text(&work) {
					Ok(text) => author.add_work(&text, &options),
					Err(e) => {
						log::warn!("Skipping work of {name}: {e}");
						skipped.push(e);
					}
				}
			}
			log::info!("Built profile for {}: {} distinct n-grams", name, author.profile.len());
		}

		Ok((corpus, skipped))
	}

	/// Returns the author with this name, creating it if needed.
	fn entry(&mut self, name: &str) -> &mut AuthorProfile {
		let index = match self.authors.iter().position(|a| a.name == name) {
			Some(index) => index,
			None => {
				self.authors.push(AuthorProfile::new(name));
				self.authors.len() - 1
			}
		};
		&mut self.authors[index]
	}

	/// Text options every profile of the corpus was built with.
	pub fn options(&self) -> &TextOptions {
		&self.options
	}

	/// Looks up an author's profile.
	///
	/// # Errors
	/// Returns `AuthorNotFound` if no profile exists for `name`.
	pub fn get(&self, name: &str) -> Result<&AuthorProfile> {
		self.authors
			.iter()
			.find(|a| a.name == name)
			.ok_or_else(|| StyloError::AuthorNotFound(name.to_owned()))
	}

	/// Iterates over authors in enumeration order.
	pub fn authors(&self) -> impl Iterator<Item = &AuthorProfile> {
		self.authors.iter()
	}

	/// Author names in enumeration order.
	pub fn author_names(&self) -> Vec<&str> {
		self.authors.iter().map(|a| a.name.as_str()).collect()
	}

	pub fn len(&self) -> usize {
		self.authors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.authors.is_empty()
	}
}
