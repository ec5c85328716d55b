use std::fmt;
use std::fs;
use std::path::Path;

use rand::Rng;

use crate::error::{Result, StyloError};
use crate::model::author::Corpus;
use crate::model::profile::FrequencyProfile;

/// A sequence of n-grams drawn from an author's profile.
///
/// Serialized as `<author> :: Début: <g1> <g2> ... :: Fin`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedText {
	pub author: String,
	pub ngrams: Vec<String>,
}

impl GeneratedText {
	/// Writes the serialized text to `path`, replacing any existing file.
	pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		let path = path.as_ref();
		fs::write(path, self.to_string()).map_err(|e| StyloError::io(path, e))
	}
}

impl fmt::Display for GeneratedText {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} :: Début: ", self.author)?;
		for gram in &self.ngrams {
			write!(f, "{gram} ")?;
		}
		write!(f, ":: Fin")
	}
}

/// Cumulative weights of a profile, for repeated weighted sampling.
///
/// Keys are sorted so that a seeded RNG always yields the same draws.
///
/// # Invariants
/// - `cumulative` is strictly increasing (every count is >= 1)
/// - `total` is the last cumulative value
struct WeightedTable<'a> {
	grams: Vec<&'a str>,
	cumulative: Vec<u64>,
	total: u64,
}

impl<'a> WeightedTable<'a> {
	/// Returns `None` for an empty profile.
	fn new(profile: &'a FrequencyProfile) -> Option<Self> {
		let mut entries: Vec<(&str, u64)> = profile.iter().collect();
		if entries.is_empty() {
			return None;
		}
		entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

		let mut grams = Vec::with_capacity(entries.len());
		let mut cumulative = Vec::with_capacity(entries.len());
		let mut total = 0u64;
		for (gram, occurrence) in entries {
			total += occurrence;
			grams.push(gram);
			cumulative.push(total);
		}

		Some(Self { grams, cumulative, total })
	}

	/// Draws one n-gram with probability `count / total`.
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a str {
		let r = rng.random_range(0..self.total);
		// First bucket whose upper bound is above r
		let index = self.cumulative.partition_point(|&upper| upper <= r);
		self.grams[index]
	}
}

/// Draws `size` n-grams from a profile, independently and with replacement.
///
/// Each draw ignores the previous one: this is not a Markov chain.
/// Returns `None` if the profile is empty.
pub fn sample_ngrams<R: Rng + ?Sized>(profile: &FrequencyProfile, size: usize, rng: &mut R) -> Option<Vec<String>> {
	let table = WeightedTable::new(profile)?;
	Some((0..size).map(|_| table.sample(rng).to_owned()).collect())
}

/// Generates a text of `size` n-grams from `author`'s profile.
///
/// Returns `Ok(None)` if the author's profile is empty.
///
/// # Errors
/// Returns `AuthorNotFound` if the corpus has no such author.
pub fn generate<R: Rng + ?Sized>(
	corpus: &Corpus,
	author: &str,
	size: usize,
	rng: &mut R,
) -> Result<Option<GeneratedText>> {
	let profile = &corpus.get(author)?.profile;
	Ok(sample_ngrams(profile, size, rng).map(|ngrams| GeneratedText { author: author.to_owned(), ngrams }))
}
