use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::TextOptions;
use crate::text::ngram::ngrams;
use crate::text::tokenizer::tokenize;

/// Occurrence counts of n-grams, for one work or for all works of an author.
///
/// ## Responsibilities
/// - Count n-grams in a single left-to-right pass
/// - Sum-merge with another profile (associative and commutative)
///
/// ## Invariants
/// - Every stored count is strictly positive
/// - All profiles compared in one run share the same n-gram size
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyProfile {
	/// Example: { "petit chat" => 42, "chat noir" => 3 }
	counts: HashMap<String, u64>,
}

impl FrequencyProfile {
	/// Creates an empty profile.
	pub fn new() -> Self {
		Self::default()
	}

	/// Counts every n-gram of the sequence.
	pub fn count<I, S>(grams: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut profile = Self::new();
		for gram in grams {
			profile.add(gram.as_ref(), 1);
		}
		profile
	}

	/// Tokenizes `text`, extracts its n-grams and counts them.
	pub fn from_text(text: &str, options: &TextOptions) -> Self {
		let tokens = tokenize(text, options.strip_punctuation());
		Self::count(ngrams(&tokens, options.ngram_size()))
	}

	/// Records `occurrence` more occurrences of `gram`.
	///
	/// The key is only allocated the first time the n-gram is seen.
	/// Adding zero is ignored to keep counts strictly positive.
	pub fn add(&mut self, gram: &str, occurrence: u64) {
		if occurrence == 0 {
			return;
		}
		if let Some(count) = self.counts.get_mut(gram) {
			*count += occurrence;
		} else {
			self.counts.insert(gram.to_owned(), occurrence);
		}
	}

	/// Returns a new profile where each count is the sum of both inputs.
	pub fn merge(a: &Self, b: &Self) -> Self {
		let mut merged = a.clone();
		merged.absorb(b);
		merged
	}

	/// Merges another profile into this one, summing counts.
	///
	/// Used to aggregate the works of an author into a single profile.
	pub fn absorb(&mut self, other: &Self) {
		self.counts.reserve(other.counts.len());
		for (gram, occurrence) in &other.counts {
			self.add(gram, *occurrence);
		}
	}

	/// Count of `gram`, zero if absent.
	pub fn get(&self, gram: &str) -> u64 {
		self.counts.get(gram).copied().unwrap_or(0)
	}

	/// Number of distinct n-grams.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Sum of all counts.
	pub fn total(&self) -> u64 {
		self.counts.values().sum()
	}

	/// Iterates over `(n-gram, count)` pairs in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
		self.counts.iter().map(|(gram, count)| (gram.as_str(), *count))
	}
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyProfile {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self::count(iter)
	}
}
