use std::collections::BTreeSet;

use crate::error::{Result, StyloError};
use crate::model::author::Corpus;
use crate::model::profile::FrequencyProfile;

/// Returns every n-gram whose count is the `n`-th highest distinct count.
///
/// - `n = 1` selects the maximum count
/// - A rank beyond the number of distinct counts clamps to the minimum
/// - Ties are never broken: all keys sharing the count are returned,
///   sorted alphabetically
/// - An empty profile yields no keys
///
/// # Errors
/// Returns `InvalidRank` if `n == 0`.
pub fn nth_in_profile(profile: &FrequencyProfile, n: usize) -> Result<Vec<&str>> {
	if n == 0 {
		return Err(StyloError::InvalidRank(n));
	}

	let distinct: BTreeSet<u64> = profile.iter().map(|(_, count)| count).collect();
	let index = distinct.len().saturating_sub(n);
	let Some(&selected) = distinct.iter().nth(index) else {
		return Ok(Vec::new());
	};

	let mut grams: Vec<&str> = profile
		.iter()
		.filter(|(_, count)| *count == selected)
		.map(|(gram, _)| gram)
		.collect();
	grams.sort_unstable();
	Ok(grams)
}

/// Rank query against an author of the corpus. See [`nth_in_profile`].
///
/// # Errors
/// - `AuthorNotFound` if the corpus has no such author
/// - `InvalidRank` if `n == 0`
pub fn nth_most_frequent<'a>(corpus: &'a Corpus, author: &str, n: usize) -> Result<Vec<&'a str>> {
	nth_in_profile(&corpus.get(author)?.profile, n)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::TextOptions;

	fn profile(pairs: &[(&str, u64)]) -> FrequencyProfile {
		let mut p = FrequencyProfile::new();
		for (gram, count) in pairs {
			p.add(gram, *count);
		}
		p
	}

	#[test]
	fn test_first_rank_returns_all_ties() {
		let p = profile(&[("a", 3), ("b", 3), ("c", 1)]);
		assert_eq!(nth_in_profile(&p, 1).unwrap(), vec!["a", "b"]);
	}

	#[test]
	fn test_ranks_walk_distinct_counts() {
		let p = profile(&[("a", 5), ("b", 3), ("c", 3), ("d", 1)]);
		assert_eq!(nth_in_profile(&p, 2).unwrap(), vec!["b", "c"]);
		assert_eq!(nth_in_profile(&p, 3).unwrap(), vec!["d"]);
	}

	#[test]
	fn test_rank_beyond_distinct_counts_clamps_to_minimum() {
		let p = profile(&[("a", 3), ("b", 3), ("c", 1)]);
		assert_eq!(nth_in_profile(&p, 5).unwrap(), vec!["c"]);
	}

	#[test]
	fn test_empty_profile_and_zero_rank() {
		assert!(nth_in_profile(&FrequencyProfile::new(), 1).unwrap().is_empty());
		assert!(matches!(nth_in_profile(&profile(&[("a", 1)]), 0), Err(StyloError::InvalidRank(0))));
	}

	#[test]
	fn test_author_lookup() {
		let corpus = Corpus::from_texts([("zola", vec!["mine mine charbon"])], TextOptions::default());
		assert_eq!(nth_most_frequent(&corpus, "zola", 1).unwrap(), vec!["mine"]);
		assert!(matches!(nth_most_frequent(&corpus, "hugo", 1), Err(StyloError::AuthorNotFound(_))));
	}
}
