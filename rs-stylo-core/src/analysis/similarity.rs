use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StyloError};
use crate::model::author::Corpus;
use crate::model::profile::FrequencyProfile;
use crate::model::vector::{Normalize, NormalizedVector};

/// Number of decimal digits kept in a score.
pub const SCORE_DECIMALS: i32 = 4;

/// Scores of an unknown work against each author of a corpus.
///
/// `scores` keeps the corpus enumeration order; use [`Attribution::ranked`]
/// to get the most similar author first.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Attribution {
	pub scores: Vec<(String, f64)>,
}

impl Attribution {
	/// Scores sorted by descending similarity. Ties keep enumeration order.
	pub fn ranked(&self) -> Vec<(String, f64)> {
		let mut ranked = self.scores.clone();
		ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
		ranked
	}

	/// The most similar author, if any author was scored.
	pub fn best(&self) -> Option<(&str, f64)> {
		self.scores
			.iter()
			.fold(None, |best: Option<&(String, f64)>, current| match best {
				Some(b) if b.1 >= current.1 => Some(b),
				_ => Some(current),
			})
			.map(|(name, score)| (name.as_str(), *score))
	}
}

/// Dot product of the unknown vector with the author vector restricted to
/// the unknown work's vocabulary.
///
/// N-grams only the author uses are never looked at: the author's value is
/// taken for each key of `unknown`, or 0 when the author lacks it.
pub fn unknown_vocabulary_similarity(unknown: &NormalizedVector, author: &NormalizedVector) -> f64 {
	unknown.dot(author)
}

/// Cosine similarity over the union of both vocabularies.
///
/// Keys missing on one side count as 0. Vectors are rescaled by their own
/// norms, so inputs need not be unit length. Returns 0 if either is empty.
pub fn cosine_similarity(a: &NormalizedVector, b: &NormalizedVector) -> f64 {
	let dot: f64 = a.iter().map(|(gram, value)| value * b.get(gram)).sum();
	let norm_a = a.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
	let norm_b = b.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
	if norm_a == 0.0 || norm_b == 0.0 {
		return 0.0;
	}
	dot / (norm_a * norm_b)
}

/// Rounds a score to [`SCORE_DECIMALS`] digits.
pub fn round_score(score: f64) -> f64 {
	let scale = 10f64.powi(SCORE_DECIMALS);
	(score * scale).round() / scale
}

/// Scores `unknown` against every author with [`unknown_vocabulary_similarity`].
///
/// # Errors
/// Returns `EmptyProfile` if the unknown work has no n-grams.
pub fn attribute(unknown: &FrequencyProfile, corpus: &Corpus) -> Result<Attribution> {
	attribute_with(unknown, corpus, unknown_vocabulary_similarity)
}

/// Scores `unknown` against every author with a custom measure.
///
/// # Notes
/// - Every vector is normalized into a fresh copy: author profiles keep
///   their raw counts, so repeated calls give identical results
/// - An author with an empty profile scores 0
/// - Scores are rounded to [`SCORE_DECIMALS`] digits
///
/// # Errors
/// Returns `EmptyProfile` if the unknown work has no n-grams.
pub fn attribute_with<F>(unknown: &FrequencyProfile, corpus: &Corpus, measure: F) -> Result<Attribution>
where
	F: Fn(&NormalizedVector, &NormalizedVector) -> f64,
{
	let unknown = unknown.normalized()?;

	let mut scores = Vec::with_capacity(corpus.len());
	for author in corpus.authors() {
		let score = match author.profile.normalized() {
			Ok(vector) => round_score(measure(&unknown, &vector)),
			Err(StyloError::EmptyProfile) => {
				log::warn!("Author {} has an empty profile, scoring 0", author.name);
				0.0
			}
			Err(e) => return Err(e),
		};
		scores.push((author.name.clone(), score));
	}

	Ok(Attribution { scores })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::TextOptions;

	fn corpus() -> Corpus {
		Corpus::from_texts(
			[
				("marin", vec!["navire vague tempête navire port voile", "vague marée navire"]),
				("paysan", vec!["champ blé récolte charrue champ", "blé moulin champ"]),
			],
			TextOptions::default(),
		)
	}

	#[test]
	fn test_scores_follow_enumeration_order() {
		let unknown = FrequencyProfile::from_text("champ blé navire", &TextOptions::default());
		let attribution = attribute(&unknown, &corpus()).unwrap();
		let names: Vec<&str> = attribution.scores.iter().map(|(n, _)| n.as_str()).collect();
		assert_eq!(names, vec!["marin", "paysan"]);
	}

	#[test]
	fn test_closest_author_wins() {
		let unknown = FrequencyProfile::from_text("navire vague port", &TextOptions::default());
		let attribution = attribute(&unknown, &corpus()).unwrap();
		assert_eq!(attribution.best().unwrap().0, "marin");
		assert_eq!(attribution.ranked()[0].0, "marin");
		assert_eq!(attribution.scores[1].1, 0.0);
	}

	#[test]
	fn test_score_value_and_rounding() {
		// unknown {aaa:1} vs author {aaa:1, bbb:1} -> 1/sqrt(2)
		let corpus = Corpus::from_texts([("x", vec!["aaa bbb"])], TextOptions::default());
		let unknown = FrequencyProfile::from_text("aaa", &TextOptions::default());
		let attribution = attribute(&unknown, &corpus).unwrap();
		assert_eq!(attribution.scores[0].1, 0.7071);
	}

	#[test]
	fn test_repeated_attribution_is_stable() {
		let corpus = corpus();
		let before = corpus.clone();
		let unknown = FrequencyProfile::from_text("blé champ vague", &TextOptions::default());
		let first = attribute(&unknown, &corpus).unwrap();
		let second = attribute(&unknown, &corpus).unwrap();
		assert_eq!(first, second);
		assert_eq!(corpus, before);
	}

	#[test]
	fn test_empty_unknown_work_fails() {
		let unknown = FrequencyProfile::from_text("le la de", &TextOptions::default());
		assert!(matches!(attribute(&unknown, &corpus()), Err(StyloError::EmptyProfile)));
	}

	#[test]
	fn test_empty_author_scores_zero() {
		let corpus = Corpus::from_texts(
			[("vide", Vec::<&str>::new()), ("plein", vec!["aaa"])],
			TextOptions::default(),
		);
		let unknown = FrequencyProfile::from_text("aaa", &TextOptions::default());
		let attribution = attribute(&unknown, &corpus).unwrap();
		assert_eq!(attribution.scores, vec![("vide".to_owned(), 0.0), ("plein".to_owned(), 1.0)]);
	}

	#[test]
	fn test_full_vocabulary_cosine_as_measure() {
		let unknown = FrequencyProfile::from_text("navire vague champ", &TextOptions::default());
		let restricted = attribute(&unknown, &corpus()).unwrap();
		let cosine = attribute_with(&unknown, &corpus(), cosine_similarity).unwrap();
		for ((name_r, score_r), (name_c, score_c)) in restricted.scores.iter().zip(&cosine.scores) {
			assert_eq!(name_r, name_c);
			assert!((score_r - score_c).abs() <= 1e-4);
			assert!(*score_c > 0.0);
		}
	}

	#[test]
	fn test_cosine_is_symmetric() {
		let a = FrequencyProfile::from_text("aaa aaa bbb", &TextOptions::default()).normalized().unwrap();
		let b = FrequencyProfile::from_text("bbb ccc", &TextOptions::default()).normalized().unwrap();
		let ab = cosine_similarity(&a, &b);
		assert!((ab - cosine_similarity(&b, &a)).abs() < 1e-12);
		assert!((ab - 1.0 / (5f64.sqrt() * 2f64.sqrt())).abs() < 1e-12);
		assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-12);
	}

	#[test]
	fn test_custom_measure() {
		let unknown = FrequencyProfile::from_text("navire", &TextOptions::default());
		let attribution = attribute_with(&unknown, &corpus(), |_, _| 0.123456).unwrap();
		assert!(attribution.scores.iter().all(|(_, s)| *s == 0.1235));
	}
}
