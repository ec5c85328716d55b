use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StyloError};

/// Default basename of generated texts.
pub const DEFAULT_GEN_BASENAME: &str = "Gen_text";

/// Default number of n-grams drawn per generated text.
pub const DEFAULT_GEN_SIZE: usize = 1000;

/// How raw text is turned into n-grams.
///
/// Shared by every profile of a run: profiles built with different
/// options are not comparable.
///
/// # Invariants
/// - `ngram_size >= 1`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextOptions {
	ngram_size: usize,
	strip_punctuation: bool,
}

impl TextOptions {
	/// Creates text options.
	///
	/// # Errors
	/// Returns `InvalidNgramSize` if `ngram_size == 0`.
	pub fn new(ngram_size: usize, strip_punctuation: bool) -> Result<Self> {
		if ngram_size == 0 {
			return Err(StyloError::InvalidNgramSize(ngram_size));
		}
		Ok(Self { ngram_size, strip_punctuation })
	}

	pub fn ngram_size(&self) -> usize {
		self.ngram_size
	}

	pub fn strip_punctuation(&self) -> bool {
		self.strip_punctuation
	}
}

impl Default for TextOptions {
	/// Unigrams with punctuation stripped.
	fn default() -> Self {
		Self { ngram_size: 1, strip_punctuation: true }
	}
}

/// Which authors of the corpus directory are profiled.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub enum AuthorSelection {
	/// Every sub-directory of the corpus directory.
	#[default]
	All,
	/// Only the named author's sub-directory.
	Single(String),
}

/// Parameters of a text generation request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
	/// Generated files are named `<author>_<basename>.txt`.
	pub basename: String,
	/// Number of n-grams drawn.
	pub size: usize,
}

impl Default for GenerationRequest {
	fn default() -> Self {
		Self { basename: DEFAULT_GEN_BASENAME.to_owned(), size: DEFAULT_GEN_SIZE }
	}
}

/// Complete, immutable description of one analysis run.
///
/// Each optional field enables the corresponding operation:
/// - `unknown_work` triggers attribution
/// - `rank_query` triggers the n-th most frequent n-gram lookup
/// - `generation` triggers text generation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalysisConfig {
	/// Directory containing one sub-directory per author.
	pub corpus_dir: PathBuf,
	#[serde(default)]
	pub selection: AuthorSelection,
	#[serde(default)]
	pub text: TextOptions,
	#[serde(default)]
	pub unknown_work: Option<PathBuf>,
	#[serde(default)]
	pub rank_query: Option<usize>,
	#[serde(default)]
	pub generation: Option<GenerationRequest>,
	/// Directory receiving generated texts.
	#[serde(default = "default_output_dir")]
	pub output_dir: PathBuf,
	/// Seed of the generation RNG. `None` uses entropy.
	#[serde(default)]
	pub seed: Option<u64>,
}

fn default_output_dir() -> PathBuf {
	PathBuf::from(".")
}

impl AnalysisConfig {
	/// Creates a configuration profiling every author of `corpus_dir`
	/// with default text options and no operation enabled.
	pub fn new(corpus_dir: impl Into<PathBuf>) -> Self {
		Self {
			corpus_dir: corpus_dir.into(),
			selection: AuthorSelection::All,
			text: TextOptions::default(),
			unknown_work: None,
			rank_query: None,
			generation: None,
			output_dir: default_output_dir(),
			seed: None,
		}
	}

	/// Checks the values serde cannot enforce on its own.
	///
	/// # Errors
	/// - `InvalidNgramSize` if the n-gram size is zero
	/// - `InvalidRank` if a rank query of zero is requested
	pub fn validate(&self) -> Result<()> {
		TextOptions::new(self.text.ngram_size, self.text.strip_punctuation)?;
		if let Some(0) = self.rank_query {
			return Err(StyloError::InvalidRank(0));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_zero_ngram_size_rejected() {
		assert!(matches!(TextOptions::new(0, true), Err(StyloError::InvalidNgramSize(0))));
		assert_eq!(TextOptions::new(3, false).unwrap().ngram_size(), 3);
	}

	#[test]
	fn test_defaults_match_original_cli() {
		let options = TextOptions::default();
		assert_eq!(options.ngram_size(), 1);
		assert!(options.strip_punctuation());

		let request = GenerationRequest::default();
		assert_eq!(request.basename, "Gen_text");
		assert_eq!(request.size, 1000);
	}

	#[test]
	fn test_config_from_json_fills_defaults() {
		let config: AnalysisConfig = serde_json::from_str(r#"{ "corpus_dir": "texts" }"#).unwrap();
		assert_eq!(config, AnalysisConfig::new("texts"));
	}

	#[test]
	fn test_validate_catches_deserialized_zeroes() {
		let config: AnalysisConfig = serde_json::from_str(
			r#"{ "corpus_dir": "texts", "text": { "ngram_size": 0, "strip_punctuation": true } }"#,
		)
		.unwrap();
		assert!(matches!(config.validate(), Err(StyloError::InvalidNgramSize(0))));

		let mut config = AnalysisConfig::new("texts");
		config.rank_query = Some(0);
		assert!(matches!(config.validate(), Err(StyloError::InvalidRank(0))));
	}
}
