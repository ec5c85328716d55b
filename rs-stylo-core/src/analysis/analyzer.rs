use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::generator::generate;
use super::rank::nth_most_frequent;
use super::similarity::{attribute, Attribution};
use crate::config::{AnalysisConfig, GenerationRequest};
use crate::error::{Result, StyloError};
use crate::io;
use crate::model::author::Corpus;
use crate::model::profile::FrequencyProfile;

/// N-grams found by a rank query for one author.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RankResult {
	pub author: String,
	pub rank: usize,
	pub ngrams: Vec<String>,
}

/// Outcome of every operation requested for a run.
///
/// Recoverable failures (unknown author, empty profile, unreadable unknown
/// work) are collected in `failures` instead of aborting the run.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Report {
	/// Authors profiled, in enumeration order.
	pub authors: Vec<String>,
	pub ranks: Vec<RankResult>,
	pub attribution: Option<Attribution>,
	/// Paths of the generated texts written.
	pub generated: Vec<PathBuf>,
	pub failures: Vec<String>,
}

/// Runs an analysis described by an `AnalysisConfig`.
///
/// Call order of `run`:
/// 1. Build every selected author's profile
/// 2. Rank query (per author)
/// 3. Attribution of the unknown work
/// 4. Text generation (per author)
#[derive(Debug)]
pub struct Analyzer {
	config: AnalysisConfig,
}

impl Analyzer {
	/// Creates an analyzer.
	///
	/// # Errors
	/// Returns an error if the configuration holds invalid values.
	pub fn new(config: AnalysisConfig) -> Result<Self> {
		config.validate()?;
		Ok(Self { config })
	}

	pub fn config(&self) -> &AnalysisConfig {
		&self.config
	}

	/// Builds the profiles of the selected authors.
	///
	/// Works that could not be read are skipped and returned alongside.
	pub fn load(&self) -> Result<(Corpus, Vec<StyloError>)> {
		Corpus::load(&self.config.corpus_dir, &self.config.selection, self.config.text)
	}

	/// Profiles the unknown work with the corpus text options and scores it.
	///
	/// # Errors
	/// - `Io` if the work cannot be read
	/// - `EmptyProfile` if the work yields no n-grams
	pub fn attribute(&self, corpus: &Corpus, work: &Path) -> Result<Attribution> {
		let text = io::read_text(work)?;
		let unknown = FrequencyProfile::from_text(&text, corpus.options());
		attribute(&unknown, corpus)
	}

	/// Writes one generated text per author of the corpus.
	///
	/// Authors with an empty profile are skipped.
	pub fn generate_all(&self, corpus: &Corpus, request: &GenerationRequest, report: &mut Report) {
		let mut rng = match self.config.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};

		for name in corpus.author_names() {
			let outcome = generate(corpus, name, request.size, &mut rng).and_then(|text| match text {
				Some(text) => {
					let path = io::generated_text_path(&self.config.output_dir, name, &request.basename);
					text.write_to(&path)?;
					Ok(Some(path))
				}
				None => Ok(None),
			});

			match outcome {
				Ok(Some(path)) => {
					log::info!("Generated {} n-grams for {name} in {}", request.size, path.display());
					report.generated.push(path);
				}
				Ok(None) => log::warn!("Empty profile for {name}, no text generated"),
				Err(e) => {
					log::warn!("Generation failed for {name}: {e}");
					report.failures.push(format!("generation for {name}: {e}"));
				}
			}
		}
	}

	/// Loads the corpus and runs every requested operation.
	///
	/// # Errors
	/// Only a failure to list the corpus directory is returned. Skipped
	/// works and operation failures are recorded in the report.
	pub fn run(&self) -> Result<Report> {
		let (corpus, skipped) = self.load()?;
		let mut report = self.run_on(&corpus);
		let mut failures: Vec<String> = skipped.iter().map(|e| format!("loading corpus: {e}")).collect();
		failures.append(&mut report.failures);
		report.failures = failures;
		Ok(report)
	}

	/// Runs the requested operations on an already built corpus.
	pub fn run_on(&self, corpus: &Corpus) -> Report {
		let mut report = Report {
			authors: corpus.author_names().into_iter().map(str::to_owned).collect(),
			..Report::default()
		};

		if let Some(rank) = self.config.rank_query {
			for name in corpus.author_names() {
				match nth_most_frequent(corpus, name, rank) {
					Ok(grams) => report.ranks.push(RankResult {
						author: name.to_owned(),
						rank,
						ngrams: grams.into_iter().map(str::to_owned).collect(),
					}),
					Err(e) => {
						log::warn!("Rank query failed for {name}: {e}");
						report.failures.push(format!("rank query for {name}: {e}"));
					}
				}
			}
		}

		if let Some(work) = &self.config.unknown_work {
			log::info!("Attributing {}", work.display());
			match self.attribute(corpus, work) {
				Ok(attribution) => report.attribution = Some(attribution),
				Err(e) => {
					log::error!("Attribution of {} failed: {e}", work.display());
					report.failures.push(format!("attribution of {}: {e}", work.display()));
				}
			}
		}

		if let Some(request) = &self.config.generation {
			self.generate_all(corpus, request, &mut report);
		}

		report
	}
}
