use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rs_stylo_core::config::{DEFAULT_GEN_BASENAME, DEFAULT_GEN_SIZE};
use rs_stylo_core::{AnalysisConfig, Analyzer, AuthorSelection, GenerationRequest, Report, TextOptions, PUNCTUATION};

/// Builds author n-gram profiles from a corpus directory, then attributes
/// unknown works, reports frequency ranks or generates text.
#[derive(Parser, Debug)]
#[command(name = "rs-stylo", version, about)]
struct Args {
	/// Directory holding one sub-directory of .txt works per author
	#[arg(short = 'd', long = "dir", default_value = ".")]
	corpus_dir: PathBuf,

	/// Only analyze this author's works
	#[arg(short = 'a', long = "author", conflicts_with = "all_authors")]
	author: Option<String>,

	/// Analyze every author of the directory (default)
	#[arg(short = 'A', long = "all")]
	all_authors: bool,

	/// N-gram size
	#[arg(short = 'm', long = "ngram", default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..20))]
	ngram_size: u8,

	/// Unknown work to attribute to one of the authors
	#[arg(short = 'f', long = "file")]
	unknown_work: Option<PathBuf>,

	/// Print the n-th most frequent n-gram(s) of each author
	#[arg(short = 'F', long = "frequent", value_parser = parse_rank)]
	rank: Option<usize>,

	/// Basename of the generated texts (enables generation)
	#[arg(short = 'g', long = "gen-name")]
	gen_basename: Option<String>,

	/// Number of n-grams per generated text (enables generation)
	#[arg(short = 'G', long = "gen-size")]
	gen_size: Option<usize>,

	/// Directory receiving generated texts
	#[arg(long = "output-dir", default_value = ".")]
	output_dir: PathBuf,

	/// Seed for reproducible generation
	#[arg(long)]
	seed: Option<u64>,

	/// Keep punctuation attached to words instead of stripping it
	#[arg(long)]
	keep_punctuation: bool,

	/// Print the punctuation characters that are stripped and exit
	#[arg(long)]
	print_punctuation: bool,

	/// Read the whole configuration from a JSON file (other options are ignored)
	#[arg(long)]
	config: Option<PathBuf>,

	/// Print the report as JSON
	#[arg(long)]
	json: bool,

	/// Log the resolved configuration and progress
	#[arg(short = 'v', long)]
	verbose: bool,
}

impl Args {
	/// Resolves the command line into an analysis configuration.
	fn analysis_config(&self) -> Result<AnalysisConfig> {
		if let Some(path) = &self.config {
			let raw = fs::read_to_string(path).with_context(|| format!("Cannot read config {}", path.display()))?;
			return serde_json::from_str(&raw).with_context(|| format!("Invalid config {}", path.display()));
		}

		let selection = match &self.author {
			Some(name) => AuthorSelection::Single(name.clone()),
			None => AuthorSelection::All,
		};

		let generation = if self.gen_basename.is_some() || self.gen_size.is_some() {
			Some(GenerationRequest {
				basename: self.gen_basename.clone().unwrap_or_else(|| DEFAULT_GEN_BASENAME.to_owned()),
				size: self.gen_size.unwrap_or(DEFAULT_GEN_SIZE),
			})
		} else {
			None
		};

		Ok(AnalysisConfig {
			corpus_dir: self.corpus_dir.clone(),
			selection,
			text: TextOptions::new(usize::from(self.ngram_size), !self.keep_punctuation)?,
			unknown_work: self.unknown_work.clone(),
			rank_query: self.rank,
			generation,
			output_dir: self.output_dir.clone(),
			seed: self.seed,
		})
	}
}

/// Parses a rank, which must be at least 1.
fn parse_rank(raw: &str) -> std::result::Result<usize, String> {
	match raw.parse::<usize>() {
		Ok(0) => Err("rank must be >= 1".to_owned()),
		Ok(n) => Ok(n),
		Err(e) => Err(e.to_string()),
	}
}

fn print_report(report: &Report) {
	for rank in &report.ranks {
		println!("{} #{}: {:?}", rank.author, rank.rank, rank.ngrams);
	}

	if let Some(attribution) = &report.attribution {
		for (author, score) in attribution.ranked() {
			println!("{author}: {score:.4}");
		}
	}

	for path in &report.generated {
		println!("Generated {}", path.display());
	}

	for failure in &report.failures {
		eprintln!("Failed: {failure}");
	}
}

fn main() -> Result<()> {
	let args = Args::parse();

	let default_filter = if args.verbose { "info" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

	if args.print_punctuation {
		let listed: Vec<String> = PUNCTUATION.iter().map(|c| format!("{c:?}")).collect();
		println!("Punctuation stripped: {}", listed.join(" "));
		return Ok(());
	}

	let config = args.analysis_config()?;
	log::info!("Configuration: {config:?}");

	let analyzer = Analyzer::new(config).context("Invalid configuration")?;
	let report = analyzer.run().context("Failed to build author profiles")?;

	if args.json {
		println!("{}", serde_json::to_string_pretty(&report)?);
	} else {
		print_report(&report);
	}

	if !report.failures.is_empty() {
		std::process::exit(1);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config(args: &[&str]) -> AnalysisConfig {
		let mut argv = vec!["rs-stylo"];
		argv.extend_from_slice(args);
		Args::try_parse_from(argv).unwrap().analysis_config().unwrap()
	}

	#[test]
	fn test_defaults() {
		let config = config(&[]);
		assert_eq!(config, AnalysisConfig::new("."));
	}

	#[test]
	fn test_original_short_flags() {
		let config = config(&["-d", "textes", "-a", "zola", "-m", "2", "-f", "x.txt", "-F", "3", "-G", "50"]);
		assert_eq!(config.corpus_dir, PathBuf::from("textes"));
		assert_eq!(config.selection, AuthorSelection::Single("zola".to_owned()));
		assert_eq!(config.text.ngram_size(), 2);
		assert!(config.text.strip_punctuation());
		assert_eq!(config.unknown_work, Some(PathBuf::from("x.txt")));
		assert_eq!(config.rank_query, Some(3));
		assert_eq!(config.generation, Some(GenerationRequest { basename: "Gen_text".to_owned(), size: 50 }));
	}

	#[cfg(target_pointer_width = "64")]
	#[test]
	fn test_large_rank_kept_intact() {
		let config = config(&["-F", "4294967296"]);
		assert_eq!(config.rank_query, Some(4_294_967_296));
	}

	#[test]
	fn test_rank_above_usize_rejected() {
		assert!(Args::try_parse_from(["rs-stylo", "-F", "99999999999999999999999"]).is_err());
	}

	#[test]
	fn test_out_of_range_values_rejected() {
		assert!(Args::try_parse_from(["rs-stylo", "-m", "0"]).is_err());
		assert!(Args::try_parse_from(["rs-stylo", "-m", "20"]).is_err());
		assert!(Args::try_parse_from(["rs-stylo", "-F", "0"]).is_err());
		assert!(Args::try_parse_from(["rs-stylo", "-F", "-2"]).is_err());
		assert!(Args::try_parse_from(["rs-stylo", "-a", "zola", "-A"]).is_err());
	}
}
