//! N-gram-based authorship profiling library.
//!
//! This crate builds per-author word n-gram frequency profiles from a corpus
//! of plain-text works and uses them to:
//! - Attribute an unknown work to the most similar known author
//! - Generate synthetic text by weighted sampling of an author's n-grams
//! - Report the n-gram(s) at a given frequency rank for an author
//!
//! The text pipeline is `tokenize` -> `ngrams` -> `FrequencyProfile`,
//! aggregated per author into a `Corpus`. The `analysis` module consumes
//! the corpus; `Analyzer` ties the whole run together from an
//! `AnalysisConfig`.

/// Tokenization and n-gram windowing of raw text.
pub mod text;

/// Frequency profiles, normalized vectors and per-author aggregation.
pub mod model;

/// Attribution, generation, rank queries and run orchestration.
pub mod analysis;

/// Immutable run configuration.
pub mod config;

/// Error type shared by the whole crate.
pub mod error;

/// Corpus discovery and file helpers.
pub mod io;

pub use analysis::analyzer::{Analyzer, RankResult, Report};
pub use analysis::generator::{generate, GeneratedText};
pub use analysis::rank::nth_most_frequent;
pub use analysis::similarity::{
	attribute, attribute_with, cosine_similarity, unknown_vocabulary_similarity, Attribution,
};
pub use config::{AnalysisConfig, AuthorSelection, GenerationRequest, TextOptions};
pub use error::{Result, StyloError};
pub use model::author::{AuthorProfile, Corpus};
pub use model::profile::FrequencyProfile;
pub use model::vector::{normalize, Normalize, NormalizedVector};
pub use text::ngram::ngrams;
pub use text::tokenizer::{tokenize, PUNCTUATION};
