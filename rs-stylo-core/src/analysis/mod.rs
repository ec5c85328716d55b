//! Operations answered from a built `Corpus`.
//!
//! - Attribution of an unknown work (`similarity`)
//! - Weighted random text generation (`generator`)
//! - N-th most frequent n-gram lookup (`rank`)
//! - Orchestration of a whole run from an `AnalysisConfig` (`analyzer`)

/// Scores an unknown work against every author.
pub mod similarity;

/// Independent weighted draws of an author's n-grams.
pub mod generator;

/// N-gram(s) at a given distinct-frequency rank.
pub mod rank;

/// Loads the corpus and runs the requested operations.
pub mod analyzer;
