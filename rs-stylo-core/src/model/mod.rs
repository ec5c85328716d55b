//! Profile types consumed by the analysis layer.
//!
//! - `FrequencyProfile`: raw n-gram occurrence counts (one work or one author)
//! - `NormalizedVector`: a unit-length copy of a profile
//! - `AuthorProfile` / `Corpus`: per-author aggregation of every work

/// N-gram occurrence counting and sum-merging.
pub mod profile;

/// L2 normalization into unit vectors.
///
/// Normalization is pure: the source profile is never modified.
pub mod vector;

/// Author profiles and the ordered corpus holding them.
pub mod author;
