use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building profiles or answering queries.
///
/// Every variant except `Io` on a required file is recoverable: the
/// analyzer logs it and moves on to the next author or operation.
#[derive(Error, Debug)]
pub enum StyloError {
	/// The profile has no n-grams, so its L2 norm is zero.
	#[error("cannot normalize an empty profile")]
	EmptyProfile,

	/// No profile was built for this author.
	#[error("author not found: {0}")]
	AuthorNotFound(String),

	#[error("n-gram size must be >= 1, got {0}")]
	InvalidNgramSize(usize),

	#[error("rank must be >= 1, got {0}")]
	InvalidRank(usize),

	#[error("expected a directory, got: {}", .0.display())]
	NotADirectory(PathBuf),

	#[error("I/O error on {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl StyloError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}
}

pub type Result<T> = std::result::Result<T, StyloError>;
