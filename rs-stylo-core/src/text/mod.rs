//! Text pipeline front: raw text to word tokens to n-grams.

/// Lowercasing, punctuation stripping and short-token filtering.
pub mod tokenizer;

/// Fixed-size sliding windows over a token sequence.
pub mod ngram;
