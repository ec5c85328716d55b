use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::profile::FrequencyProfile;
use crate::error::{Result, StyloError};

/// A frequency profile rescaled to unit L2 norm.
///
/// # Invariants
/// - The sum of squared values is 1 (within floating-point tolerance)
/// - Keys are exactly those of the source profile
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NormalizedVector {
	values: HashMap<String, f64>,
}

impl NormalizedVector {
	/// Component for `gram`, zero if the n-gram is not in the vector.
	pub fn get(&self, gram: &str) -> f64 {
		self.values.get(gram).copied().unwrap_or(0.0)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Iterates over `(n-gram, value)` pairs in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
		self.values.iter().map(|(gram, value)| (gram.as_str(), *value))
	}

	/// Dot product with `other`, over this vector's keys only.
	pub fn dot(&self, other: &Self) -> f64 {
		self.iter().map(|(gram, value)| value * other.get(gram)).sum()
	}
}

/// Things that can produce a unit-length vector of themselves.
pub trait Normalize {
	/// Returns the L2-normalized form without modifying `self`.
	///
	/// # Errors
	/// Returns `EmptyProfile` if the norm is zero.
	fn normalized(&self) -> Result<NormalizedVector>;
}

impl Normalize for FrequencyProfile {
	fn normalized(&self) -> Result<NormalizedVector> {
		normalize(self)
	}
}

impl Normalize for NormalizedVector {
	/// Already normalized: returns an identical copy, never rescales again.
	fn normalized(&self) -> Result<NormalizedVector> {
		Ok(self.clone())
	}
}

/// Divides every count by `sqrt(sum(count^2))`.
///
/// # Errors
/// Returns `EmptyProfile` for an empty profile instead of dividing by zero.
pub fn normalize(profile: &FrequencyProfile) -> Result<NormalizedVector> {
	let norm = profile
		.iter()
		.map(|(_, count)| (count as f64).powi(2))
		.sum::<f64>()
		.sqrt();
	if norm == 0.0 {
		return Err(StyloError::EmptyProfile);
	}

	let values = profile
		.iter()
		.map(|(gram, count)| (gram.to_owned(), count as f64 / norm))
		.collect();
	Ok(NormalizedVector { values })
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sum_of_squares(vector: &NormalizedVector) -> f64 {
		vector.iter().map(|(_, v)| v * v).sum()
	}

	#[test]
	fn test_normalize_example() {
		let mut profile = FrequencyProfile::new();
		profile.add("petit", 2);
		profile.add("chat", 1);

		let vector = normalize(&profile).unwrap();
		let root5 = 5f64.sqrt();
		assert!((vector.get("petit") - 2.0 / root5).abs() < 1e-12);
		assert!((vector.get("chat") - 1.0 / root5).abs() < 1e-12);
		assert!((sum_of_squares(&vector) - 1.0).abs() < 1e-9);
	}

	#[test]
	fn test_unit_norm_on_larger_profile() {
		let profile: FrequencyProfile = (0..500).map(|i| format!("mot{}", i % 37)).collect();
		let vector = profile.normalized().unwrap();
		assert_eq!(vector.len(), 37);
		assert!((sum_of_squares(&vector) - 1.0).abs() < 1e-9);
	}

	#[test]
	fn test_empty_profile_fails() {
		assert!(matches!(normalize(&FrequencyProfile::new()), Err(StyloError::EmptyProfile)));
	}

	#[test]
	fn test_normalize_leaves_profile_untouched() {
		let profile: FrequencyProfile = ["aaa", "aaa", "bbb"].into_iter().collect();
		let before = profile.clone();
		let _ = profile.normalized().unwrap();
		let _ = profile.normalized().unwrap();
		assert_eq!(profile, before);
	}

	#[test]
	fn test_renormalizing_is_noop() {
		let profile: FrequencyProfile = ["aaa", "aaa", "bbb"].into_iter().collect();
		let once = profile.normalized().unwrap();
		let twice = once.normalized().unwrap();
		assert_eq!(once, twice);
	}

	#[test]
	fn test_dot_is_restricted_to_own_keys() {
		let a: FrequencyProfile = ["aaa"].into_iter().collect();
		let b: FrequencyProfile = ["aaa", "bbb"].into_iter().collect();
		let a = a.normalized().unwrap();
		let b = b.normalized().unwrap();
		assert!((a.dot(&b) - 1.0 / 2f64.sqrt()).abs() < 1e-12);
	}
}
