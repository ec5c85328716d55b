/// Builds the overlapping n-grams of a token sequence.
///
/// Each n-gram is the `n` consecutive tokens starting at `i`, joined with a
/// single space, for every `i` such that `i + n <= tokens.len()`.
///
/// # Notes
/// - Produces `tokens.len() - n + 1` n-grams, or none if `n > tokens.len()`
/// - Incomplete trailing windows are dropped: no padding, no wraparound
/// - `n == 0` yields nothing; callers validate it through `TextOptions`
pub fn ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<String> {
	if n == 0 || n > tokens.len() {
		return Vec::new();
	}

	tokens
		.windows(n)
		.map(|window| {
			let mut gram = String::with_capacity(window.iter().map(|t| t.as_ref().len() + 1).sum());
			for (i, token) in window.iter().enumerate() {
				if i > 0 {
					gram.push(' ');
				}
				gram.push_str(token.as_ref());
			}
			gram
		})
		.collect()
}
