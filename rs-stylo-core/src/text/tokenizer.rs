/// Characters replaced by a space when punctuation stripping is enabled.
///
/// Common Latin punctuation plus the French quotation marks, typographic
/// quotes and dash variants found in the corpus. U+00A0 is listed even
/// though whitespace splitting already treats it as a separator.
pub const PUNCTUATION: &[char] = &[
	'!', ',', '.', '-', ':', ';', '?', '«', '»', '(', ')', '[', ']', '{', '}', '…', '/', '\'',
	'*', '<', '>', '&', '~', '–', '„', '“', '‚', '‘', '”', '’', '—', '_', '"', '\u{a0}',
];

/// Tokens of this many characters or fewer are dropped.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Returns `true` if `c` belongs to [`PUNCTUATION`].
pub fn is_punctuation(c: char) -> bool {
	PUNCTUATION.contains(&c)
}

/// Splits raw text into lowercase word tokens.
///
/// - Lowercases the text and splits on whitespace runs
/// - If `strip_punctuation` is set, every punctuation character becomes a
///   space and the unit is split again, so `"chat,chien"` yields two tokens
/// - Drops tokens of 2 characters or fewer (counted in `char`s, not bytes)
pub fn tokenize(text: &str, strip_punctuation: bool) -> Vec<String> {
	let lowered = text.to_lowercase();
	let units = lowered.split_whitespace();

	if strip_punctuation {
		units
			.flat_map(|unit| unit.split(is_punctuation))
			.filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
			.map(str::to_owned)
			.collect()
	} else {
		units
			.filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
			.map(str::to_owned)
			.collect()
	}
}
