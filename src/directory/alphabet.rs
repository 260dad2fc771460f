/// Marathi letters in traditional order: vowels, the five varga consonant
/// groups, the semivowels, the sibilants with ह and ळ, then the conjuncts.
pub const MARATHI_ALPHABET: [&str; 48] = [
	"अ", "आ", "इ", "ई", "उ", "ऊ", "ए", "ऐ", "ओ", "औ", "अं", "अः", //
	"क", "ख", "ग", "घ", "ङ", //
	"च", "छ", "ज", "झ", "ञ", //
	"ट", "ठ", "ड", "ढ", "ण", //
	"त", "थ", "द", "ध", "न", //
	"प", "फ", "ब", "भ", "म", //
	"य", "र", "ल", "व", //
	"श", "ष", "स", "ह", "ळ", //
	"क्ष", "ज्ञ",
];

/// Position of `letter` in [`MARATHI_ALPHABET`].
#[must_use]
pub fn letter_position(letter: &str) -> Option<usize> {
	MARATHI_ALPHABET.iter().position(|candidate| *candidate == letter)
}

#[must_use]
pub fn is_letter(letter: &str) -> bool {
	letter_position(letter).is_some()
}

/// Position of a letter written as a single code point.
pub(crate) fn single_char_position(ch: char) -> Option<usize> {
	MARATHI_ALPHABET.iter().position(|candidate| {
		let mut chars = candidate.chars();
		chars.next() == Some(ch) && chars.next().is_none()
	})
}
