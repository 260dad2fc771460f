//! Marathi collation for sorting names.
//!
//! Plain code point order misplaces vowel signs and conjuncts, so names are
//! mapped to a sequence of weights instead. Each consonant carries a vowel
//! slot (inherent vowel, vowel sign, anusvara, visarga or virama) so that
//! क < का < कि < ... < कौ < कं < कः < क्र, mirroring the order of the
//! independent vowels. क्ष and ज्ञ sort as letters after ळ.

use std::cmp::Ordering;

use super::alphabet::{MARATHI_ALPHABET, single_char_position};

const SEPARATOR: u32 = 1;
const DIGIT_BASE: u32 = 10;
const INHERENT_VOWEL: u32 = 30;
const SLOT_ANUSVARA: u32 = 44;
const SLOT_VISARGA: u32 = 45;
const SLOT_VIRAMA: u32 = 46;
const TRAILING_ANUSVARA: u32 = 50;
const TRAILING_VISARGA: u32 = 51;
const LETTER_BASE: u32 = 100;
const LETTER_STRIDE: u32 = 4;
const OTHER_BASE: u32 = 1_000;

const VIRAMA: char = '\u{094D}';
const NUKTA: char = '\u{093C}';
const ANUSVARA: char = '\u{0902}';
const CANDRABINDU: char = '\u{0901}';
const VISARGA: char = '\u{0903}';
const ZWJ: char = '\u{200D}';
const ZWNJ: char = '\u{200C}';

/// Vowel signs in the order of their independent vowels.
const VOWEL_SIGNS: [char; 13] = [
	'ा', 'ि', 'ी', 'ु', 'ू', 'ृ', 'ॄ', 'ॅ', 'े', 'ै', 'ॉ', 'ो', 'ौ',
];

/// Independent vowels missing from the alphabet, placed right after a
/// related letter.
const EXTRA_VOWELS: [(char, &str, u32); 5] = [
	('ऋ', "ऊ", 1),
	('ॠ', "ऊ", 2),
	('ऍ', "ए", 1),
	('ॲ', "ए", 2),
	('ऑ', "ओ", 1),
];

/// Precomposed nukta consonants and the letter they sort with.
const NUKTA_FORMS: [(char, char); 11] = [
	('\u{0958}', 'क'),
	('\u{0959}', 'ख'),
	('\u{095A}', 'ग'),
	('\u{095B}', 'ज'),
	('\u{095C}', 'ड'),
	('\u{095D}', 'ढ'),
	('\u{095E}', 'फ'),
	('\u{095F}', 'य'),
	('ऩ', 'न'),
	('ऱ', 'र'),
	('ऴ', 'ळ'),
];

/// Compare two names in Marathi dictionary order.
#[must_use]
pub fn compare(left: &str, right: &str) -> Ordering {
	collation_key(left).cmp(&collation_key(right))
}

/// Weight sequence used for ordering; comparing keys lexicographically
/// yields the collation order.
#[must_use]
pub fn collation_key(text: &str) -> Vec<u32> {
	let chars: Vec<char> = text
		.trim()
		.chars()
		.filter(|ch| !matches!(*ch, ZWJ | ZWNJ | NUKTA))
		.collect();
	let mut key = Vec::with_capacity(chars.len() * 2);
	let mut index = 0;

	while index < chars.len() {
		let ch = base_form(chars[index]);

		if let Some(weight) = conjunct_weight(&chars[index..]) {
			key.push(weight);
			index = push_vowel_slot(&chars, index + 3, &mut key);
			continue;
		}

		if ch == 'अ' && let Some(next) = chars.get(index + 1) {
			let letter = match *next {
				ANUSVARA | CANDRABINDU => Some("अं"),
				VISARGA => Some("अः"),
				_ => None,
			};
			if let Some(letter) = letter {
				key.push(letter_weight(letter));
				index += 2;
				continue;
			}
		}

		if let Some(position) = single_char_position(ch) {
			key.push(position_weight(position));
			index = if is_consonant(ch) {
				push_vowel_slot(&chars, index + 1, &mut key)
			} else {
				push_trailing_marks(&chars, index + 1, &mut key)
			};
			continue;
		}

		if let Some(weight) = extra_vowel_weight(ch) {
			key.push(weight);
			index = push_trailing_marks(&chars, index + 1, &mut key);
			continue;
		}

		if let Some(weight) = vowel_sign_weight(ch) {
			key.push(weight);
			index += 1;
			continue;
		}

		match ch {
			ANUSVARA | CANDRABINDU => key.push(TRAILING_ANUSVARA),
			VISARGA => key.push(TRAILING_VISARGA),
			VIRAMA => key.push(SLOT_VIRAMA),
			_ => push_other(ch, &mut key),
		}
		index += 1;
	}

	key
}

/// Appends the vowel slot of the consonant ending at `index - 1` and returns
/// the position after everything consumed.
fn push_vowel_slot(chars: &[char], index: usize, key: &mut Vec<u32>) -> usize {
	let Some(&next) = chars.get(index) else {
		key.push(INHERENT_VOWEL);
		return index;
	};
	let slot = match next {
		VIRAMA => SLOT_VIRAMA,
		ANUSVARA | CANDRABINDU => SLOT_ANUSVARA,
		VISARGA => SLOT_VISARGA,
		sign => match vowel_sign_weight(sign) {
			Some(weight) => {
				key.push(weight);
				return push_trailing_marks(chars, index + 1, key);
			}
			None => {
				key.push(INHERENT_VOWEL);
				return index;
			}
		},
	};
	key.push(slot);
	index + 1
}

fn push_trailing_marks(chars: &[char], mut index: usize, key: &mut Vec<u32>) -> usize {
	while let Some(ch) = chars.get(index) {
		match *ch {
			ANUSVARA | CANDRABINDU => key.push(TRAILING_ANUSVARA),
			VISARGA => key.push(TRAILING_VISARGA),
			_ => break,
		}
		index += 1;
	}
	index
}

fn push_other(ch: char, key: &mut Vec<u32>) {
	if let Some(digit) = ch.to_digit(10) {
		key.push(DIGIT_BASE + digit);
		return;
	}
	if let Some(digit) = devanagari_digit(ch) {
		key.push(DIGIT_BASE + digit);
		return;
	}
	if ch.is_alphanumeric() {
		let folded = ch.to_lowercase().next().unwrap_or(ch);
		key.push(OTHER_BASE + u32::from(folded));
		return;
	}
	// Runs of whitespace and punctuation collapse into one separator.
	if key.last() != Some(&SEPARATOR) {
		key.push(SEPARATOR);
	}
}

fn conjunct_weight(chars: &[char]) -> Option<u32> {
	match chars {
		[first, VIRAMA, second, ..] => match (base_form(*first), base_form(*second)) {
			('क', 'ष') => Some(letter_weight("क्ष")),
			('ज', 'ञ') => Some(letter_weight("ज्ञ")),
			_ => None,
		},
		_ => None,
	}
}

fn base_form(ch: char) -> char {
	NUKTA_FORMS
		.iter()
		.find(|(composed, _)| *composed == ch)
		.map_or(ch, |(_, base)| *base)
}

fn is_consonant(ch: char) -> bool {
	('क'..='ह').contains(&ch) || ch == 'ळ'
}

fn vowel_sign_weight(ch: char) -> Option<u32> {
	VOWEL_SIGNS
		.iter()
		.position(|sign| *sign == ch)
		.map(|position| INHERENT_VOWEL + 1 + position as u32)
}

fn extra_vowel_weight(ch: char) -> Option<u32> {
	EXTRA_VOWELS
		.iter()
		.find(|(vowel, _, _)| *vowel == ch)
		.map(|(_, after, offset)| letter_weight(after) + offset)
}

fn devanagari_digit(ch: char) -> Option<u32> {
	('०'..='९')
		.contains(&ch)
		.then(|| u32::from(ch) - u32::from('०'))
}

fn letter_weight(letter: &str) -> u32 {
	let position = MARATHI_ALPHABET
		.iter()
		.position(|candidate| *candidate == letter)
		.unwrap_or(MARATHI_ALPHABET.len());
	position_weight(position)
}

fn position_weight(position: usize) -> u32 {
	LETTER_BASE + position as u32 * LETTER_STRIDE
}
