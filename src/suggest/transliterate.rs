//! Approximate romanised-to-Devanagari conversion for suggestions.
//!
//! The mapping is deliberately small: it turns quick Latin input such as
//! `ajay` or `kavita` into a Devanagari prefix that can be compared against
//! names. It is not a general transliteration scheme.

#[derive(Debug, Clone, Copy)]
enum Unit {
	/// Independent vowel and the sign used after a consonant.
	Vowel {
		letter: &'static str,
		sign: &'static str,
	},
	Consonant(&'static str),
}

const fn vowel(letter: &'static str, sign: &'static str) -> Unit {
	Unit::Vowel { letter, sign }
}

const UNITS: [(&str, Unit); 47] = [
	("ksh", Unit::Consonant("क्ष")),
	("chh", Unit::Consonant("छ")),
	("shh", Unit::Consonant("ष")),
	("dny", Unit::Consonant("ज्ञ")),
	("aa", vowel("आ", "ा")),
	("ii", vowel("ई", "ी")),
	("ee", vowel("ई", "ी")),
	("uu", vowel("ऊ", "ू")),
	("oo", vowel("ऊ", "ू")),
	("ai", vowel("ऐ", "ै")),
	("au", vowel("औ", "ौ")),
	("kh", Unit::Consonant("ख")),
	("gh", Unit::Consonant("घ")),
	("ch", Unit::Consonant("च")),
	("jh", Unit::Consonant("झ")),
	("th", Unit::Consonant("थ")),
	("dh", Unit::Consonant("ध")),
	("ph", Unit::Consonant("फ")),
	("bh", Unit::Consonant("भ")),
	("sh", Unit::Consonant("श")),
	("gy", Unit::Consonant("ज्ञ")),
	("a", vowel("अ", "")),
	("i", vowel("इ", "ि")),
	("u", vowel("उ", "ु")),
	("e", vowel("ए", "े")),
	("o", vowel("ओ", "ो")),
	("k", Unit::Consonant("क")),
	("q", Unit::Consonant("क")),
	("g", Unit::Consonant("ग")),
	("c", Unit::Consonant("च")),
	("j", Unit::Consonant("ज")),
	("z", Unit::Consonant("झ")),
	("t", Unit::Consonant("त")),
	("d", Unit::Consonant("द")),
	("n", Unit::Consonant("न")),
	("p", Unit::Consonant("प")),
	("f", Unit::Consonant("फ")),
	("b", Unit::Consonant("ब")),
	("m", Unit::Consonant("म")),
	("y", Unit::Consonant("य")),
	("r", Unit::Consonant("र")),
	("l", Unit::Consonant("ल")),
	("v", Unit::Consonant("व")),
	("w", Unit::Consonant("व")),
	("s", Unit::Consonant("स")),
	("h", Unit::Consonant("ह")),
	("x", Unit::Consonant("क्स")),
];

const LONGEST_UNIT: usize = 3;

/// Greedy longest-match conversion. Vowels following a consonant become
/// vowel signs; characters without a mapping are dropped and whitespace is
/// kept as a single space.
#[must_use]
pub fn transliterate(input: &str) -> String {
	let chars: Vec<char> = input.trim().to_lowercase().chars().collect();
	let mut output = String::with_capacity(chars.len() * 3);
	let mut after_consonant = false;
	let mut index = 0;

	while index < chars.len() {
		if chars[index].is_whitespace() {
			if !output.ends_with(' ') {
				output.push(' ');
			}
			after_consonant = false;
			index += 1;
			continue;
		}

		let Some((consumed, unit)) = longest_unit(&chars[index..]) else {
			after_consonant = false;
			index += 1;
			continue;
		};
		index += consumed;

		match unit {
			Unit::Consonant(text) => {
				output.push_str(text);
				after_consonant = true;
			}
			Unit::Vowel { letter, sign } => {
				output.push_str(if after_consonant { sign } else { letter });
				after_consonant = false;
			}
		}
	}

	output.trim_end().to_string()
}

fn longest_unit(chars: &[char]) -> Option<(usize, Unit)> {
	(1..=LONGEST_UNIT.min(chars.len())).rev().find_map(|length| {
		let candidate: String = chars[..length].iter().collect();
		UNITS
			.iter()
			.find(|(latin, _)| *latin == candidate)
			.map(|(_, unit)| (length, *unit))
	})
}
