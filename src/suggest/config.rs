use frizbee::Options;

use super::PREFILTER_ENABLE_THRESHOLD;

/// Builds fuzzy matching options for the given needle and candidate count.
///
/// The typo budget scales with the needle's byte length, since Devanagari
/// letters span several bytes.
pub(crate) fn options_for_needle(needle: &str, candidate_count: usize) -> Options {
	let length = needle.len();
	let mut allowed_typos: u16 = match length {
		0..=2 => 0,
		3..=8 => 1,
		9..=16 => 2,
		17..=28 => 3,
		_ => 4,
	};
	if let Ok(max_reasonable) = u16::try_from(length.saturating_sub(1)) {
		allowed_typos = allowed_typos.min(max_reasonable);
	}

	Options {
		prefilter: candidate_count >= PREFILTER_ENABLE_THRESHOLD,
		max_typos: Some(allowed_typos),
		sort: false,
		..Options::default()
	}
}
