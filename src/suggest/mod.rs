//! Name suggestions for romanised or partial input.
//!
//! This layer sits beside [`VoterDirectory::search`]: it proposes names to
//! search for and never changes what a search returns.

mod config;
mod transliterate;

use std::collections::HashSet;

use frizbee::match_list;
use serde::Serialize;

use crate::directory::VoterDirectory;
use crate::types::VoterRecord;

pub use transliterate::transliterate;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;
pub(crate) const PREFILTER_ENABLE_THRESHOLD: usize = 1_000;

const EXACT_TRANSLIT: u16 = 200;
const TRANSLIT_PREFIX: u16 = 100;
const QUERY_PREFIX: u16 = 80;
const TRANSLIT_SUBSTRING: u16 = 40;
const QUERY_SUBSTRING: u16 = 30;

/// How a suggestion was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
	/// Prefix or substring match on the input or its transliteration.
	Direct,
	/// Typo-tolerant match on the transliteration.
	Fuzzy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
	pub text: String,
	pub score: u16,
	pub kind: SuggestionKind,
}

/// Propose up to `limit` distinct names or relation names for `query`.
///
/// Direct matches come first, best score first; remaining slots are filled
/// with fuzzy matches of the transliterated input.
#[must_use]
pub fn suggest(directory: &VoterDirectory, query: &str, limit: usize) -> Vec<Suggestion> {
	let typed = query.trim();
	if typed.is_empty() || limit == 0 {
		return Vec::new();
	}
	let typed_lower = typed.to_lowercase();
	let translit = transliterate(typed);
	let candidates = candidate_names(directory);

	let mut direct: Vec<Suggestion> = candidates
		.iter()
		.filter_map(|name| {
			let score = direct_score(name, &typed_lower, &translit)?;
			Some(Suggestion {
				text: (*name).to_string(),
				score,
				kind: SuggestionKind::Direct,
			})
		})
		.collect();
	direct.sort_by(|left, right| right.score.cmp(&left.score));
	direct.truncate(limit);

	if direct.len() < limit && !translit.is_empty() {
		let chosen: HashSet<&str> = direct.iter().map(|suggestion| suggestion.text.as_str()).collect();
		let remaining: Vec<&str> = candidates
			.iter()
			.copied()
			.filter(|name| !chosen.contains(name))
			.collect();
		let fuzzy = fuzzy_matches(&translit, &remaining, limit - direct.len());
		direct.extend(fuzzy);
	}

	log::debug!("{} suggestions for {typed:?} (transliterated {translit:?})", direct.len());
	direct
}

/// Records whose name or relation name starts with an accepted suggestion.
#[must_use]
pub fn apply_suggestion<'a>(directory: &'a VoterDirectory, suggestion: &str) -> Vec<&'a VoterRecord> {
	let prefix = suggestion.trim();
	if prefix.is_empty() {
		return Vec::new();
	}
	directory
		.records()
		.iter()
		.filter(|record| {
			record.trimmed_name().starts_with(prefix)
				|| record.relation_name_marathi.trim().starts_with(prefix)
		})
		.collect()
}

/// Distinct non-empty names and relation names in roll order.
fn candidate_names(directory: &VoterDirectory) -> Vec<&str> {
	let mut seen = HashSet::new();
	directory
		.records()
		.iter()
		.flat_map(|record| [record.trimmed_name(), record.relation_name_marathi.trim()])
		.filter(|name| !name.is_empty() && seen.insert(*name))
		.collect()
}

fn direct_score(name: &str, typed_lower: &str, translit: &str) -> Option<u16> {
	let lower = name.to_lowercase();
	let has_translit = !translit.is_empty();

	let qualifies = (has_translit && name.starts_with(translit))
		|| lower.contains(typed_lower)
		|| (has_translit && lower.contains(translit));
	if !qualifies {
		return None;
	}

	let mut score = 0;
	if has_translit && name == translit {
		score += EXACT_TRANSLIT;
	}
	if has_translit && name.starts_with(translit) {
		score += TRANSLIT_PREFIX;
	}
	if lower.starts_with(typed_lower) {
		score += QUERY_PREFIX;
	}
	if has_translit && name.contains(translit) {
		score += TRANSLIT_SUBSTRING;
	}
	if lower.contains(typed_lower) {
		score += QUERY_SUBSTRING;
	}
	Some(score)
}

fn fuzzy_matches(needle: &str, haystacks: &[&str], limit: usize) -> Vec<Suggestion> {
	if haystacks.is_empty() || limit == 0 {
		return Vec::new();
	}
	let options = config::options_for_needle(needle, haystacks.len());
	let mut matches: Vec<_> = match_list(needle, haystacks, options)
		.into_iter()
		.filter(|entry| entry.score > 0)
		.collect();
	matches.sort_by(|left, right| right.score.cmp(&left.score));

	matches
		.into_iter()
		.take(limit)
		.map(|entry| Suggestion {
			text: haystacks[entry.index_in_haystack as usize].to_string(),
			score: entry.score,
			kind: SuggestionKind::Fuzzy,
		})
		.collect()
}
