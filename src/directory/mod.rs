//! The voter directory: an immutable roll answering free-text search,
//! alphabet browse, Marathi sorting and booth queries.
//!
//! Every query borrows from the directory and returns a fresh view; the
//! underlying records are never modified.

mod alphabet;
mod collation;
mod error;
mod query;

use std::sync::Arc;

use serde::Serialize;

use crate::booths::{BoothPartition, BoothRangeTable, booth_slice, partition_by_booth};
use crate::types::{BoothId, BoothVoter, VoterRecord};

pub use alphabet::{MARATHI_ALPHABET, is_letter, letter_position};
pub use collation::{collation_key, compare as compare_names};
pub use error::QueryError;
pub(crate) use query::TextQuery;

/// Shared, read-only snapshot of the voter roll.
#[derive(Debug, Clone)]
pub struct VoterDirectory {
	records: Arc<[VoterRecord]>,
}

/// Number of voters whose name starts with a given letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterCount {
	pub letter: &'static str,
	pub voters: usize,
}

impl VoterDirectory {
	/// Wrap the loaded roll. Accepts a `Vec` or an already shared slice.
	pub fn load(records: impl Into<Arc<[VoterRecord]>>) -> Self {
		let records = records.into();
		log::debug!("voter directory holds {} records", records.len());
		Self { records }
	}

	#[must_use]
	pub fn records(&self) -> &[VoterRecord] {
		&self.records
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Records whose name, relation name or EPIC contains `query`,
	/// ignoring case and surrounding whitespace. A blank query matches
	/// nothing.
	#[must_use]
	pub fn search(&self, query: &str) -> Vec<&VoterRecord> {
		let Some(query) = TextQuery::parse(query) else {
			return Vec::new();
		};
		let matches: Vec<_> = self
			.records
			.iter()
			.filter(|record| query.matches(record))
			.collect();
		log::debug!("search matched {} of {} records", matches.len(), self.len());
		matches
	}

	/// Records whose trimmed name begins with `letter`.
	#[must_use]
	pub fn filter_by_letter(&self, letter: &str) -> Vec<&VoterRecord> {
		self.records
			.iter()
			.filter(|record| record.name_starts_with(letter))
			.collect()
	}

	/// Letter filter narrowed by a free-text query. Unlike [`search`](Self::search),
	/// a blank query leaves the letter subset unchanged.
	#[must_use]
	pub fn filter_by_letter_matching(&self, letter: &str, query: &str) -> Vec<&VoterRecord> {
		let query = TextQuery::parse(query);
		self.records
			.iter()
			.filter(|record| record.name_starts_with(letter))
			.filter(|record| query.as_ref().is_none_or(|query| query.matches(record)))
			.collect()
	}

	/// The alphabetical listing: optionally restricted to one letter,
	/// narrowed by `query`, then sorted in Marathi order. `None` lists the
	/// whole roll.
	pub fn browse_alphabetical(
		&self,
		letter: Option<&str>,
		query: &str,
	) -> Result<Vec<&VoterRecord>, QueryError> {
		let subset = match letter {
			Some(letter) if is_letter(letter) => self.filter_by_letter_matching(letter, query),
			Some(letter) => {
				return Err(QueryError::UnknownLetter {
					letter: letter.to_string(),
				});
			}
			None => {
				let query = TextQuery::parse(query);
				self.records
					.iter()
					.filter(|record| query.as_ref().is_none_or(|query| query.matches(record)))
					.collect()
			}
		};
		Ok(sort_alphabetical(&subset))
	}

	/// Voter counts for every letter, in alphabet order.
	#[must_use]
	pub fn letter_counts(&self) -> Vec<LetterCount> {
		MARATHI_ALPHABET
			.iter()
			.map(|&letter| LetterCount {
				letter,
				voters: self
					.records
					.iter()
					.filter(|record| record.name_starts_with(letter))
					.count(),
			})
			.collect()
	}

	/// Exact EPIC lookup, ignoring case.
	#[must_use]
	pub fn find_by_voter_id(&self, voter_id: &str) -> Option<&VoterRecord> {
		let needle = voter_id.trim();
		if needle.is_empty() {
			return None;
		}
		self.records
			.iter()
			.find(|record| record.voter_id.trim().eq_ignore_ascii_case(needle))
	}

	/// Split the whole roll across `table`.
	#[must_use]
	pub fn partition_by_booth(&self, table: &BoothRangeTable) -> BoothPartition<'_> {
		partition_by_booth(self.records.iter(), table)
	}

	/// One booth's voters with booth-wise serials, optionally narrowed by
	/// `query`. Narrowing keeps the serials of the full booth slice.
	pub fn booth_view(
		&self,
		booth: BoothId,
		table: &BoothRangeTable,
		query: &str,
	) -> Result<Vec<BoothVoter<'_>>, QueryError> {
		let range = table
			.range_for(booth)
			.ok_or(QueryError::UnknownBooth { booth })?;
		let slice = booth_slice(self.records.iter(), range);
		Ok(match TextQuery::parse(query) {
			Some(query) => slice
				.into_iter()
				.filter(|voter| query.matches(voter.record))
				.collect(),
			None => slice,
		})
	}
}

/// Stable sort by Marathi collation of `name_marathi`.
#[must_use]
pub fn sort_alphabetical<'a>(records: &[&'a VoterRecord]) -> Vec<&'a VoterRecord> {
	let mut sorted = records.to_vec();
	sorted.sort_by_cached_key(|record| collation_key(&record.name_marathi));
	sorted
}

#[cfg(test)]
mod tests;
