use serde::Serialize;

use super::{BoothRange, BoothRangeTable};
use crate::types::{BoothId, BoothVoter, VoterRecord};

/// Voters of one booth in roll order, renumbered from 1.
#[derive(Debug, Clone)]
pub struct BoothSlice<'a> {
	pub range: BoothRange,
	pub voters: Vec<BoothVoter<'a>>,
}

/// Result of splitting a record set across a booth range table.
///
/// Every configured booth has a slice, possibly empty. Records outside every
/// range and records without a serial number are only counted.
#[derive(Debug, Clone)]
pub struct BoothPartition<'a> {
	slices: Vec<BoothSlice<'a>>,
	unassigned: usize,
	unnumbered: usize,
}

impl<'a> BoothPartition<'a> {
	/// Voters assigned to `booth`, or `None` when the booth is not configured.
	#[must_use]
	pub fn get(&self, booth: BoothId) -> Option<&[BoothVoter<'a>]> {
		self.slices
			.iter()
			.find(|slice| slice.range.booth == booth)
			.map(|slice| slice.voters.as_slice())
	}

	/// Booth placement of `record`, which must be one of the partitioned
	/// records. Matching is by identity, so duplicate serials resolve to the
	/// right entry.
	#[must_use]
	pub fn locate(&self, record: &VoterRecord) -> Option<BoothVoter<'a>> {
		let serial_no = record.serial_no?;
		let index = self
			.slices
			.partition_point(|slice| slice.range.end < serial_no);
		let slice = self.slices.get(index)?;
		if !slice.range.contains(serial_no) {
			return None;
		}
		slice
			.voters
			.iter()
			.find(|voter| std::ptr::eq(voter.record, record))
			.copied()
	}

	/// Slices in start order.
	pub fn iter(&self) -> impl Iterator<Item = &BoothSlice<'a>> {
		self.slices.iter()
	}

	/// Number of records placed in some booth.
	#[must_use]
	pub fn assigned(&self) -> usize {
		self.slices.iter().map(|slice| slice.voters.len()).sum()
	}

	/// Records whose serial number lies outside every configured range.
	#[must_use]
	pub fn unassigned(&self) -> usize {
		self.unassigned
	}

	/// Records with no usable serial number.
	#[must_use]
	pub fn unnumbered(&self) -> usize {
		self.unnumbered
	}

	#[must_use]
	pub fn summary(&self) -> PartitionSummary {
		PartitionSummary {
			booths: self
				.slices
				.iter()
				.map(|slice| BoothCount {
					booth: slice.range.booth,
					start: slice.range.start,
					end: slice.range.end,
					voters: slice.voters.len(),
				})
				.collect(),
			assigned: self.assigned(),
			unassigned: self.unassigned,
			unnumbered: self.unnumbered,
		}
	}
}

/// Per-booth counts for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionSummary {
	pub booths: Vec<BoothCount>,
	pub assigned: usize,
	pub unassigned: usize,
	pub unnumbered: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoothCount {
	pub booth: BoothId,
	pub start: u32,
	pub end: u32,
	pub voters: usize,
}

/// Split `records` across the booths of `table`, keeping roll order inside
/// each booth and assigning dense booth-wise serials.
pub fn partition_by_booth<'a, I>(records: I, table: &BoothRangeTable) -> BoothPartition<'a>
where
	I: IntoIterator<Item = &'a VoterRecord>,
{
	let mut slices: Vec<BoothSlice<'a>> = table
		.ranges()
		.iter()
		.map(|range| BoothSlice {
			range: *range,
			voters: Vec::new(),
		})
		.collect();
	let mut unassigned = 0;
	let mut unnumbered = 0;

	for record in records {
		let Some(serial_no) = record.serial_no else {
			unnumbered += 1;
			continue;
		};
		let Some(index) = table.position_for_serial(serial_no) else {
			unassigned += 1;
			continue;
		};
		let slice = &mut slices[index];
		let booth_serial = slice.voters.len() + 1;
		slice.voters.push(BoothVoter {
			record,
			booth: slice.range.booth,
			booth_serial,
		});
	}

	if unassigned > 0 {
		log::warn!("{unassigned} voters have serial numbers outside every booth range");
	}
	if unnumbered > 0 {
		log::debug!("{unnumbered} voters have no serial number and belong to no booth");
	}

	BoothPartition {
		slices,
		unassigned,
		unnumbered,
	}
}

/// Voters of a single booth, renumbered from 1 in roll order.
pub fn booth_slice<'a, I>(records: I, range: &BoothRange) -> Vec<BoothVoter<'a>>
where
	I: IntoIterator<Item = &'a VoterRecord>,
{
	records
		.into_iter()
		.filter(|record| record.serial_no.is_some_and(|serial_no| range.contains(serial_no)))
		.enumerate()
		.map(|(index, record)| BoothVoter {
			record,
			booth: range.booth,
			booth_serial: index + 1,
		})
		.collect()
}
