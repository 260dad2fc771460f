use std::collections::HashSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::BoothConfigError;
use crate::types::BoothId;

/// Inclusive serial-number interval assigned to one booth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoothRange {
	pub booth: BoothId,
	pub start: u32,
	pub end: u32,
}

impl BoothRange {
	#[must_use]
	pub fn new(booth: impl Into<BoothId>, start: u32, end: u32) -> Self {
		Self {
			booth: booth.into(),
			start,
			end,
		}
	}

	#[must_use]
	pub fn contains(&self, serial_no: u32) -> bool {
		self.start <= serial_no && serial_no <= self.end
	}
}

/// Validated, start-ordered booth ranges.
///
/// Construction rejects overlapping, inverted and duplicate entries. Gaps
/// between ranges are allowed; serials inside a gap belong to no booth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoothRangeTable {
	ranges: Vec<BoothRange>,
}

impl BoothRangeTable {
	pub fn new<I>(ranges: I) -> Result<Self, BoothConfigError>
	where
		I: IntoIterator<Item = BoothRange>,
	{
		let mut ranges: Vec<BoothRange> = ranges.into_iter().collect();
		if ranges.is_empty() {
			return Err(BoothConfigError::Empty);
		}

		let mut seen = HashSet::with_capacity(ranges.len());
		for range in &ranges {
			if range.start == 0 {
				return Err(BoothConfigError::ZeroStart { booth: range.booth });
			}
			if range.start > range.end {
				return Err(BoothConfigError::Inverted {
					booth: range.booth,
					start: range.start,
					end: range.end,
				});
			}
			if !seen.insert(range.booth) {
				return Err(BoothConfigError::DuplicateBooth { booth: range.booth });
			}
		}

		ranges.sort_by_key(|range| range.start);
		for pair in ranges.windows(2) {
			let (first, second) = (pair[0], pair[1]);
			if second.start <= first.end {
				return Err(BoothConfigError::Overlap {
					first: first.booth,
					first_start: first.start,
					first_end: first.end,
					second: second.booth,
					second_start: second.start,
					second_end: second.end,
				});
			}
		}

		Ok(Self { ranges })
	}

	/// The four-booth layout of the ward roll.
	#[must_use]
	pub fn canonical() -> Self {
		Self {
			ranges: vec![
				BoothRange::new(1, 1, 944),
				BoothRange::new(2, 945, 1923),
				BoothRange::new(3, 1924, 2881),
				BoothRange::new(4, 2882, 3826),
			],
		}
	}

	#[must_use]
	pub fn ranges(&self) -> &[BoothRange] {
		&self.ranges
	}

	pub fn booth_ids(&self) -> impl Iterator<Item = BoothId> + '_ {
		self.ranges.iter().map(|range| range.booth)
	}

	#[must_use]
	pub fn range_for(&self, booth: BoothId) -> Option<&BoothRange> {
		self.ranges.iter().find(|range| range.booth == booth)
	}

	/// Index of the range containing `serial_no`.
	pub(crate) fn position_for_serial(&self, serial_no: u32) -> Option<usize> {
		let index = self.ranges.partition_point(|range| range.end < serial_no);
		self.ranges
			.get(index)
			.filter(|range| range.contains(serial_no))
			.map(|_| index)
	}

	/// Booth owning `serial_no`, or `None` when it falls outside every range.
	#[must_use]
	pub fn booth_of(&self, serial_no: u32) -> Option<BoothId> {
		self.position_for_serial(serial_no)
			.map(|index| self.ranges[index].booth)
	}

	/// Serial intervals not covered by any booth, including a leading gap
	/// when the first range does not start at 1.
	#[must_use]
	pub fn gaps(&self) -> Vec<RangeInclusive<u32>> {
		let mut gaps = Vec::new();
		let mut next_expected = 1;
		for range in &self.ranges {
			if range.start > next_expected {
				gaps.push(next_expected..=range.start - 1);
			}
			next_expected = range.end.saturating_add(1);
		}
		gaps
	}

	/// Highest serial covered by the table.
	#[must_use]
	pub fn last_serial(&self) -> u32 {
		self.ranges.last().map_or(0, |range| range.end)
	}
}

impl Default for BoothRangeTable {
	fn default() -> Self {
		Self::canonical()
	}
}
