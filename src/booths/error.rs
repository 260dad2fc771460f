use thiserror::Error;

use crate::types::BoothId;

/// Problems detected while building a [`BoothRangeTable`](super::BoothRangeTable).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoothConfigError {
	/// No booth ranges were supplied.
	#[error("booth range table is empty")]
	Empty,

	/// Serial numbers are 1-based, so a range cannot start at zero.
	#[error("booth {booth} starts at serial 0; serial numbers start at 1")]
	ZeroStart { booth: BoothId },

	/// The range end lies before its start.
	#[error("booth {booth} has start {start} after end {end}")]
	Inverted { booth: BoothId, start: u32, end: u32 },

	/// The same booth id appears twice.
	#[error("booth {booth} is configured more than once")]
	DuplicateBooth { booth: BoothId },

	/// Two ranges claim the same serial numbers.
	#[error("booth {first} ({first_start}-{first_end}) overlaps booth {second} ({second_start}-{second_end})")]
	Overlap {
		first: BoothId,
		first_start: u32,
		first_end: u32,
		second: BoothId,
		second_start: u32,
		second_end: u32,
	},
}
