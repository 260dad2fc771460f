//! Booth range configuration and booth-wise partitioning of the roll.

mod error;
mod partition;
mod table;

pub use error::BoothConfigError;
pub use partition::{
	BoothCount, BoothPartition, BoothSlice, PartitionSummary, booth_slice, partition_by_booth,
};
pub use table::{BoothRange, BoothRangeTable};
