//! Voter roll lookup.
//!
//! [`VoterDirectory`] holds the immutable roll and answers free-text search,
//! Marathi alphabet browse and booth-wise queries. [`BoothRangeTable`]
//! describes which serial numbers belong to which polling booth, and the
//! [`suggest`](mod@suggest) module proposes names for romanised input.

pub mod app_dirs;
pub mod booths;
pub mod directory;
pub mod loader;
pub mod logging;
pub mod suggest;
pub mod types;

pub use booths::{
	BoothConfigError, BoothPartition, BoothRange, BoothRangeTable, PartitionSummary,
	partition_by_booth,
};
pub use directory::{
	LetterCount, MARATHI_ALPHABET, QueryError, VoterDirectory, is_letter, sort_alphabetical,
};
pub use loader::{LoadError, load_directory, load_voters};
pub use suggest::{
	DEFAULT_SUGGESTION_LIMIT, Suggestion, SuggestionKind, apply_suggestion, suggest,
};
pub use types::{BoothId, BoothVoter, VoterRecord};
