use thiserror::Error;

use crate::types::BoothId;

/// Rejected directory queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
	/// The letter is not part of the Marathi alphabet sequence.
	#[error("'{letter}' is not a letter of the Marathi alphabet")]
	UnknownLetter { letter: String },

	/// The booth is not present in the configured range table.
	#[error("booth {booth} is not configured")]
	UnknownBooth { booth: BoothId },
}
