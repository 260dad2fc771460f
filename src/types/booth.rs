use std::fmt;

use serde::{Deserialize, Serialize};

use super::VoterRecord;

/// Identifier of a polling booth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoothId(pub u32);

impl fmt::Display for BoothId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<u32> for BoothId {
	fn from(value: u32) -> Self {
		Self(value)
	}
}

/// A voter decorated with its booth and booth-wise serial.
///
/// `booth_serial` is local to the booth slice; the record's own `serial_no`
/// is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoothVoter<'a> {
	#[serde(flatten)]
	pub record: &'a VoterRecord,
	pub booth: BoothId,
	pub booth_serial: usize,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn serializes_flat_with_both_serials() {
		let record = VoterRecord {
			serial_no: Some(945),
			voter_id: "X2".into(),
			..VoterRecord::default()
		};
		let voter = BoothVoter {
			record: &record,
			booth: BoothId(2),
			booth_serial: 1,
		};

		let value = serde_json::to_value(voter).expect("json");
		assert_eq!(value["serial_no"], 945);
		assert_eq!(value["booth"], 2);
		assert_eq!(value["booth_serial"], 1);
		assert_eq!(value["voter_id"], "X2");
	}
}
