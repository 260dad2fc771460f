use serde::{Deserialize, Serialize};

use super::lenient;

/// One entry of the voter roll as supplied by the bundled JSON list.
///
/// Every field decodes leniently: missing or `null` strings become empty,
/// and numeric fields that are absent or unparsable become `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterRecord {
	/// Position in the authoritative roll (1-based).
	#[serde(default, deserialize_with = "lenient::number")]
	pub serial_no: Option<u32>,
	/// EPIC identifier.
	#[serde(default, deserialize_with = "lenient::text")]
	pub voter_id: String,
	#[serde(default, deserialize_with = "lenient::text")]
	pub name_marathi: String,
	#[serde(default, deserialize_with = "lenient::text")]
	pub relation_name_marathi: String,
	#[serde(default, deserialize_with = "lenient::text")]
	pub relation_type: String,
	#[serde(default, deserialize_with = "lenient::text")]
	pub house_no: String,
	#[serde(default, deserialize_with = "lenient::number")]
	pub age: Option<u32>,
	#[serde(default, deserialize_with = "lenient::text")]
	pub gender: String,
}

impl VoterRecord {
	/// Display name with surrounding whitespace removed.
	#[must_use]
	pub fn trimmed_name(&self) -> &str {
		self.name_marathi.trim()
	}

	/// Returns true when the trimmed name begins with `letter`.
	#[must_use]
	pub fn name_starts_with(&self, letter: &str) -> bool {
		self.trimmed_name().starts_with(letter)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_complete_record() {
		let json = r#"{
			"serial_no": 12,
			"voter_id": "ABC1234567",
			"name_marathi": "चंदन पाटील",
			"relation_name_marathi": "बस्वराज पाटील",
			"relation_type": "F",
			"house_no": "16/2",
			"age": 41,
			"gender": "M"
		}"#;

		let record: VoterRecord = serde_json::from_str(json).expect("record");
		assert_eq!(record.serial_no, Some(12));
		assert_eq!(record.voter_id, "ABC1234567");
		assert_eq!(record.age, Some(41));
		assert_eq!(record.relation_type, "F");
	}

	#[test]
	fn missing_and_null_fields_default() {
		let record: VoterRecord =
			serde_json::from_str(r#"{"voter_id": "X1", "name_marathi": null}"#).expect("record");
		assert_eq!(record.serial_no, None);
		assert_eq!(record.name_marathi, "");
		assert_eq!(record.house_no, "");
		assert_eq!(record.age, None);
	}

	#[test]
	fn numeric_strings_and_numbers_are_accepted() {
		let record: VoterRecord =
			serde_json::from_str(r#"{"serial_no": " 945 ", "age": "33", "house_no": 7}"#)
				.expect("record");
		assert_eq!(record.serial_no, Some(945));
		assert_eq!(record.age, Some(33));
		assert_eq!(record.house_no, "7");
	}

	#[test]
	fn unusable_serials_become_none() {
		for raw in [r#""abc""#, "-4", "12.5", "true", "[]"] {
			let json = format!(r#"{{"serial_no": {raw}}}"#);
			let record: VoterRecord = serde_json::from_str(&json).expect("record");
			assert_eq!(record.serial_no, None, "input {raw}");
		}
	}

	#[test]
	fn prefix_check_ignores_leading_whitespace() {
		let record = VoterRecord {
			name_marathi: "  क्षमा जाधव".into(),
			..VoterRecord::default()
		};
		assert!(record.name_starts_with("क्ष"));
		assert_eq!(record.trimmed_name(), "क्षमा जाधव");
	}
}
