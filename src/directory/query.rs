use crate::types::VoterRecord;

/// A trimmed, lower-cased free-text query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TextQuery {
	needle: String,
}

impl TextQuery {
	/// Returns `None` for empty or whitespace-only input.
	pub(crate) fn parse(query: &str) -> Option<Self> {
		let trimmed = query.trim();
		if trimmed.is_empty() {
			return None;
		}
		Some(Self {
			needle: trimmed.to_lowercase(),
		})
	}

	/// Substring match against name, relation name or EPIC.
	pub(crate) fn matches(&self, record: &VoterRecord) -> bool {
		[
			&record.name_marathi,
			&record.relation_name_marathi,
			&record.voter_id,
		]
		.into_iter()
		.any(|field| field.to_lowercase().contains(&self.needle))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_queries_are_rejected() {
		assert_eq!(TextQuery::parse(""), None);
		assert_eq!(TextQuery::parse(" \t\n"), None);
	}

	#[test]
	fn matches_any_searchable_field_case_insensitively() {
		let record = VoterRecord {
			voter_id: "XYZ0456789".into(),
			name_marathi: "चंदन पाटील".into(),
			relation_name_marathi: "बस्वराज".into(),
			house_no: "पाटील वाडा".into(),
			..VoterRecord::default()
		};

		let query = |text: &str| TextQuery::parse(text).expect("non-empty");
		assert!(query("  xyz04 ").matches(&record));
		assert!(query("पाटी").matches(&record));
		assert!(query("स्वरा").matches(&record));
		assert!(!query("वाडा").matches(&record));
	}
}
