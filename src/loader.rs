//! Reading the bundled voter list from disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::directory::VoterDirectory;
use crate::types::VoterRecord;

#[derive(Debug, Error)]
pub enum LoadError {
	#[error("failed to read voter list {}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("voter list {} is not valid JSON", path.display())]
	Json {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("voter list {} must contain a JSON array of records", path.display())]
	NotAnArray { path: PathBuf },
}

/// Read and decode the voter list at `path`.
///
/// Entries that are not JSON objects are skipped with a warning; fields
/// inside an object are decoded leniently.
pub fn load_voters(path: &Path) -> Result<Vec<VoterRecord>, LoadError> {
	let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	let value: Value = serde_json::from_str(&raw).map_err(|source| LoadError::Json {
		path: path.to_path_buf(),
		source,
	})?;
	let Value::Array(entries) = value else {
		return Err(LoadError::NotAnArray {
			path: path.to_path_buf(),
		});
	};

	let total = entries.len();
	let records: Vec<VoterRecord> = entries
		.into_iter()
		.enumerate()
		.filter_map(|(index, entry)| decode_entry(index, entry))
		.collect();

	if records.len() < total {
		log::warn!(
			"skipped {} of {total} entries in {}",
			total - records.len(),
			path.display()
		);
	}
	log::info!("loaded {} voters from {}", records.len(), path.display());
	Ok(records)
}

/// Convenience wrapper returning a ready [`VoterDirectory`].
pub fn load_directory(path: &Path) -> Result<VoterDirectory, LoadError> {
	load_voters(path).map(VoterDirectory::load)
}

fn decode_entry(index: usize, entry: Value) -> Option<VoterRecord> {
	if !entry.is_object() {
		log::warn!("entry {index} is not an object; skipping");
		return None;
	}
	match serde_json::from_value(entry) {
		Ok(record) => Some(record),
		Err(err) => {
			log::warn!("entry {index} could not be decoded: {err}");
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use tempfile::NamedTempFile;

	use super::*;

	fn write_json(contents: &str) -> NamedTempFile {
		let mut file = NamedTempFile::new().expect("temp file");
		file.write_all(contents.as_bytes()).expect("write");
		file
	}

	#[test]
	fn loads_records_and_skips_non_objects() {
		let file = write_json(
			r#"[
				{"serial_no": 1, "voter_id": "X1", "name_marathi": "अजय"},
				42,
				{"serial_no": "945", "voter_id": "X2"},
				null
			]"#,
		);

		let records = load_voters(file.path()).expect("loads");
		assert_eq!(records.len(), 2);
		assert_eq!(records[0].name_marathi, "अजय");
		assert_eq!(records[1].serial_no, Some(945));
		assert_eq!(records[1].name_marathi, "");
	}

	#[test]
	fn reports_missing_file_with_path() {
		let dir = tempfile::tempdir().expect("temp dir");
		let path = dir.path().join("missing.json");
		let err = load_voters(&path).unwrap_err();
		assert!(matches!(err, LoadError::Io { .. }));
		assert!(err.to_string().contains("missing.json"));
	}

	#[test]
	fn rejects_invalid_json_and_non_arrays() {
		let broken = write_json("[{");
		assert!(matches!(load_voters(broken.path()).unwrap_err(), LoadError::Json { .. }));

		let object = write_json(r#"{"voters": []}"#);
		assert!(matches!(
			load_voters(object.path()).unwrap_err(),
			LoadError::NotAnArray { .. }
		));
	}

	#[test]
	fn builds_a_directory() {
		let file = write_json(r#"[{"serial_no": 3, "voter_id": "X3", "name_marathi": "कमल"}]"#);
		let directory = load_directory(file.path()).expect("loads");
		assert_eq!(directory.len(), 1);
		assert_eq!(directory.search("कमल").len(), 1);
	}
}
