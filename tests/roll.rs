use std::fs;

use voterdir::{
	BoothId, BoothRange, BoothRangeTable, LoadError, MARATHI_ALPHABET, SuggestionKind,
	load_directory, suggest,
};

const ROLL: &str = r#"[
	{"serial_no": 1, "voter_id": "UDG0000001", "name_marathi": "कविता पाटील",
	 "relation_name_marathi": "बस्वराज पाटील", "relation_type": "F", "house_no": "1", "age": 34, "gender": "F"},
	{"serial_no": "2", "voter_id": "UDG0000002", "name_marathi": "अजय शिंदे",
	 "relation_name_marathi": "रमेश शिंदे", "relation_type": "F", "house_no": 2, "age": "45", "gender": "M"},
	{"serial_no": 945, "voter_id": "UDG0000945", "name_marathi": "क्षमा जोशी",
	 "relation_name_marathi": "अजय जोशी", "relation_type": "H", "house_no": "7", "age": 29, "gender": "F"},
	{"serial_no": 946, "voter_id": "UDG0000946", "name_marathi": "  अमित कुलकर्णी",
	 "relation_name_marathi": null, "relation_type": "F", "house_no": "9", "age": null, "gender": "M"},
	{"voter_id": "UDG9999999", "name_marathi": "गणेश मोरे"},
	"not a voter"
]"#;

fn load() -> voterdir::VoterDirectory {
	let dir = tempfile::tempdir().expect("temp dir");
	let path = dir.path().join("voters.json");
	fs::write(&path, ROLL).expect("write roll");
	load_directory(&path).expect("roll loads")
}

#[test]
fn lenient_roll_loads_and_skips_non_objects() {
	let directory = load();
	assert_eq!(directory.len(), 5);

	let ajay = directory.find_by_voter_id("udg0000002").expect("present");
	assert_eq!(ajay.serial_no, Some(2));
	assert_eq!(ajay.age, Some(45));
	assert_eq!(ajay.house_no, "2");

	let amit = directory.find_by_voter_id("UDG0000946").expect("present");
	assert_eq!(amit.relation_name_marathi, "");
	assert_eq!(amit.age, None);
}

#[test]
fn search_matches_relation_names_in_roll_order() {
	let directory = load();
	let epics: Vec<_> = directory
		.search("अजय")
		.iter()
		.map(|record| record.voter_id.as_str())
		.collect();
	assert_eq!(epics, vec!["UDG0000002", "UDG0000945"]);
	assert!(directory.search("   ").is_empty());
}

#[test]
fn alphabetical_browse_places_conjunct_letters_after_plain_consonants() {
	let directory = load();
	let names: Vec<_> = directory
		.browse_alphabetical(None, "")
		.expect("no letter")
		.iter()
		.map(|record| record.trimmed_name())
		.collect();
	assert_eq!(
		names,
		vec!["अजय शिंदे", "अमित कुलकर्णी", "कविता पाटील", "गणेश मोरे", "क्षमा जोशी"]
	);

	let ksha = directory
		.browse_alphabetical(Some("क्ष"), "")
		.expect("known letter");
	assert_eq!(ksha.len(), 1);

	let counts = directory.letter_counts();
	assert_eq!(counts.len(), MARATHI_ALPHABET.len());
	let total: usize = counts.iter().map(|count| count.voters).sum();
	assert!(total >= 5);
}

#[test]
fn booth_partition_covers_every_numbered_voter() {
	let directory = load();
	let partition = directory.partition_by_booth(&BoothRangeTable::canonical());
	assert_eq!(partition.assigned(), 4);
	assert_eq!(partition.unnumbered(), 1);

	let booth_two: Vec<_> = partition
		.get(BoothId(2))
		.expect("configured")
		.iter()
		.map(|voter| (voter.record.serial_no, voter.booth_serial))
		.collect();
	assert_eq!(booth_two, vec![(Some(945), 1), (Some(946), 2)]);

	let custom = BoothRangeTable::new([BoothRange::new(9, 1, 1)]).expect("valid");
	let narrowed = directory
		.booth_view(BoothId(9), &custom, "")
		.expect("configured");
	assert_eq!(narrowed.len(), 1);
	assert_eq!(narrowed[0].record.voter_id, "UDG0000001");
}

#[test]
fn romanised_input_suggests_marathi_names() {
	let directory = load();
	let suggestions = suggest(&directory, "kavita", 5);
	let first = suggestions.first().expect("at least one suggestion");
	assert!(first.text.starts_with("कवित"));
	assert_eq!(first.kind, SuggestionKind::Direct);
}

#[test]
fn missing_file_is_reported_with_its_path() {
	let dir = tempfile::tempdir().expect("temp dir");
	let path = dir.path().join("absent.json");
	let err = load_directory(&path).unwrap_err();
	assert!(matches!(err, LoadError::Io { .. }));
	assert!(err.to_string().contains("absent.json"));
}
