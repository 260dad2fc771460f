use super::*;
use crate::booths::BoothRangeTable;

fn voter(serial_no: Option<u32>, voter_id: &str, name: &str, relation: &str) -> VoterRecord {
	VoterRecord {
		serial_no,
		voter_id: voter_id.into(),
		name_marathi: name.into(),
		relation_name_marathi: relation.into(),
		..VoterRecord::default()
	}
}

fn fixture() -> VoterDirectory {
	VoterDirectory::load(vec![
		voter(Some(1), "MH001", "अजय शिंदे", "शंकर शिंदे"),
		voter(Some(945), "MH002", "कविता पाटील", "चंदन पाटील"),
		voter(Some(2), "ABC123", "चंदन पाटील", "बस्वराज पाटील"),
		voter(Some(1924), "MH004", "क्षमा जाधव", "रमेश जाधव"),
		voter(Some(3000), "MH005", "आशा कांबळे", "सुनील कांबळे"),
		voter(Some(10), "MH006", "  किरण देशमुख", "विजय देशमुख"),
		voter(Some(11), "MH007", "अजय शिंदे", "गणेश शिंदे"),
		voter(None, "MH008", "कमल", ""),
	])
}

fn ids(records: &[&VoterRecord]) -> Vec<String> {
	records.iter().map(|record| record.voter_id.clone()).collect()
}

#[test]
fn search_is_case_insensitive_substring() {
	let directory = fixture();
	assert_eq!(ids(&directory.search("पाटील")), ["MH002", "ABC123"]);
	assert_eq!(ids(&directory.search("पाटी")), ["MH002", "ABC123"]);
	assert_eq!(ids(&directory.search("  abc1 ")), ["ABC123"]);
	assert_eq!(ids(&directory.search("रमेश")), ["MH004"]);
}

#[test]
fn blank_search_returns_nothing() {
	let directory = fixture();
	assert!(directory.search("").is_empty());
	assert!(directory.search("   ").is_empty());
	assert!(directory.search("🙂").is_empty());
}

#[test]
fn letter_filter_is_exact_prefix_of_trimmed_name() {
	let directory = fixture();
	for letter in MARATHI_ALPHABET {
		let selected = directory.filter_by_letter(letter);
		for record in directory.records() {
			let expected = record.name_marathi.trim().starts_with(letter);
			let present = selected.iter().any(|candidate| std::ptr::eq(*candidate, record));
			assert_eq!(present, expected, "letter {letter}, voter {}", record.voter_id);
		}
	}

	assert_eq!(ids(&directory.filter_by_letter("क्ष")), ["MH004"]);
	assert_eq!(ids(&directory.filter_by_letter("क")), ["MH002", "MH004", "MH006", "MH008"]);
	assert!(directory.filter_by_letter("ज्ञ").is_empty());
}

#[test]
fn letter_and_query_combine_with_and_semantics() {
	let directory = fixture();
	assert_eq!(ids(&directory.filter_by_letter_matching("अ", "गणेश")), ["MH007"]);
	assert_eq!(ids(&directory.filter_by_letter_matching("अ", "")), ["MH001", "MH007"]);
	assert!(directory.filter_by_letter_matching("च", "कविता").is_empty());
}

#[test]
fn alphabetical_browse_sorts_in_marathi_order() {
	let directory = fixture();
	let listed = directory.browse_alphabetical(Some("क"), "").expect("known letter");
	assert_eq!(ids(&listed), ["MH008", "MH002", "MH006", "MH004"]);
}

#[test]
fn show_all_sorts_whole_roll_stably() {
	let directory = fixture();
	let listed = directory.browse_alphabetical(None, "").expect("all");
	assert_eq!(listed.len(), directory.len());
	assert_eq!(
		ids(&listed[..3]),
		["MH001", "MH007", "MH005"],
		"duplicate names keep roll order"
	);
	assert_eq!(listed.last().map(|record| record.voter_id.as_str()), Some("MH004"));

	let narrowed = directory.browse_alphabetical(None, "शिंदे").expect("all");
	assert_eq!(ids(&narrowed), ["MH001", "MH007"]);
}

#[test]
fn unknown_letters_are_rejected() {
	let directory = fixture();
	let err = directory.browse_alphabetical(Some("ऋ"), "").unwrap_err();
	assert_eq!(
		err,
		QueryError::UnknownLetter {
			letter: "ऋ".into()
		}
	);
}

#[test]
fn sort_orders_vowels_before_consonants() {
	let records = [
		voter(None, "3", "कमला", ""),
		voter(None, "1", "अनिल", ""),
		voter(None, "2", "आनंद", ""),
		voter(None, "4", "अनिल", ""),
	];
	let refs: Vec<&VoterRecord> = records.iter().collect();
	assert_eq!(ids(&sort_alphabetical(&refs)), ["1", "4", "2", "3"]);
}

#[test]
fn letter_counts_follow_alphabet() {
	let directory = fixture();
	let counts = directory.letter_counts();
	assert_eq!(counts.len(), MARATHI_ALPHABET.len());
	assert_eq!(counts[0], LetterCount { letter: "अ", voters: 2 });
	let ksha = counts.iter().find(|count| count.letter == "क्ष").expect("क्ष");
	assert_eq!(ksha.voters, 1);
}

#[test]
fn epic_lookup_ignores_case() {
	let directory = fixture();
	let record = directory.find_by_voter_id(" abc123 ").expect("found");
	assert_eq!(record.name_marathi, "चंदन पाटील");
	assert!(directory.find_by_voter_id("").is_none());
	assert!(directory.find_by_voter_id("MH999").is_none());
}

#[test]
fn booth_view_keeps_full_slice_serials_when_narrowed() {
	let directory = fixture();
	let table = BoothRangeTable::canonical();

	let booth_one = directory.booth_view(BoothId(1), &table, "").expect("booth 1");
	let serials: Vec<_> = booth_one
		.iter()
		.map(|voter| (voter.record.serial_no, voter.booth_serial))
		.collect();
	assert_eq!(serials, [(Some(1), 1), (Some(2), 2), (Some(10), 3), (Some(11), 4)]);

	let narrowed = directory.booth_view(BoothId(1), &table, "पाटील").expect("booth 1");
	assert_eq!(narrowed.len(), 1);
	assert_eq!(narrowed[0].record.voter_id, "ABC123");
	assert_eq!(narrowed[0].booth_serial, 2);
	assert_eq!(narrowed[0].record.serial_no, Some(2));
}

#[test]
fn booth_view_rejects_unconfigured_booth() {
	let directory = fixture();
	let err = directory
		.booth_view(BoothId(9), &BoothRangeTable::canonical(), "")
		.unwrap_err();
	assert_eq!(err, QueryError::UnknownBooth { booth: BoothId(9) });
}

#[test]
fn partition_counts_records_without_serials() {
	let directory = fixture();
	let partition = directory.partition_by_booth(&BoothRangeTable::canonical());
	assert_eq!(partition.assigned(), 7);
	assert_eq!(partition.unnumbered(), 1);
	assert_eq!(partition.unassigned(), 0);
}

#[test]
fn queries_leave_the_roll_untouched() {
	let directory = fixture();
	let before = directory.records().to_vec();

	let _ = directory.search("पाटील");
	let _ = directory.browse_alphabetical(None, "");
	let _ = directory.partition_by_booth(&BoothRangeTable::canonical());

	assert_eq!(directory.records(), before.as_slice());
}
