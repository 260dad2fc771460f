use anyhow::Result;
use serde_json::json;
use unicode_width::UnicodeWidthStr;
use voterdir::SuggestionKind;

use super::OutputFormat;
use crate::workflow::{Listing, ViewOutcome};

const MISSING: &str = "-";

/// Render a view outcome in the requested format.
pub(crate) fn render(outcome: &ViewOutcome<'_>, format: OutputFormat) -> Result<String> {
	match format {
		OutputFormat::Plain => Ok(format_plain(outcome)),
		OutputFormat::Json => format_json(outcome),
		OutputFormat::Cards => Ok(format_cards(outcome)),
	}
}

/// Print a view outcome in the requested format.
pub(crate) fn print(outcome: &ViewOutcome<'_>, format: OutputFormat) -> Result<()> {
	println!("{}", render(outcome, format)?);
	Ok(())
}

/// Aligned text columns.
pub(crate) fn format_plain(outcome: &ViewOutcome<'_>) -> String {
	match outcome {
		ViewOutcome::Voters(voters) => voter_table(voters),
		ViewOutcome::Booth {
			booth,
			start,
			end,
			voters,
		} => format!(
			"Booth {booth} (serials {start}-{end}): {} voters\n{}",
			voters.len(),
			voter_table(voters)
		),
		ViewOutcome::Letters(counts) => {
			let rows = counts
				.iter()
				.map(|count| vec![count.letter.to_string(), count.voters.to_string()])
				.collect();
			table(&["Letter", "Voters"], rows)
		}
		ViewOutcome::Booths { summary, gaps } => {
			let rows = summary
				.booths
				.iter()
				.map(|count| {
					vec![
						count.booth.to_string(),
						format!("{}-{}", count.start, count.end),
						count.voters.to_string(),
					]
				})
				.collect();
			let mut text = table(&["Booth", "Serials", "Voters"], rows);
			text.push_str(&format!(
				"\nAssigned: {}  Outside every booth: {}  Without serial: {}",
				summary.assigned, summary.unassigned, summary.unnumbered
			));
			for gap in gaps {
				text.push_str(&format!(
					"\nSerials {}-{} belong to no booth",
					gap.start(),
					gap.end()
				));
			}
			text
		}
		ViewOutcome::Suggestions { query, suggestions } => {
			if suggestions.is_empty() {
				return format!("No suggestions for '{query}'");
			}
			let rows = suggestions
				.iter()
				.map(|suggestion| {
					vec![
						suggestion.text.clone(),
						suggestion.score.to_string(),
						kind_label(suggestion.kind).to_string(),
					]
				})
				.collect();
			table(&["Suggestion", "Score", "Match"], rows)
		}
		ViewOutcome::Detail { epic, voter } => match voter {
			Some(voter) => card(voter),
			None => format!("No voter with EPIC '{epic}'"),
		},
	}
}

/// Pretty-printed JSON; voter rows carry every record field plus booth
/// placement.
pub(crate) fn format_json(outcome: &ViewOutcome<'_>) -> Result<String> {
	let payload = match outcome {
		ViewOutcome::Voters(voters) => json!({
			"count": voters.len(),
			"voters": voters,
		}),
		ViewOutcome::Booth {
			booth,
			start,
			end,
			voters,
		} => json!({
			"booth": booth,
			"start": start,
			"end": end,
			"count": voters.len(),
			"voters": voters,
		}),
		ViewOutcome::Letters(counts) => json!({ "letters": counts }),
		ViewOutcome::Booths { summary, gaps } => {
			let gaps: Vec<_> = gaps
				.iter()
				.map(|gap| json!({ "start": gap.start(), "end": gap.end() }))
				.collect();
			json!({
				"booths": summary.booths,
				"assigned": summary.assigned,
				"unassigned": summary.unassigned,
				"unnumbered": summary.unnumbered,
				"gaps": gaps,
			})
		}
		ViewOutcome::Suggestions { query, suggestions } => json!({
			"query": query,
			"suggestions": suggestions,
		}),
		ViewOutcome::Detail { epic, voter } => json!({
			"epic": epic,
			"voter": voter,
		}),
	};

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print cards for voter listings; other views fall back to plain text.
pub(crate) fn format_cards(outcome: &ViewOutcome<'_>) -> String {
	let voters = match outcome {
		ViewOutcome::Voters(voters) | ViewOutcome::Booth { voters, .. } => voters,
		_ => return format_plain(outcome),
	};
	if voters.is_empty() {
		return "No voters found".to_string();
	}
	voters.iter().map(card).collect::<Vec<_>>().join("\n\n")
}

fn card(voter: &Listing<'_>) -> String {
	let record = voter.record;
	[
		record.name_marathi.trim().to_string(),
		format!(
			"घर क्रमांक: {} • वय: {}",
			or_missing(&record.house_no),
			optional(record.age)
		),
		format!(
			"नाते: {} - {}",
			or_missing(&record.relation_type),
			or_missing(&record.relation_name_marathi)
		),
		format!(
			"Booth: {} • Booth Sr: {}",
			optional(voter.booth),
			optional(voter.booth_serial)
		),
		format!(
			"EPIC: {} • अनुक्रमांक: {}",
			or_missing(&record.voter_id),
			optional(record.serial_no)
		),
	]
	.join("\n")
}

fn voter_table(voters: &[Listing<'_>]) -> String {
	if voters.is_empty() {
		return "No voters found".to_string();
	}
	let rows = voters
		.iter()
		.map(|voter| {
			let record = voter.record;
			vec![
				optional(record.serial_no),
				optional(voter.booth),
				optional(voter.booth_serial),
				or_missing(&record.voter_id).to_string(),
				record.name_marathi.trim().to_string(),
				or_missing(&record.relation_type).to_string(),
				or_missing(&record.relation_name_marathi).to_string(),
				optional(record.age),
				or_missing(&record.gender).to_string(),
				or_missing(&record.house_no).to_string(),
			]
		})
		.collect();
	table(
		&[
			"Sr", "Booth", "Booth Sr", "EPIC", "Name", "Rel", "Relation", "Age", "Sex", "House",
		],
		rows,
	)
}

/// Left-aligned columns padded by display width, so Devanagari combining
/// marks do not skew alignment.
fn table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
	let mut widths: Vec<usize> = headers.iter().map(|header| header.width()).collect();
	for row in &rows {
		for (width, cell) in widths.iter_mut().zip(row) {
			*width = (*width).max(cell.width());
		}
	}

	let header: Vec<String> = headers.iter().map(|header| header.to_string()).collect();
	std::iter::once(header)
		.chain(rows)
		.map(|row: Vec<String>| {
			let cells: Vec<String> = row
				.iter()
				.zip(&widths)
				.map(|(cell, width)| pad(cell, *width))
				.collect();
			cells.join("  ").trim_end().to_string()
		})
		.collect::<Vec<_>>()
		.join("\n")
}

fn pad(cell: &str, width: usize) -> String {
	let fill = width.saturating_sub(cell.width());
	format!("{cell}{}", " ".repeat(fill))
}

fn kind_label(kind: SuggestionKind) -> &'static str {
	match kind {
		SuggestionKind::Direct => "direct",
		SuggestionKind::Fuzzy => "fuzzy",
	}
}

fn or_missing(value: &str) -> &str {
	let value = value.trim();
	if value.is_empty() { MISSING } else { value }
}

fn optional<T: ToString>(value: Option<T>) -> String {
	value.map_or_else(|| MISSING.to_string(), |value| value.to_string())
}
