use std::ops::RangeInclusive;

use anyhow::{Context, Result};
use serde::Serialize;
use voterdir::{
	BoothId, BoothPartition, BoothRangeTable, BoothVoter, LetterCount, PartitionSummary,
	Suggestion, VoterDirectory, VoterRecord, apply_suggestion, load_directory, suggest,
};

use crate::cli::ViewCommand;
use crate::settings::ResolvedConfig;

/// A voter row as printed: the record plus its booth placement when the
/// serial number falls inside a configured booth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct Listing<'a> {
	#[serde(flatten)]
	pub(crate) record: &'a VoterRecord,
	pub(crate) booth: Option<BoothId>,
	pub(crate) booth_serial: Option<usize>,
}

impl<'a> From<BoothVoter<'a>> for Listing<'a> {
	fn from(voter: BoothVoter<'a>) -> Self {
		Self {
			record: voter.record,
			booth: Some(voter.booth),
			booth_serial: Some(voter.booth_serial),
		}
	}
}

/// What a view produced, ready for rendering.
#[derive(Debug, Clone)]
pub(crate) enum ViewOutcome<'a> {
	Voters(Vec<Listing<'a>>),
	Booth {
		booth: BoothId,
		start: u32,
		end: u32,
		voters: Vec<Listing<'a>>,
	},
	Letters(Vec<LetterCount>),
	Booths {
		summary: PartitionSummary,
		gaps: Vec<RangeInclusive<u32>>,
	},
	Suggestions {
		query: String,
		suggestions: Vec<Suggestion>,
	},
	Detail {
		epic: String,
		voter: Option<Listing<'a>>,
	},
}

/// Loads the roll once and answers one view against it.
pub(crate) struct VoterWorkflow {
	directory: VoterDirectory,
	booths: BoothRangeTable,
	suggest_limit: usize,
}

impl VoterWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let directory = load_directory(&config.data_path).with_context(|| {
			format!(
				"failed to load voter list from {}",
				config.data_path.display()
			)
		})?;
		Ok(Self::new(directory, config.booths, config.suggest_limit))
	}

	pub(crate) fn new(
		directory: VoterDirectory,
		booths: BoothRangeTable,
		suggest_limit: usize,
	) -> Self {
		Self {
			directory,
			booths,
			suggest_limit,
		}
	}

	pub(crate) fn run(&self, view: &ViewCommand) -> Result<ViewOutcome<'_>> {
		let outcome = match view {
			ViewCommand::Search { query } => {
				let found = self.directory.search(query);
				ViewOutcome::Voters(self.decorate(found))
			}
			ViewCommand::Letter { letter, query } => {
				let found = self
					.directory
					.browse_alphabetical(letter.as_deref(), query.as_deref().unwrap_or_default())?;
				ViewOutcome::Voters(self.decorate(found))
			}
			ViewCommand::Letters => ViewOutcome::Letters(self.directory.letter_counts()),
			ViewCommand::Booth { booth, query } => {
				let booth = BoothId(*booth);
				let voters = self.directory.booth_view(
					booth,
					&self.booths,
					query.as_deref().unwrap_or_default(),
				)?;
				let (start, end) = self
					.booths
					.range_for(booth)
					.map(|range| (range.start, range.end))
					.unwrap_or_default();
				ViewOutcome::Booth {
					booth,
					start,
					end,
					voters: voters.into_iter().map(Listing::from).collect(),
				}
			}
			ViewCommand::Booths => ViewOutcome::Booths {
				summary: self.directory.partition_by_booth(&self.booths).summary(),
				gaps: self.booths.gaps(),
			},
			ViewCommand::Suggest { text, limit, apply } => {
				let suggestions =
					suggest(&self.directory, text, limit.unwrap_or(self.suggest_limit));
				if *apply {
					let found = suggestions
						.first()
						.map(|best| apply_suggestion(&self.directory, &best.text))
						.unwrap_or_default();
					ViewOutcome::Voters(self.decorate(found))
				} else {
					ViewOutcome::Suggestions {
						query: text.clone(),
						suggestions,
					}
				}
			}
			ViewCommand::Show { epic } => {
				let voter = self
					.directory
					.find_by_voter_id(epic)
					.and_then(|record| self.decorate(vec![record]).into_iter().next());
				ViewOutcome::Detail {
					epic: epic.trim().to_string(),
					voter,
				}
			}
		};
		Ok(outcome)
	}

	fn decorate<'a>(&'a self, records: Vec<&'a VoterRecord>) -> Vec<Listing<'a>> {
		if records.is_empty() {
			return Vec::new();
		}
		let partition: BoothPartition<'a> = self.directory.partition_by_booth(&self.booths);
		records
			.into_iter()
			.map(|record| match partition.locate(record) {
				Some(voter) => Listing::from(voter),
				None => Listing {
					record,
					booth: None,
					booth_serial: None,
				},
			})
			.collect()
	}
}
