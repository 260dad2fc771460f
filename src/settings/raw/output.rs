use serde::Deserialize;

use crate::cli::{CliArgs, ViewCommand};

/// Rendering preferences as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct OutputSection {
	pub(super) format: Option<String>,
}

impl OutputSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(format) = cli.output {
			self.format = Some(format.as_str().to_string());
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SuggestSection {
	pub(super) limit: Option<usize>,
}

impl SuggestSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(limit) = cli_limit(cli) {
			self.limit = Some(limit);
		}
	}
}

/// The `--limit` flag of the `suggest` view, if given.
pub(super) fn cli_limit(cli: &CliArgs) -> Option<usize> {
	match &cli.view {
		ViewCommand::Suggest { limit, .. } => *limit,
		_ => None,
	}
}
