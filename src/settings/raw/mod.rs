use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use voterdir::{BoothRange, BoothRangeTable, DEFAULT_SUGGESTION_LIMIT};

use crate::cli::{CliArgs, OutputFormat};

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

mod data;
mod output;

use data::DataSection;
use output::{OutputSection, SuggestSection, cli_limit};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	data: DataSection,
	output: OutputSection,
	suggest: SuggestSection,
	booths: Option<Vec<BoothRange>>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.data.apply_cli_overrides(cli);
		self.output.apply_cli_overrides(cli);
		self.suggest.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			data_path: detect_source(
				cli.data.is_some(),
				self.data.path.is_some(),
				"VOTERDIR__DATA__PATH",
				"--data",
				"data.path",
			),
			output_format: detect_source(
				cli.output.is_some(),
				self.output.format.is_some(),
				"VOTERDIR__OUTPUT__FORMAT",
				"--output",
				"output.format",
			),
			suggest_limit: detect_source(
				cli_limit(cli).is_some(),
				self.suggest.limit.is_some(),
				"VOTERDIR__SUGGEST__LIMIT",
				"--limit",
				"suggest.limit",
			),
		};

		let output = match self.output.format {
			Some(raw) => OutputFormat::parse(&raw).ok_or_else(|| {
				ConfigError::invalid(
					"output.format",
					raw.clone(),
					sources.source_for_output_format(),
					"expected one of plain, json, cards",
				)
			})?,
			None => OutputFormat::Plain,
		};

		let booths_configured = self.booths.is_some();
		let booths = match self.booths {
			Some(ranges) => resolve_booths(ranges)?,
			None => BoothRangeTable::canonical(),
		};
		for gap in booths.gaps() {
			log::warn!(
				"serials {}-{} are not covered by any booth",
				gap.start(),
				gap.end()
			);
		}

		let config = ResolvedConfig {
			data_path: self.data.resolve()?,
			output,
			suggest_limit: self.suggest.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT),
			booths,
			booths_configured,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn resolve_booths(ranges: Vec<BoothRange>) -> Result<BoothRangeTable, ConfigError> {
	let described = ranges
		.iter()
		.map(|range| format!("{}:{}-{}", range.booth, range.start, range.end))
		.collect::<Vec<_>>()
		.join(", ");
	BoothRangeTable::new(ranges).map_err(|err| {
		ConfigError::invalid(
			"booths",
			described,
			SettingSource::ConfigKey("booths"),
			err.to_string(),
		)
	})
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
