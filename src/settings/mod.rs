//! Configuration loading and resolution utilities.
//!
//! [`load`] combines configuration files, environment variables and CLI flags
//! into a [`ResolvedConfig`]. Booth ranges are validated here, once, before
//! any query runs.

mod raw;
mod resolved;
mod sources;

use anyhow::{Context, Result};

use crate::cli::CliArgs;
use raw::RawConfig;
pub use resolved::ResolvedConfig;
use sources::build_config;

/// Layer files, `VOTERDIR__*` variables and CLI flags, then validate.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let merged = build_config(cli)?;
	let mut raw: RawConfig = merged
		.try_deserialize()
		.context("configuration does not match the expected sections")?;
	raw.apply_cli_overrides(cli);

	let resolved = raw.resolve(cli)?;
	log::debug!(
		"voter list {}, {} booths",
		resolved.data_path.display(),
		resolved.booths.ranges().len()
	);
	Ok(resolved)
}
