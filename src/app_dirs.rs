//! Per-user configuration and data directories for `voterdir`.
//!
//! `VOTERDIR_CONFIG_DIR` and `VOTERDIR_DATA_DIR` take precedence over the
//! platform locations from the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
	Config,
	Data,
}

impl Location {
	fn override_var(self) -> &'static str {
		match self {
			Location::Config => "VOTERDIR_CONFIG_DIR",
			Location::Data => "VOTERDIR_DATA_DIR",
		}
	}

	fn platform_dir(self, dirs: &ProjectDirs) -> PathBuf {
		match self {
			Location::Config => dirs.config_local_dir().to_path_buf(),
			Location::Data => dirs.data_local_dir().to_path_buf(),
		}
	}
}

fn resolve(location: Location) -> Result<PathBuf> {
	// An empty override counts as unset.
	if let Some(dir) = env::var_os(location.override_var()).filter(|value| !value.is_empty()) {
		return Ok(PathBuf::from(dir));
	}

	let dirs = ProjectDirs::from("org", "ward16", "voterdir")
		.ok_or_else(|| anyhow!("no home directory to place voterdir {location:?} files in"))?;
	Ok(location.platform_dir(&dirs))
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	resolve(Location::Config)
}

/// Directory searched for `voters.json` when no data path is configured.
pub fn get_data_dir() -> Result<PathBuf> {
	resolve(Location::Data)
}
