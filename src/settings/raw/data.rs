use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::CliArgs;
use voterdir::app_dirs;

pub(super) const DEFAULT_DATA_FILE: &str = "voters.json";

/// Location of the voter list as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DataSection {
	pub(super) path: Option<PathBuf>,
}

impl DataSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.data.clone() {
			self.path = Some(path);
		}
	}

	/// Absolute path of the voter list. Without an explicit path,
	/// `voters.json` in the working directory is preferred over the one in
	/// the data directory.
	pub(super) fn resolve(self) -> Result<PathBuf> {
		let current_dir = env::current_dir().context("failed to determine working directory")?;
		let path = match self.path {
			Some(path) => path,
			None => default_data_path(&current_dir),
		};
		if path.is_relative() {
			return Ok(current_dir.join(path));
		}
		Ok(path)
	}
}

fn default_data_path(current_dir: &std::path::Path) -> PathBuf {
	let local = current_dir.join(DEFAULT_DATA_FILE);
	if local.is_file() {
		return local;
	}
	if let Ok(dir) = app_dirs::get_data_dir() {
		let installed = dir.join(DEFAULT_DATA_FILE);
		if installed.is_file() {
			return installed;
		}
	}
	local
}
