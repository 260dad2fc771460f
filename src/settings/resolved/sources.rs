use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
	Default,
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
			Self::Default => f.write_str("built-in default"),
		}
	}
}

/// Where each user-facing setting came from, for error messages and the
/// `--print-config` summary.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) data_path: Option<SettingSource>,
	pub(crate) output_format: Option<SettingSource>,
	pub(crate) suggest_limit: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_data_path(&self) -> SettingSource {
		self.data_path.clone().unwrap_or(SettingSource::Default)
	}

	pub(crate) fn source_for_output_format(&self) -> SettingSource {
		self.output_format
			.clone()
			.unwrap_or(SettingSource::ConfigKey("output.format"))
	}

	pub(crate) fn source_for_suggest_limit(&self) -> SettingSource {
		self.suggest_limit
			.clone()
			.unwrap_or(SettingSource::ConfigKey("suggest.limit"))
	}
}
