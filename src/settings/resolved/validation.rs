use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.suggest_limit == 0 {
		return Err(ConfigError::invalid(
			"suggest.limit",
			config.suggest_limit.to_string(),
			sources.source_for_suggest_limit(),
			"must be greater than zero",
		));
	}

	if config.data_path.is_dir() {
		return Err(ConfigError::invalid(
			"data.path",
			config.data_path.display().to_string(),
			sources.source_for_data_path(),
			"must point at a JSON file, not a directory",
		));
	}

	Ok(())
}
