use thiserror::Error;

use super::SettingSource;

/// A setting that parsed but cannot be used, with the layer it came from.
#[derive(Debug, Error)]
#[error("{key} from {origin} is invalid: {reason} (got `{value}`)")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}
