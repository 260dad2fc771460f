//! Logger setup for the command-line front-end.
//!
//! The library only emits through the `log` facade; the binary decides the
//! level. `RUST_LOG` overrides the verbosity flag.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Map the number of `-v` flags to a level filter.
#[must_use]
pub fn level_for(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

/// Install the global logger. Later calls are ignored.
pub fn initialize(verbosity: u8) {
	let default_filter = level_for(verbosity).to_string().to_lowercase();
	let _ = Builder::from_env(Env::default().default_filter_or(default_filter))
		.format_timestamp(None)
		.format_target(false)
		.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_raises_level() {
		assert_eq!(level_for(0), LevelFilter::Warn);
		assert_eq!(level_for(1), LevelFilter::Info);
		assert_eq!(level_for(2), LevelFilter::Debug);
		assert_eq!(level_for(9), LevelFilter::Trace);
	}

	#[test]
	fn repeated_initialization_is_harmless() {
		initialize(0);
		initialize(2);
	}
}
