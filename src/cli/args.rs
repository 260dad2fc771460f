use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Parser, Subcommand, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use voterdir::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("voterdir {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "voterdir",
	version,
	long_version = long_version(),
	about = "Search and browse the ward voter list",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `voterdir` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "VOTERDIR_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long = "data",
		value_name = "PATH",
		global = true,
		help = "Voter list JSON file (default: ./voters.json, then the data directory)"
	)]
	pub(crate) data: Option<PathBuf>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		global = true,
		help = "Choose how to print results (default: plain)"
	)]
	pub(crate) output: Option<OutputFormat>,
	#[arg(
		short = 'p',
		long = "print-config",
		global = true,
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		global = true,
		help = "Increase log detail; repeat for more (default: warnings only)"
	)]
	pub(crate) verbose: u8,
	#[command(subcommand)]
	pub(crate) view: ViewCommand,
}

/// The listing to produce.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ViewCommand {
	/// Search names, relation names and EPIC numbers.
	Search {
		#[arg(value_name = "QUERY")]
		query: String,
	},
	/// Browse voters by first letter in Marathi order; omit the letter to list everyone.
	Letter {
		#[arg(value_name = "LETTER")]
		letter: Option<String>,
		#[arg(short = 'q', long, value_name = "QUERY", help = "Narrow the listing by text")]
		query: Option<String>,
	},
	/// List the alphabet with the number of voters per letter.
	Letters,
	/// List one booth with booth-wise serial numbers.
	Booth {
		#[arg(value_name = "ID")]
		booth: u32,
		#[arg(short = 'q', long, value_name = "QUERY", help = "Narrow the booth by text")]
		query: Option<String>,
	},
	/// Summarise voter counts per booth.
	Booths,
	/// Suggest Marathi names for romanised input.
	Suggest {
		#[arg(value_name = "TEXT")]
		text: String,
		#[arg(
			short = 'l',
			long,
			value_name = "NUM",
			help = "Maximum number of suggestions (default: suggest.limit or 10)"
		)]
		limit: Option<usize>,
		#[arg(
			short = 'a',
			long,
			help = "List voters whose name or relation starts with the best suggestion"
		)]
		apply: bool,
	},
	/// Show one voter by EPIC number.
	Show {
		#[arg(value_name = "EPIC")]
		epic: String,
	},
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	Plain,
	Json,
	Cards,
}

impl OutputFormat {
	/// Identifier used in configuration files.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			OutputFormat::Plain => "plain",
			OutputFormat::Json => "json",
			OutputFormat::Cards => "cards",
		}
	}

	pub(crate) fn parse(value: &str) -> Option<Self> {
		<Self as ValueEnum>::from_str(value.trim(), true).ok()
	}
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn command_definition_is_consistent() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn command_supports_custom_styles() {
		assert!(CliArgs::command().get_about().is_some());
	}

	#[test]
	fn global_flags_follow_the_subcommand() {
		let parsed = CliArgs::try_parse_from([
			"voterdir", "booth", "2", "--query", "पाटील", "-o", "cards", "-vv",
		])
		.expect("parses");
		assert_eq!(
			parsed.view,
			ViewCommand::Booth {
				booth: 2,
				query: Some("पाटील".into())
			}
		);
		assert_eq!(parsed.output, Some(OutputFormat::Cards));
		assert_eq!(parsed.verbose, 2);
	}

	#[test]
	fn letter_is_optional() {
		let parsed = CliArgs::try_parse_from(["voterdir", "letter"]).expect("parses");
		assert_eq!(
			parsed.view,
			ViewCommand::Letter {
				letter: None,
				query: None
			}
		);
		assert_eq!(parsed.output, None);
	}

	#[test]
	fn suggest_accepts_apply_flag() {
		let parsed =
			CliArgs::try_parse_from(["voterdir", "suggest", "kav", "--apply", "-l", "3"]).expect("parses");
		assert_eq!(
			parsed.view,
			ViewCommand::Suggest {
				text: "kav".into(),
				limit: Some(3),
				apply: true
			}
		);
	}

	#[test]
	fn a_view_is_required() {
		assert!(CliArgs::try_parse_from(["voterdir"]).is_err());
	}

	#[test]
	fn output_formats_parse_case_insensitively() {
		for format in [OutputFormat::Plain, OutputFormat::Json, OutputFormat::Cards] {
			assert_eq!(OutputFormat::parse(format.as_str()), Some(format));
		}
		assert_eq!(OutputFormat::parse(" JSON "), Some(OutputFormat::Json));
		assert_eq!(OutputFormat::parse("html"), None);
	}
}
