mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliArgs, parse_cli};
use settings::ResolvedConfig;
use voterdir::logging;
use workflow::VoterWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_view(&cli, resolved)
}

/// Load the roll, answer the requested view and print it in the chosen format.
fn run_view(cli: &CliArgs, settings: ResolvedConfig) -> Result<()> {
	let format = settings.output;
	let workflow = VoterWorkflow::from_config(settings)?;
	let outcome = workflow.run(&cli.view)?;
	cli::print(&outcome, format)
}
