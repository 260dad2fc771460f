mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, ViewCommand, parse_cli};
pub(crate) use output::print;
