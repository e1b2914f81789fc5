use std::io;

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::CliError;

/// Write the completion script for the requested shell to stdout.
pub fn run(args: CompletionsArgs) -> Result<(), CliError> {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();
    tracing::debug!(shell = %args.shell, "generating completions");
    clap_complete::generate(args.shell, &mut command, bin_name, &mut io::stdout());
    Ok(())
}
