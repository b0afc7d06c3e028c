//! `kiln completions`: print a completion script for the chosen shell.

use clap::CommandFactory;

use crate::{
    cli::{Cli, CompletionsArgs},
    error::CliResult,
};

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, bin, &mut std::io::stdout());
    Ok(())
}
