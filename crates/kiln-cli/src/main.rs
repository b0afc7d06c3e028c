//! `kiln`: Gradle project skeletons for the JVM.
//!
//! Exit codes: `0` success, `1` internal or I/O failure, `2` bad input
//! (including clap usage errors), `4` configuration problem.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here as well.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("kiln: {e}");
        return ExitCode::from(1);
    }
    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        format = ?cli.global.output_format,
        "arguments parsed"
    );

    let verbose = cli.global.verbose > 0;

    // `init` writes the config file, so it cannot depend on reading it.
    let loaded = match cli.command {
        Commands::Init(_) => Ok(AppConfig::default()),
        _ => AppConfig::load(cli.global.config.as_ref()),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            let err = CliError::Config {
                message: format!("{e:#}"),
                source: None,
            };
            return report(err, verbose);
        }
    };

    let output = OutputManager::new(&cli.global, &config);
    match run(cli, config, output) {
        Ok(()) => {
            info!("done");
            ExitCode::SUCCESS
        }
        Err(e) => report(e, verbose),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::New(cmd) => commands::new::execute(cmd, cli.global, config, output),
        Commands::Options(cmd) => commands::options::execute(cmd, output),
        Commands::Init(cmd) => commands::init::execute(cmd, cli.global, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => {
            commands::config::execute(cmd, cli.global.config.as_deref(), config, output)
        }
    }
}

/// Log the failure, describe it on stderr and pick the exit code.
fn report(err: CliError, verbose: bool) -> ExitCode {
    err.log();
    let styled = std::io::IsTerminal::is_terminal(&std::io::stderr());
    eprint!("{}", err.render(verbose, styled));
    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn version_comes_from_the_manifest() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }
}
