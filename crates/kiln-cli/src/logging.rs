//! Tracing subscriber setup for the `kiln` binary.
//!
//! The library crates emit events; only this module installs a subscriber.
//! Everything goes to stderr so stdout stays reserved for command results.
//! `RUST_LOG`, when set, replaces the flag-derived filter entirely.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events pass the verbosity filter.
const TARGETS: [&str; 3] = ["kiln", "kiln_core", "kiln_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level_for(args))));

    // Exactly one of the two layers is active.
    let (json, text) = if args.wants_json() {
        (Some(fmt::layer().json().with_writer(std::io::stderr)), None)
    } else {
        let ansi = !args.no_color && std::io::stderr().is_terminal();
        let text = fmt::layer()
            .compact()
            .with_target(false)
            .with_ansi(ansi)
            .with_writer(std::io::stderr);
        (None, Some(text))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

/// `--quiet` pins ERROR; otherwise each `-v` lifts the WARN floor one step.
fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn filter_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::global::OutputFormat;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn warn_without_flags() {
        assert_eq!(level_for(&args(0, false)), LevelFilter::WARN);
    }

    #[test]
    fn each_v_raises_the_level() {
        assert_eq!(level_for(&args(1, false)), LevelFilter::INFO);
        assert_eq!(level_for(&args(2, false)), LevelFilter::DEBUG);
        assert_eq!(level_for(&args(3, false)), LevelFilter::TRACE);
        assert_eq!(level_for(&args(9, false)), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(level_for(&args(0, true)), LevelFilter::ERROR);
        assert_eq!(level_for(&args(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn directives_cover_every_kiln_crate() {
        assert_eq!(
            filter_directives(LevelFilter::DEBUG),
            "kiln=debug,kiln_core=debug,kiln_adapters=debug"
        );
    }
}
