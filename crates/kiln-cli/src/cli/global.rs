//! Flags shared by every `kiln` subcommand.

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print nothing but errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colours (also honours `NO_COLOR`).
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read defaults from this TOML file instead of the user config.
    #[arg(short, long, global = true, env = "KILN_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Render command results for people or for tools.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Whether tool-facing JSON was requested explicitly.
    pub fn wants_json(&self) -> bool {
        self.output_format == OutputFormat::Json
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// Coloured, decorated text.
    Human,
    /// Undecorated text.
    Plain,
    /// JSON documents on stdout and JSON log lines on stderr.
    Json,
}
