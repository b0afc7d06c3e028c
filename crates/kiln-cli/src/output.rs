//! Stdout rendering for command results.
//!
//! Quiet mode silences human text but never JSON or raw lines: a caller
//! that asked for machine output is parsing it.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Plain,
    Success,
    Warning,
    Info,
    Header,
    Detail,
}

/// Writes command results to stdout in the resolved format.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format` wins over the configured `output.format`.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => parse_format(&config.output.format),
            explicit => explicit,
        };
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Plain, msg)
    }

    /// `✓ <msg>`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Success, msg)
    }

    /// `⚠ <msg>`
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Warning, msg)
    }

    /// `ℹ <msg>`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.emit(Tone::Header, text)
    }

    /// Secondary detail, dimmed when colour is on.
    pub fn detail(&self, text: &str) -> io::Result<()> {
        self.emit(Tone::Detail, text)
    }

    fn emit(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = match (tone, self.no_color) {
            (Tone::Plain, _) | (Tone::Header | Tone::Detail, true) => msg.to_owned(),
            (Tone::Success, true) => format!("\u{2713} {msg}"),
            (Tone::Warning, true) => format!("\u{26a0} {msg}"),
            (Tone::Info, true) => format!("\u{2139} {msg}"),
            (Tone::Success, false) => format!("{} {}", "\u{2713}".green().bold(), msg.green()),
            (Tone::Warning, false) => format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow()),
            (Tone::Info, false) => format!("{} {}", "\u{2139}".blue().bold(), msg.blue()),
            (Tone::Header, false) => msg.cyan().bold().to_string(),
            (Tone::Detail, false) => msg.dimmed().to_string(),
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON on stdout.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Unstyled line for list and CSV output.
    pub fn raw(&self, line: &str) -> io::Result<()> {
        self.term.write_line(line)
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

/// Unknown names fall back to auto-detection.
fn parse_format(name: &str) -> OutputFormat {
    match name.trim().to_ascii_lowercase().as_str() {
        "human" => OutputFormat::Human,
        "plain" => OutputFormat::Plain,
        "json" => OutputFormat::Json,
        _ => OutputFormat::Auto,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
